use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::config::APP_CONFIG;

pub static DATABASE_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn get_database_connection() -> &'static DatabaseConnection {
    if let Some(conn) = DATABASE_CONNECTION.get() {
        return conn;
    }

    let mut options = ConnectOptions::new(APP_CONFIG.database_url.clone());
    options
        .connect_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(45))
        .sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .expect("Failed to connect to database");

    DATABASE_CONNECTION
        .set(connection)
        .expect("DATABASE_CONNECTION already set");

    DATABASE_CONNECTION.get().unwrap()
}
