use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::session;
use crate::static_service::DATABASE_CONNECTION;

pub struct SessionRepository;

impl SessionRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn create(
        &self,
        session_id: Uuid,
        utilisateur_id: Uuid,
        token: String,
        expires_at: NaiveDateTime,
    ) -> Result<session::Model> {
        let db = self.get_connection();

        let session_model = session::ActiveModel {
            session_id: Set(session_id),
            utilisateur_id: Set(utilisateur_id),
            token: Set(token),
            expires_at: Set(expires_at),
            create_at: Set(Utc::now().naive_utc()),
        };

        let result = session_model.insert(db).await?;
        Ok(result)
    }

    pub async fn delete_by_token(&self, token: &str) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = session::Entity::delete_many()
            .filter(session::Column::Token.eq(token))
            .exec(db)
            .await?;
        Ok(result)
    }

    pub async fn delete_expired(&self) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = session::Entity::delete_many()
            .filter(session::Column::ExpiresAt.lt(Utc::now().naive_utc()))
            .exec(db)
            .await?;
        Ok(result)
    }
}
