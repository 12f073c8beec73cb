pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_table;
mod m20220108_000002_create_table_offre_candidature;
mod m20220115_000003_create_table_emploi_du_temps;
mod m20220122_000004_add_unique_index_utilisateur;
mod m20220201_000005_create_table_session;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_table::Migration),
            Box::new(m20220108_000002_create_table_offre_candidature::Migration),
            Box::new(m20220115_000003_create_table_emploi_du_temps::Migration),
            Box::new(m20220122_000004_add_unique_index_utilisateur::Migration),
            Box::new(m20220201_000005_create_table_session::Migration),
        ]
    }
}
