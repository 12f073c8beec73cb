use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Concurrent student creations can derive the same username; let the
        // store reject the second write instead of silently duplicating.
        manager
            .create_index(
                Index::create()
                    .name("idx_utilisateur_nom_utilisateur_unique")
                    .table(Utilisateur::Table)
                    .col(Utilisateur::NomUtilisateur)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_utilisateur_cin_unique")
                    .table(Utilisateur::Table)
                    .col(Utilisateur::Cin)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_utilisateur_cin_unique")
                    .table(Utilisateur::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_utilisateur_nom_utilisateur_unique")
                    .table(Utilisateur::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Utilisateur {
    Table,
    NomUtilisateur,
    Cin,
}
