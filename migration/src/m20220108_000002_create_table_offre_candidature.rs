use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offre::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offre::OffreId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Offre::Titre).string().not_null())
                    .col(ColumnDef::new(Offre::Description).string().not_null())
                    .col(ColumnDef::new(Offre::DateLimite).date().null())
                    .col(
                        ColumnDef::new(Offre::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Offre::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Candidature::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidature::CandidatureId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Candidature::OffreId).uuid().not_null())
                    .col(ColumnDef::new(Candidature::Nom).string().not_null())
                    .col(ColumnDef::new(Candidature::Email).string().not_null())
                    .col(ColumnDef::new(Candidature::Message).string().null())
                    .col(
                        ColumnDef::new(Candidature::Statut)
                            .string()
                            .not_null()
                            .default("en_attente"),
                    )
                    .col(
                        ColumnDef::new(Candidature::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Candidature::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidature_offre")
                            .from_tbl(Candidature::Table)
                            .from_col(Candidature::OffreId)
                            .to_tbl(Offre::Table)
                            .to_col(Offre::OffreId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidature::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Offre::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Offre {
    Table,
    OffreId,
    Titre,
    Description,
    DateLimite,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Candidature {
    Table,
    CandidatureId,
    OffreId,
    Nom,
    Email,
    Message,
    Statut,
    CreateAt,
    UpdateAt,
}
