use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmploiDuTemps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmploiDuTemps::EmploiId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(EmploiDuTemps::ClasseId).uuid().not_null())
                    .col(ColumnDef::new(EmploiDuTemps::MatiereId).uuid().not_null())
                    .col(
                        ColumnDef::new(EmploiDuTemps::EnseignantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EmploiDuTemps::Jour).string().not_null())
                    .col(ColumnDef::new(EmploiDuTemps::HeureDebut).string().not_null())
                    .col(ColumnDef::new(EmploiDuTemps::HeureFin).string().not_null())
                    .col(
                        ColumnDef::new(EmploiDuTemps::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(EmploiDuTemps::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emploi_classe")
                            .from_tbl(EmploiDuTemps::Table)
                            .from_col(EmploiDuTemps::ClasseId)
                            .to_tbl(Classe::Table)
                            .to_col(Classe::ClasseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emploi_matiere")
                            .from_tbl(EmploiDuTemps::Table)
                            .from_col(EmploiDuTemps::MatiereId)
                            .to_tbl(Matiere::Table)
                            .to_col(Matiere::MatiereId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emploi_enseignant")
                            .from_tbl(EmploiDuTemps::Table)
                            .from_col(EmploiDuTemps::EnseignantId)
                            .to_tbl(Enseignant::Table)
                            .to_col(Enseignant::EnseignantId)
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
            .drop_table(Table::drop().table(EmploiDuTemps::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum EmploiDuTemps {
    Table,
    EmploiId,
    ClasseId,
    MatiereId,
    EnseignantId,
    Jour,
    HeureDebut,
    HeureFin,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Classe {
    Table,
    ClasseId,
}

#[derive(DeriveIden)]
enum Matiere {
    Table,
    MatiereId,
}

#[derive(DeriveIden)]
enum Enseignant {
    Table,
    EnseignantId,
}
