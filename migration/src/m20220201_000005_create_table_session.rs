use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Session::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Session::SessionId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Session::UtilisateurId).uuid().not_null())
                    .col(ColumnDef::new(Session::Token).text().not_null())
                    .col(ColumnDef::new(Session::ExpiresAt).timestamp().not_null())
                    .col(
                        ColumnDef::new(Session::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_utilisateur")
                            .from_tbl(Session::Table)
                            .from_col(Session::UtilisateurId)
                            .to_tbl(Utilisateur::Table)
                            .to_col(Utilisateur::UtilisateurId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_token")
                    .table(Session::Table)
                    .col(Session::Token)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Session::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Session {
    Table,
    SessionId,
    UtilisateurId,
    Token,
    ExpiresAt,
    CreateAt,
}

#[derive(DeriveIden)]
enum Utilisateur {
    Table,
    UtilisateurId,
}
