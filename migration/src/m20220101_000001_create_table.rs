use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(RoleEnum::Table)
                    .values([RoleEnum::Admin, RoleEnum::Enseignant, RoleEnum::Eleve])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(StatutEnum::Table)
                    .values([StatutEnum::Actif, StatutEnum::Inactif])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Classe::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classe::ClasseId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Classe::Nom).string().not_null())
                    .col(ColumnDef::new(Classe::Niveau).string().not_null())
                    .col(
                        ColumnDef::new(Classe::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Classe::UpdateAt)
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
                    .table(Enseignant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enseignant::EnseignantId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Enseignant::Nom).string().not_null())
                    .col(ColumnDef::new(Enseignant::Prenom).string().not_null())
                    .col(ColumnDef::new(Enseignant::Email).string().not_null())
                    .col(ColumnDef::new(Enseignant::Telephone).string().null())
                    .col(ColumnDef::new(Enseignant::Specialite).string().null())
                    .col(
                        ColumnDef::new(Enseignant::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Enseignant::UpdateAt)
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
                    .table(Matiere::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Matiere::MatiereId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Matiere::Nom).string().not_null())
                    .col(
                        ColumnDef::new(Matiere::Coefficient)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Matiere::Description).string().null())
                    .col(
                        ColumnDef::new(Matiere::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Matiere::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        // Qualified teachers per subject
        manager
            .create_table(
                Table::create()
                    .table(MatiereEnseignant::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MatiereEnseignant::MatiereId).uuid().not_null())
                    .col(
                        ColumnDef::new(MatiereEnseignant::EnseignantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MatiereEnseignant::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .primary_key(
                        Index::create()
                            .col(MatiereEnseignant::MatiereId)
                            .col(MatiereEnseignant::EnseignantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matiere_enseignant_matiere")
                            .from_tbl(MatiereEnseignant::Table)
                            .from_col(MatiereEnseignant::MatiereId)
                            .to_tbl(Matiere::Table)
                            .to_col(Matiere::MatiereId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matiere_enseignant_enseignant")
                            .from_tbl(MatiereEnseignant::Table)
                            .from_col(MatiereEnseignant::EnseignantId)
                            .to_tbl(Enseignant::Table)
                            .to_col(Enseignant::EnseignantId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Ordered (matiere, enseignant) assignments per class
        manager
            .create_table(
                Table::create()
                    .table(ClasseMatiere::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ClasseMatiere::ClasseId).uuid().not_null())
                    .col(ColumnDef::new(ClasseMatiere::MatiereId).uuid().not_null())
                    .col(ColumnDef::new(ClasseMatiere::EnseignantId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClasseMatiere::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClasseMatiere::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .primary_key(
                        Index::create()
                            .col(ClasseMatiere::ClasseId)
                            .col(ClasseMatiere::MatiereId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classe_matiere_classe")
                            .from_tbl(ClasseMatiere::Table)
                            .from_col(ClasseMatiere::ClasseId)
                            .to_tbl(Classe::Table)
                            .to_col(Classe::ClasseId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classe_matiere_matiere")
                            .from_tbl(ClasseMatiere::Table)
                            .from_col(ClasseMatiere::MatiereId)
                            .to_tbl(Matiere::Table)
                            .to_col(Matiere::MatiereId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classe_matiere_enseignant")
                            .from_tbl(ClasseMatiere::Table)
                            .from_col(ClasseMatiere::EnseignantId)
                            .to_tbl(Enseignant::Table)
                            .to_col(Enseignant::EnseignantId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Eleve::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Eleve::EleveId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Eleve::Nom).string().not_null())
                    .col(ColumnDef::new(Eleve::Prenom).string().not_null())
                    .col(ColumnDef::new(Eleve::Email).string().not_null())
                    .col(ColumnDef::new(Eleve::Telephone).string().null())
                    .col(ColumnDef::new(Eleve::DateNaissance).date().null())
                    .col(ColumnDef::new(Eleve::Adresse).string().null())
                    .col(
                        ColumnDef::new(Eleve::Statut)
                            .custom("statut_enum")
                            .not_null()
                            .extra("DEFAULT 'actif'".to_string()),
                    )
                    .col(ColumnDef::new(Eleve::ClasseId).uuid().not_null())
                    .col(
                        ColumnDef::new(Eleve::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Eleve::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eleve_classe")
                            .from_tbl(Eleve::Table)
                            .from_col(Eleve::ClasseId)
                            .to_tbl(Classe::Table)
                            .to_col(Classe::ClasseId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Utilisateur::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utilisateur::UtilisateurId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Utilisateur::NomUtilisateur).string().not_null())
                    .col(ColumnDef::new(Utilisateur::Email).string().not_null())
                    .col(ColumnDef::new(Utilisateur::MotDePasse).string().not_null())
                    .col(ColumnDef::new(Utilisateur::Cin).string().not_null())
                    .col(
                        ColumnDef::new(Utilisateur::Role)
                            .custom("role_enum")
                            .not_null(),
                    )
                    .col(ColumnDef::new(Utilisateur::EleveId).uuid().null())
                    .col(ColumnDef::new(Utilisateur::EnseignantId).uuid().null())
                    .col(
                        ColumnDef::new(Utilisateur::Statut)
                            .custom("statut_enum")
                            .not_null()
                            .extra("DEFAULT 'actif'".to_string()),
                    )
                    .col(
                        ColumnDef::new(Utilisateur::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Utilisateur::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utilisateur_eleve")
                            .from_tbl(Utilisateur::Table)
                            .from_col(Utilisateur::EleveId)
                            .to_tbl(Eleve::Table)
                            .to_col(Eleve::EleveId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_utilisateur_enseignant")
                            .from_tbl(Utilisateur::Table)
                            .from_col(Utilisateur::EnseignantId)
                            .to_tbl(Enseignant::Table)
                            .to_col(Enseignant::EnseignantId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Note::NoteId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Note::EleveId).uuid().not_null())
                    .col(ColumnDef::new(Note::MatiereId).uuid().not_null())
                    .col(ColumnDef::new(Note::Valeur).decimal_len(5, 2).not_null())
                    .col(
                        ColumnDef::new(Note::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Note::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_note_eleve")
                            .from_tbl(Note::Table)
                            .from_col(Note::EleveId)
                            .to_tbl(Eleve::Table)
                            .to_col(Eleve::EleveId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_note_matiere")
                            .from_tbl(Note::Table)
                            .from_col(Note::MatiereId)
                            .to_tbl(Matiere::Table)
                            .to_col(Matiere::MatiereId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Paiement::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Paiement::PaiementId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Paiement::EleveId).uuid().not_null())
                    .col(ColumnDef::new(Paiement::Tranche).string().not_null())
                    .col(
                        ColumnDef::new(Paiement::Montant)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Paiement::AnneeScolaire).string().not_null())
                    .col(
                        ColumnDef::new(Paiement::CreateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Paiement::UpdateAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_paiement_eleve")
                            .from_tbl(Paiement::Table)
                            .from_col(Paiement::EleveId)
                            .to_tbl(Eleve::Table)
                            .to_col(Eleve::EleveId)
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
            .drop_table(Table::drop().table(Paiement::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Utilisateur::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Eleve::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClasseMatiere::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatiereEnseignant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matiere::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enseignant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classe::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(StatutEnum::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(RoleEnum::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
#[sea_orm(iden = "role_enum")]
enum RoleEnum {
    Table,
    #[sea_orm(iden = "admin")]
    Admin,
    #[sea_orm(iden = "enseignant")]
    Enseignant,
    #[sea_orm(iden = "eleve")]
    Eleve,
}

#[derive(DeriveIden)]
#[sea_orm(iden = "statut_enum")]
enum StatutEnum {
    Table,
    #[sea_orm(iden = "actif")]
    Actif,
    #[sea_orm(iden = "inactif")]
    Inactif,
}

#[derive(DeriveIden)]
enum Classe {
    Table,
    ClasseId,
    Nom,
    Niveau,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Enseignant {
    Table,
    EnseignantId,
    Nom,
    Prenom,
    Email,
    Telephone,
    Specialite,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Matiere {
    Table,
    MatiereId,
    Nom,
    Coefficient,
    Description,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum MatiereEnseignant {
    Table,
    MatiereId,
    EnseignantId,
    CreateAt,
}

#[derive(DeriveIden)]
enum ClasseMatiere {
    Table,
    ClasseId,
    MatiereId,
    EnseignantId,
    Position,
    CreateAt,
}

#[derive(DeriveIden)]
enum Eleve {
    Table,
    EleveId,
    Nom,
    Prenom,
    Email,
    Telephone,
    DateNaissance,
    Adresse,
    Statut,
    ClasseId,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Utilisateur {
    Table,
    UtilisateurId,
    NomUtilisateur,
    Email,
    MotDePasse,
    Cin,
    Role,
    EleveId,
    EnseignantId,
    Statut,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Note {
    Table,
    NoteId,
    EleveId,
    MatiereId,
    Valeur,
    CreateAt,
    UpdateAt,
}

#[derive(DeriveIden)]
enum Paiement {
    Table,
    PaiementId,
    EleveId,
    Tranche,
    Montant,
    AnneeScolaire,
    CreateAt,
    UpdateAt,
}
