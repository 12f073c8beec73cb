//! `SeaORM` Entity for utilisateur table (login accounts, distinct from the
//! eleve/enseignant profile they authenticate)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::{RoleEnum, StatutEnum};

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "utilisateur"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub utilisateur_id: Uuid,
    pub nom_utilisateur: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub mot_de_passe: String,
    pub cin: String,
    pub role: RoleEnum,
    pub eleve_id: Option<Uuid>,
    pub enseignant_id: Option<Uuid>,
    pub statut: StatutEnum,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
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

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    UtilisateurId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Eleve,
    Enseignant,
    Session,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::UtilisateurId => ColumnType::Uuid.def(),
            Self::NomUtilisateur => ColumnType::String(StringLen::None).def().unique(),
            Self::Email => ColumnType::String(StringLen::None).def(),
            Self::MotDePasse => ColumnType::String(StringLen::None).def(),
            Self::Cin => ColumnType::String(StringLen::None).def().unique(),
            Self::Role => RoleEnum::db_type().def(),
            Self::EleveId => ColumnType::Uuid.def().null(),
            Self::EnseignantId => ColumnType::Uuid.def().null(),
            Self::Statut => StatutEnum::db_type().def(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Eleve => Entity::belongs_to(super::eleve::Entity)
                .from(Column::EleveId)
                .to(super::eleve::Column::EleveId)
                .into(),
            Self::Enseignant => Entity::belongs_to(super::enseignant::Entity)
                .from(Column::EnseignantId)
                .to(super::enseignant::Column::EnseignantId)
                .into(),
            Self::Session => Entity::has_many(super::session::Entity).into(),
        }
    }
}

impl Related<super::eleve::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eleve.def()
    }
}

impl Related<super::enseignant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enseignant.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
