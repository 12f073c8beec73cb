//! `SeaORM` Entity for session table (server-side session records backing
//! the bearer tokens)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "session"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub session_id: Uuid,
    pub utilisateur_id: Uuid,
    #[serde(skip_serializing)]
    pub token: String,
    pub expires_at: DateTime,
    pub create_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    SessionId,
    UtilisateurId,
    Token,
    ExpiresAt,
    CreateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    SessionId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Utilisateur,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::SessionId => ColumnType::Uuid.def(),
            Self::UtilisateurId => ColumnType::Uuid.def(),
            Self::Token => ColumnType::Text.def(),
            Self::ExpiresAt => ColumnType::DateTime.def(),
            Self::CreateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Utilisateur => Entity::belongs_to(super::utilisateur::Entity)
                .from(Column::UtilisateurId)
                .to(super::utilisateur::Column::UtilisateurId)
                .into(),
        }
    }
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
