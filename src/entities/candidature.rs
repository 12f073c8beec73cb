//! `SeaORM` Entity for candidature table (applications to job offers)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "candidature"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub candidature_id: Uuid,
    pub offre_id: Uuid,
    pub nom: String,
    pub email: String,
    pub message: Option<String>,
    pub statut: String,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    CandidatureId,
    OffreId,
    Nom,
    Email,
    Message,
    Statut,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    CandidatureId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Offre,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::CandidatureId => ColumnType::Uuid.def(),
            Self::OffreId => ColumnType::Uuid.def(),
            Self::Nom => ColumnType::String(StringLen::None).def(),
            Self::Email => ColumnType::String(StringLen::None).def(),
            Self::Message => ColumnType::String(StringLen::None).def().null(),
            Self::Statut => ColumnType::String(StringLen::None).def(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Offre => Entity::belongs_to(super::offre::Entity)
                .from(Column::OffreId)
                .to(super::offre::Column::OffreId)
                .into(),
        }
    }
}

impl Related<super::offre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
