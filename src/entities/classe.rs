//! `SeaORM` Entity for classe table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "classe"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub classe_id: Uuid,
    pub nom: String,
    pub niveau: String,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ClasseId,
    Nom,
    Niveau,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ClasseId,
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
    ClasseMatiere,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ClasseId => ColumnType::Uuid.def(),
            Self::Nom => ColumnType::String(StringLen::None).def(),
            Self::Niveau => ColumnType::String(StringLen::None).def(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Eleve => Entity::has_many(super::eleve::Entity).into(),
            Self::ClasseMatiere => Entity::has_many(super::classe_matiere::Entity).into(),
        }
    }
}

impl Related<super::eleve::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eleve.def()
    }
}

impl Related<super::classe_matiere::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClasseMatiere.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
