//! `SeaORM` Entity for note table
//!
//! Values are displayed on a 0-20 scale; the store does not enforce a range.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "note"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub note_id: Uuid,
    pub eleve_id: Uuid,
    pub matiere_id: Uuid,
    pub valeur: Decimal,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    NoteId,
    EleveId,
    MatiereId,
    Valeur,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    NoteId,
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
    Matiere,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::NoteId => ColumnType::Uuid.def(),
            Self::EleveId => ColumnType::Uuid.def(),
            Self::MatiereId => ColumnType::Uuid.def(),
            Self::Valeur => ColumnType::Decimal(Some((5, 2))).def(),
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
            Self::Matiere => Entity::belongs_to(super::matiere::Entity)
                .from(Column::MatiereId)
                .to(super::matiere::Column::MatiereId)
                .into(),
        }
    }
}

impl Related<super::eleve::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eleve.def()
    }
}

impl Related<super::matiere::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matiere.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
