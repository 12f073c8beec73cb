//! `SeaORM` Entity for classe_matiere join table (ordered subject/teacher
//! assignments per class)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "classe_matiere"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    pub classe_id: Uuid,
    pub matiere_id: Uuid,
    pub enseignant_id: Uuid,
    pub position: i32,
    pub create_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    ClasseId,
    MatiereId,
    EnseignantId,
    Position,
    CreateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    ClasseId,
    MatiereId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = (Uuid, Uuid);
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Classe,
    Matiere,
    Enseignant,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::ClasseId => ColumnType::Uuid.def(),
            Self::MatiereId => ColumnType::Uuid.def(),
            Self::EnseignantId => ColumnType::Uuid.def(),
            Self::Position => ColumnType::Integer.def(),
            Self::CreateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Classe => Entity::belongs_to(super::classe::Entity)
                .from(Column::ClasseId)
                .to(super::classe::Column::ClasseId)
                .into(),
            Self::Matiere => Entity::belongs_to(super::matiere::Entity)
                .from(Column::MatiereId)
                .to(super::matiere::Column::MatiereId)
                .into(),
            Self::Enseignant => Entity::belongs_to(super::enseignant::Entity)
                .from(Column::EnseignantId)
                .to(super::enseignant::Column::EnseignantId)
                .into(),
        }
    }
}

impl Related<super::classe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classe.def()
    }
}

impl Related<super::matiere::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matiere.def()
    }
}

impl Related<super::enseignant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enseignant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
