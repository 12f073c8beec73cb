//! `SeaORM` Entity for enseignant table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "enseignant"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub enseignant_id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub specialite: Option<String>,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    EnseignantId,
    Nom,
    Prenom,
    Email,
    Telephone,
    Specialite,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    EnseignantId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MatiereEnseignant,
    ClasseMatiere,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::EnseignantId => ColumnType::Uuid.def(),
            Self::Nom => ColumnType::String(StringLen::None).def(),
            Self::Prenom => ColumnType::String(StringLen::None).def(),
            Self::Email => ColumnType::String(StringLen::None).def(),
            Self::Telephone => ColumnType::String(StringLen::None).def().null(),
            Self::Specialite => ColumnType::String(StringLen::None).def().null(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
        }
    }
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::MatiereEnseignant => Entity::has_many(super::matiere_enseignant::Entity).into(),
            Self::ClasseMatiere => Entity::has_many(super::classe_matiere::Entity).into(),
        }
    }
}

impl Related<super::matiere_enseignant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatiereEnseignant.def()
    }
}

impl Related<super::classe_matiere::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClasseMatiere.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
