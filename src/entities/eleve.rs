//! `SeaORM` Entity for eleve table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::StatutEnum;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "eleve"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub eleve_id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub date_naissance: Option<Date>,
    pub adresse: Option<String>,
    pub statut: StatutEnum,
    pub classe_id: Uuid,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
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

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    EleveId,
}

impl PrimaryKeyTrait for PrimaryKey {
    type ValueType = Uuid;
    fn auto_increment() -> bool {
        false
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Classe,
    Note,
    Paiement,
    Utilisateur,
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::EleveId => ColumnType::Uuid.def(),
            Self::Nom => ColumnType::String(StringLen::None).def(),
            Self::Prenom => ColumnType::String(StringLen::None).def(),
            Self::Email => ColumnType::String(StringLen::None).def(),
            Self::Telephone => ColumnType::String(StringLen::None).def().null(),
            Self::DateNaissance => ColumnType::Date.def().null(),
            Self::Adresse => ColumnType::String(StringLen::None).def().null(),
            Self::Statut => StatutEnum::db_type().def(),
            Self::ClasseId => ColumnType::Uuid.def(),
            Self::CreateAt => ColumnType::DateTime.def(),
            Self::UpdateAt => ColumnType::DateTime.def(),
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
            Self::Note => Entity::has_many(super::note::Entity).into(),
            Self::Paiement => Entity::has_many(super::paiement::Entity).into(),
            Self::Utilisateur => Entity::has_many(super::utilisateur::Entity).into(),
        }
    }
}

impl Related<super::classe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classe.def()
    }
}

impl Related<super::note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

impl Related<super::paiement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Paiement.def()
    }
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
