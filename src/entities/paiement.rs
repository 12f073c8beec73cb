//! `SeaORM` Entity for paiement table (fee installments)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Default, Debug, DeriveEntity)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &str {
        "paiement"
    }
}

#[derive(Clone, Debug, PartialEq, DeriveModel, DeriveActiveModel, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(skip_deserializing)]
    pub paiement_id: Uuid,
    pub eleve_id: Uuid,
    pub tranche: String,
    pub montant: Decimal,
    pub annee_scolaire: String,
    pub create_at: DateTime,
    pub update_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveColumn)]
pub enum Column {
    PaiementId,
    EleveId,
    Tranche,
    Montant,
    AnneeScolaire,
    CreateAt,
    UpdateAt,
}

#[derive(Copy, Clone, Debug, EnumIter, DerivePrimaryKey)]
pub enum PrimaryKey {
    PaiementId,
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
}

impl ColumnTrait for Column {
    type EntityName = Entity;
    fn def(&self) -> ColumnDef {
        match self {
            Self::PaiementId => ColumnType::Uuid.def(),
            Self::EleveId => ColumnType::Uuid.def(),
            Self::Tranche => ColumnType::String(StringLen::None).def(),
            Self::Montant => ColumnType::Decimal(Some((10, 2))).def(),
            Self::AnneeScolaire => ColumnType::String(StringLen::None).def(),
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
        }
    }
}

impl Related<super::eleve::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Eleve.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
