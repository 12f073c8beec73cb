use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::paiement;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaiementRequest {
    pub eleve: Option<Uuid>,

    #[schema(example = "tranche_1")]
    pub tranche: Option<String>,

    #[schema(example = "150000.00")]
    pub montant: Option<Decimal>,

    #[schema(example = "2025-2026")]
    pub annee_scolaire: Option<String>,
}

impl CreatePaiementRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.eleve.is_none() {
            return Err("L'élève est requis".to_string());
        }
        if self.tranche.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("La tranche est requise".to_string());
        }
        if self.montant.is_none() {
            return Err("Le montant est requis".to_string());
        }
        if self
            .annee_scolaire
            .as_deref()
            .is_none_or(|v| v.trim().is_empty())
        {
            return Err("L'année scolaire est requise".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaiementRequest {
    pub eleve: Option<Uuid>,
    pub tranche: Option<String>,
    pub montant: Option<Decimal>,
    pub annee_scolaire: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PaiementQueryParams {
    /// Restrict the listing to one eleve.
    pub eleve: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaiementResponse {
    pub success: bool,
    pub data: paiement::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePaiementResponse {
    pub success: bool,
    pub message: String,
    pub data: paiement::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaiementListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<paiement::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaiementMessageResponse {
    pub success: bool,
    pub message: String,
}
