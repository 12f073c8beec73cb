use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::candidature;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCandidatureRequest {
    /// Offre the application targets.
    pub offre: Option<Uuid>,

    #[schema(example = "Fatou Sow")]
    pub nom: Option<String>,

    #[schema(example = "fatou.sow@example.com")]
    pub email: Option<String>,

    pub message: Option<String>,
}

impl CreateCandidatureRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.offre.is_none() {
            return Err("L'offre est requise".to_string());
        }
        if self.nom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le nom est requis".to_string());
        }
        if self.email.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("L'email est requis".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCandidatureRequest {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,

    #[schema(example = "acceptee")]
    pub statut: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CandidatureQueryParams {
    /// Restrict the listing to one offre.
    pub offre: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CandidatureResponse {
    pub success: bool,
    pub data: candidature::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCandidatureResponse {
    pub success: bool,
    pub message: String,
    pub data: candidature::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CandidatureListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<candidature::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CandidatureMessageResponse {
    pub success: bool,
    pub message: String,
}
