use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::enseignant;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEnseignantRequest {
    #[schema(example = "Ndiaye")]
    pub nom: Option<String>,

    #[schema(example = "Moussa")]
    pub prenom: Option<String>,

    #[schema(example = "moussa.ndiaye@example.com")]
    pub email: Option<String>,

    pub telephone: Option<String>,

    #[schema(example = "Mathématiques")]
    pub specialite: Option<String>,
}

impl CreateEnseignantRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le nom est requis".to_string());
        }
        if self.prenom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le prénom est requis".to_string());
        }
        if self.email.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("L'email est requis".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEnseignantRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub specialite: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnseignantResponse {
    pub success: bool,
    pub data: enseignant::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEnseignantResponse {
    pub success: bool,
    pub message: String,
    pub data: enseignant::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnseignantListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<enseignant::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnseignantMessageResponse {
    pub success: bool,
    pub message: String,
}
