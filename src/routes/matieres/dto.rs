use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::matiere;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMatiereRequest {
    #[schema(example = "Mathématiques")]
    pub nom: Option<String>,

    #[schema(example = 4)]
    pub coefficient: Option<i32>,

    pub description: Option<String>,

    /// Teachers qualified to teach this subject.
    #[serde(default)]
    pub enseignants: Vec<Uuid>,
}

impl CreateMatiereRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le nom est requis".to_string());
        }
        if self.coefficient.is_none() {
            return Err("Le coefficient est requis".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMatiereRequest {
    pub nom: Option<String>,
    pub coefficient: Option<i32>,
    pub description: Option<String>,
    pub enseignants: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatiereDetail {
    pub matiere_id: Uuid,
    pub nom: String,
    pub coefficient: i32,
    pub description: Option<String>,
    pub enseignants: Vec<Uuid>,
    pub create_at: chrono::NaiveDateTime,
}

impl MatiereDetail {
    pub fn from_models(matiere: matiere::Model, enseignants: Vec<Uuid>) -> Self {
        Self {
            matiere_id: matiere.matiere_id,
            nom: matiere.nom,
            coefficient: matiere.coefficient,
            description: matiere.description,
            enseignants,
            create_at: matiere.create_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatiereResponse {
    pub success: bool,
    pub data: MatiereDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateMatiereResponse {
    pub success: bool,
    pub message: String,
    pub data: MatiereDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatiereListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<matiere::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatiereMessageResponse {
    pub success: bool,
    pub message: String,
}
