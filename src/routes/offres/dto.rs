use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::offre;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOffreRequest {
    #[schema(example = "Professeur de français")]
    pub titre: Option<String>,

    #[schema(example = "Poste à temps plein, rentrée 2026")]
    pub description: Option<String>,

    pub date_limite: Option<NaiveDate>,
}

impl CreateOffreRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.titre.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le titre est requis".to_string());
        }
        if self
            .description
            .as_deref()
            .is_none_or(|v| v.trim().is_empty())
        {
            return Err("La description est requise".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOffreRequest {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub date_limite: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OffreResponse {
    pub success: bool,
    pub data: offre::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOffreResponse {
    pub success: bool,
    pub message: String,
    pub data: offre::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OffreListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<offre::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OffreMessageResponse {
    pub success: bool,
    pub message: String,
}
