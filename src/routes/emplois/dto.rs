use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::emploi_du_temps;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmploiRequest {
    pub classe: Option<Uuid>,
    pub matiere: Option<Uuid>,
    pub enseignant: Option<Uuid>,

    #[schema(example = "lundi")]
    pub jour: Option<String>,

    #[schema(example = "08:00")]
    pub heure_debut: Option<String>,

    #[schema(example = "10:00")]
    pub heure_fin: Option<String>,
}

impl CreateEmploiRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.classe.is_none() {
            return Err("La classe est requise".to_string());
        }
        if self.matiere.is_none() {
            return Err("La matière est requise".to_string());
        }
        if self.enseignant.is_none() {
            return Err("L'enseignant est requis".to_string());
        }
        if self.jour.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le jour est requis".to_string());
        }
        if self
            .heure_debut
            .as_deref()
            .is_none_or(|v| v.trim().is_empty())
        {
            return Err("L'heure de début est requise".to_string());
        }
        if self
            .heure_fin
            .as_deref()
            .is_none_or(|v| v.trim().is_empty())
        {
            return Err("L'heure de fin est requise".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmploiRequest {
    pub classe: Option<Uuid>,
    pub matiere: Option<Uuid>,
    pub enseignant: Option<Uuid>,
    pub jour: Option<String>,
    pub heure_debut: Option<String>,
    pub heure_fin: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct EmploiQueryParams {
    /// Restrict the listing to one classe.
    pub classe: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmploiResponse {
    pub success: bool,
    pub data: emploi_du_temps::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEmploiResponse {
    pub success: bool,
    pub message: String,
    pub data: emploi_du_temps::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmploiListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<emploi_du_temps::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EmploiMessageResponse {
    pub success: bool,
    pub message: String,
}
