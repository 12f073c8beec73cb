use sea_orm::prelude::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::note;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub eleve: Option<Uuid>,
    pub matiere: Option<Uuid>,

    /// Grade on the 0-20 display scale; the range is not enforced.
    #[schema(example = "14.5")]
    pub valeur: Option<Decimal>,
}

impl CreateNoteRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.eleve.is_none() {
            return Err("L'élève est requis".to_string());
        }
        if self.matiere.is_none() {
            return Err("La matière est requise".to_string());
        }
        if self.valeur.is_none() {
            return Err("La valeur est requise".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub eleve: Option<Uuid>,
    pub matiere: Option<Uuid>,
    pub valeur: Option<Decimal>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NoteQueryParams {
    /// Restrict the listing to one eleve.
    pub eleve: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteResponse {
    pub success: bool,
    pub data: note::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateNoteResponse {
    pub success: bool,
    pub message: String,
    pub data: note::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<note::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NoteMessageResponse {
    pub success: bool,
    pub message: String,
}
