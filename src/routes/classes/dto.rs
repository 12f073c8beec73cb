use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{classe, classe_matiere};

/// One (matiere, enseignant) slot of a class. Order in the request is
/// preserved.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MatiereAssignment {
    pub matiere: Uuid,
    pub enseignant: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateClasseRequest {
    #[schema(example = "6e A")]
    pub nom: Option<String>,

    #[schema(example = "6e")]
    pub niveau: Option<String>,

    #[serde(default)]
    pub matieres: Vec<MatiereAssignment>,
}

impl CreateClasseRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.nom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le nom est requis".to_string());
        }
        if self.niveau.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le niveau est requis".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClasseRequest {
    pub nom: Option<String>,
    pub niveau: Option<String>,
    /// Replaces the assignment list wholesale when present.
    pub matieres: Option<Vec<MatiereAssignment>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClasseDetail {
    pub classe_id: Uuid,
    pub nom: String,
    pub niveau: String,
    pub matieres: Vec<MatiereAssignment>,
    pub create_at: chrono::NaiveDateTime,
}

impl ClasseDetail {
    pub fn from_models(classe: classe::Model, assignments: Vec<classe_matiere::Model>) -> Self {
        Self {
            classe_id: classe.classe_id,
            nom: classe.nom,
            niveau: classe.niveau,
            matieres: assignments
                .into_iter()
                .map(|a| MatiereAssignment {
                    matiere: a.matiere_id,
                    enseignant: a.enseignant_id,
                })
                .collect(),
            create_at: classe.create_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClasseResponse {
    pub success: bool,
    pub data: ClasseDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateClasseResponse {
    pub success: bool,
    pub message: String,
    pub data: ClasseDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClasseListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<classe::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClasseMessageResponse {
    pub success: bool,
    pub message: String,
}
