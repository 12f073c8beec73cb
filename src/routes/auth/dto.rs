use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConnexionRequest {
    #[schema(example = "aminata.diallo")]
    pub nom_utilisateur: String,

    #[schema(example = "MotDePasse1!")]
    pub mot_de_passe: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilUtilisateur {
    pub utilisateur_id: Uuid,
    pub nom_utilisateur: String,
    pub email: String,
    pub role: RoleEnum,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnexionResponse {
    pub success: bool,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub utilisateur: ProfilUtilisateur,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InscriptionRequest {
    #[schema(example = "jean.dupont")]
    pub nom_utilisateur: String,

    #[schema(example = "jean.dupont@example.com")]
    pub email: String,

    #[schema(example = "MotDePasse1!")]
    pub mot_de_passe: String,

    /// Personal-ID string; generated when absent.
    pub cin: Option<String>,

    #[schema(example = "eleve")]
    pub role: Option<RoleEnum>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InscriptionResponse {
    pub success: bool,
    pub message: String,
    pub utilisateur: ProfilUtilisateur,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeconnexionResponse {
    pub success: bool,
    pub message: String,
}
