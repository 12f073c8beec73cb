use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateMatiereRequest, CreateMatiereResponse, MatiereDetail, MatiereListResponse,
    MatiereMessageResponse, MatiereResponse, UpdateMatiereRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{MatiereRepository, MatiereUpdate};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/matieres/ajout", post(create_matiere))
        .route("/api/matieres", get(get_all_matieres))
        .route(
            "/api/matieres/{matiere_id}",
            get(get_matiere_by_id)
                .put(update_matiere)
                .delete(delete_matiere),
        )
}

#[utoipa::path(
    post,
    path = "/api/matieres/ajout",
    request_body = CreateMatiereRequest,
    responses(
        (status = 201, description = "Matière créée", body = CreateMatiereResponse),
        (status = 400, description = "Champs manquants"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Matieres"
)]
pub async fn create_matiere(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateMatiereRequest>,
) -> Result<(StatusCode, Json<CreateMatiereResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let matiere_repo = MatiereRepository::new();
    let matiere_id = Uuid::new_v4();

    let matiere = matiere_repo
        .create(
            matiere_id,
            payload.nom.unwrap_or_default(),
            payload.coefficient.unwrap_or_default(),
            payload.description,
            payload.enseignants.clone(),
        )
        .await
        .map_err(|e| internal_error("Failed to create matiere", e))?;

    let response = CreateMatiereResponse {
        success: true,
        message: "Matière créée avec succès".to_string(),
        data: MatiereDetail::from_models(matiere, payload.enseignants),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/matieres",
    responses(
        (status = 200, description = "Liste des matières", body = MatiereListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Matieres"
)]
pub async fn get_all_matieres()
-> Result<(StatusCode, Json<MatiereListResponse>), (StatusCode, String)> {
    let matiere_repo = MatiereRepository::new();

    let matieres = matiere_repo
        .find_all()
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = MatiereListResponse {
        success: true,
        count: matieres.len(),
        data: matieres,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/matieres/{matiere_id}",
    params(
        ("matiere_id" = Uuid, Path, description = "Matiere ID")
    ),
    responses(
        (status = 200, description = "Matière trouvée", body = MatiereResponse),
        (status = 404, description = "Matière introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Matieres"
)]
pub async fn get_matiere_by_id(
    Path(matiere_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MatiereResponse>), (StatusCode, String)> {
    let matiere_repo = MatiereRepository::new();

    let matiere = matiere_repo
        .find_by_id(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Matière introuvable".to_string()))?;

    let enseignants = matiere_repo
        .find_enseignant_ids(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = MatiereResponse {
        success: true,
        data: MatiereDetail::from_models(matiere, enseignants),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/matieres/{matiere_id}",
    params(
        ("matiere_id" = Uuid, Path, description = "Matiere ID")
    ),
    request_body = UpdateMatiereRequest,
    responses(
        (status = 200, description = "Matière mise à jour", body = MatiereResponse),
        (status = 404, description = "Matière introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Matieres"
)]
pub async fn update_matiere(
    AuthClaims(auth_claims): AuthClaims,
    Path(matiere_id): Path<Uuid>,
    Json(payload): Json<UpdateMatiereRequest>,
) -> Result<(StatusCode, Json<MatiereResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let matiere_repo = MatiereRepository::new();

    matiere_repo
        .find_by_id(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Matière introuvable".to_string()))?;

    let updates = MatiereUpdate {
        nom: payload.nom,
        coefficient: payload.coefficient,
        description: payload.description,
        enseignant_ids: payload.enseignants,
    };

    let matiere = matiere_repo
        .update(matiere_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update matiere", e))?;

    let enseignants = matiere_repo
        .find_enseignant_ids(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = MatiereResponse {
        success: true,
        data: MatiereDetail::from_models(matiere, enseignants),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/matieres/{matiere_id}",
    params(
        ("matiere_id" = Uuid, Path, description = "Matiere ID")
    ),
    responses(
        (status = 200, description = "Matière supprimée", body = MatiereMessageResponse),
        (status = 404, description = "Matière introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Matieres"
)]
pub async fn delete_matiere(
    AuthClaims(auth_claims): AuthClaims,
    Path(matiere_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MatiereMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let matiere_repo = MatiereRepository::new();

    matiere_repo
        .find_by_id(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Matière introuvable".to_string()))?;

    matiere_repo
        .delete(matiere_id)
        .await
        .map_err(|e| internal_error("Failed to delete matiere", e))?;

    let response = MatiereMessageResponse {
        success: true,
        message: "Matière supprimée avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
