use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CandidatureListResponse, CandidatureMessageResponse, CandidatureQueryParams,
    CandidatureResponse, CreateCandidatureRequest, CreateCandidatureResponse,
    UpdateCandidatureRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{CandidatureRepository, CandidatureUpdate, OffreRepository};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/candidatures/ajout", post(create_candidature))
        .route("/api/candidatures", get(get_all_candidatures))
        .route(
            "/api/candidatures/{candidature_id}",
            get(get_candidature_by_id)
                .put(update_candidature)
                .delete(delete_candidature),
        )
}

/// Submits an application to an offre. This is the public careers flow, no
/// account required.
#[utoipa::path(
    post,
    path = "/api/candidatures/ajout",
    request_body = CreateCandidatureRequest,
    responses(
        (status = 201, description = "Candidature envoyée", body = CreateCandidatureResponse),
        (status = 400, description = "Champs manquants ou offre invalide"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Candidatures"
)]
pub async fn create_candidature(
    Json(payload): Json<CreateCandidatureRequest>,
) -> Result<(StatusCode, Json<CreateCandidatureResponse>), (StatusCode, String)> {
    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let offre_id = payload
        .offre
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "L'offre est requise".to_string()))?;

    let offre_repo = OffreRepository::new();
    offre_repo
        .find_by_id(offre_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Offre invalide".to_string()))?;

    let candidature_repo = CandidatureRepository::new();
    let candidature = candidature_repo
        .create(
            Uuid::new_v4(),
            offre_id,
            payload.nom.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.message,
        )
        .await
        .map_err(|e| internal_error("Failed to create candidature", e))?;

    let response = CreateCandidatureResponse {
        success: true,
        message: "Candidature envoyée avec succès".to_string(),
        data: candidature,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/candidatures",
    params(CandidatureQueryParams),
    responses(
        (status = 200, description = "Liste des candidatures", body = CandidatureListResponse),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Candidatures"
)]
pub async fn get_all_candidatures(
    AuthClaims(auth_claims): AuthClaims,
    Query(params): Query<CandidatureQueryParams>,
) -> Result<(StatusCode, Json<CandidatureListResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let candidature_repo = CandidatureRepository::new();

    let candidatures = match params.offre {
        Some(offre_id) => candidature_repo.find_by_offre(offre_id).await,
        None => candidature_repo.find_all().await,
    }
    .map_err(|e| internal_error("Database error", e))?;

    let response = CandidatureListResponse {
        success: true,
        count: candidatures.len(),
        data: candidatures,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/candidatures/{candidature_id}",
    params(
        ("candidature_id" = Uuid, Path, description = "Candidature ID")
    ),
    responses(
        (status = 200, description = "Candidature trouvée", body = CandidatureResponse),
        (status = 404, description = "Candidature introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Candidatures"
)]
pub async fn get_candidature_by_id(
    AuthClaims(auth_claims): AuthClaims,
    Path(candidature_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CandidatureResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let candidature_repo = CandidatureRepository::new();

    let candidature = candidature_repo
        .find_by_id(candidature_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Candidature introuvable".to_string()))?;

    let response = CandidatureResponse {
        success: true,
        data: candidature,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Updates an application, typically its statut as it moves through review.
#[utoipa::path(
    put,
    path = "/api/candidatures/{candidature_id}",
    params(
        ("candidature_id" = Uuid, Path, description = "Candidature ID")
    ),
    request_body = UpdateCandidatureRequest,
    responses(
        (status = 200, description = "Candidature mise à jour", body = CandidatureResponse),
        (status = 404, description = "Candidature introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Candidatures"
)]
pub async fn update_candidature(
    AuthClaims(auth_claims): AuthClaims,
    Path(candidature_id): Path<Uuid>,
    Json(payload): Json<UpdateCandidatureRequest>,
) -> Result<(StatusCode, Json<CandidatureResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let candidature_repo = CandidatureRepository::new();

    candidature_repo
        .find_by_id(candidature_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Candidature introuvable".to_string()))?;

    let updates = CandidatureUpdate {
        nom: payload.nom,
        email: payload.email,
        message: payload.message,
        statut: payload.statut,
    };

    let candidature = candidature_repo
        .update(candidature_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update candidature", e))?;

    let response = CandidatureResponse {
        success: true,
        data: candidature,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/candidatures/{candidature_id}",
    params(
        ("candidature_id" = Uuid, Path, description = "Candidature ID")
    ),
    responses(
        (status = 200, description = "Candidature supprimée", body = CandidatureMessageResponse),
        (status = 404, description = "Candidature introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Candidatures"
)]
pub async fn delete_candidature(
    AuthClaims(auth_claims): AuthClaims,
    Path(candidature_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CandidatureMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let candidature_repo = CandidatureRepository::new();

    candidature_repo
        .find_by_id(candidature_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Candidature introuvable".to_string()))?;

    candidature_repo
        .delete(candidature_id)
        .await
        .map_err(|e| internal_error("Failed to delete candidature", e))?;

    let response = CandidatureMessageResponse {
        success: true,
        message: "Candidature supprimée avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
