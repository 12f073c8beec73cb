use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateOffreRequest, CreateOffreResponse, OffreListResponse, OffreMessageResponse,
    OffreResponse, UpdateOffreRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{OffreRepository, OffreUpdate};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/offres/ajout", post(create_offre))
        .route("/api/offres", get(get_all_offres))
        .route(
            "/api/offres/{offre_id}",
            get(get_offre_by_id).put(update_offre).delete(delete_offre),
        )
}

#[utoipa::path(
    post,
    path = "/api/offres/ajout",
    request_body = CreateOffreRequest,
    responses(
        (status = 201, description = "Offre publiée", body = CreateOffreResponse),
        (status = 400, description = "Champs manquants"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Offres"
)]
pub async fn create_offre(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateOffreRequest>,
) -> Result<(StatusCode, Json<CreateOffreResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let offre_repo = OffreRepository::new();
    let offre = offre_repo
        .create(
            Uuid::new_v4(),
            payload.titre.unwrap_or_default(),
            payload.description.unwrap_or_default(),
            payload.date_limite,
        )
        .await
        .map_err(|e| internal_error("Failed to create offre", e))?;

    let response = CreateOffreResponse {
        success: true,
        message: "Offre publiée avec succès".to_string(),
        data: offre,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/offres",
    responses(
        (status = 200, description = "Liste des offres", body = OffreListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Offres"
)]
pub async fn get_all_offres() -> Result<(StatusCode, Json<OffreListResponse>), (StatusCode, String)>
{
    let offre_repo = OffreRepository::new();

    let offres = offre_repo
        .find_all()
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = OffreListResponse {
        success: true,
        count: offres.len(),
        data: offres,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/offres/{offre_id}",
    params(
        ("offre_id" = Uuid, Path, description = "Offre ID")
    ),
    responses(
        (status = 200, description = "Offre trouvée", body = OffreResponse),
        (status = 404, description = "Offre introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Offres"
)]
pub async fn get_offre_by_id(
    Path(offre_id): Path<Uuid>,
) -> Result<(StatusCode, Json<OffreResponse>), (StatusCode, String)> {
    let offre_repo = OffreRepository::new();

    let offre = offre_repo
        .find_by_id(offre_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Offre introuvable".to_string()))?;

    let response = OffreResponse {
        success: true,
        data: offre,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/offres/{offre_id}",
    params(
        ("offre_id" = Uuid, Path, description = "Offre ID")
    ),
    request_body = UpdateOffreRequest,
    responses(
        (status = 200, description = "Offre mise à jour", body = OffreResponse),
        (status = 404, description = "Offre introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Offres"
)]
pub async fn update_offre(
    AuthClaims(auth_claims): AuthClaims,
    Path(offre_id): Path<Uuid>,
    Json(payload): Json<UpdateOffreRequest>,
) -> Result<(StatusCode, Json<OffreResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let offre_repo = OffreRepository::new();

    offre_repo
        .find_by_id(offre_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Offre introuvable".to_string()))?;

    let updates = OffreUpdate {
        titre: payload.titre,
        description: payload.description,
        date_limite: payload.date_limite,
    };

    let offre = offre_repo
        .update(offre_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update offre", e))?;

    let response = OffreResponse {
        success: true,
        data: offre,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/offres/{offre_id}",
    params(
        ("offre_id" = Uuid, Path, description = "Offre ID")
    ),
    responses(
        (status = 200, description = "Offre supprimée", body = OffreMessageResponse),
        (status = 404, description = "Offre introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Offres"
)]
pub async fn delete_offre(
    AuthClaims(auth_claims): AuthClaims,
    Path(offre_id): Path<Uuid>,
) -> Result<(StatusCode, Json<OffreMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let offre_repo = OffreRepository::new();

    offre_repo
        .find_by_id(offre_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Offre introuvable".to_string()))?;

    offre_repo
        .delete(offre_id)
        .await
        .map_err(|e| internal_error("Failed to delete offre", e))?;

    let response = OffreMessageResponse {
        success: true,
        message: "Offre supprimée avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
