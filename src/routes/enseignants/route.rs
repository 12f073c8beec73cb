use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateEnseignantRequest, CreateEnseignantResponse, EnseignantListResponse,
    EnseignantMessageResponse, EnseignantResponse, UpdateEnseignantRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{EnseignantRepository, EnseignantUpdate};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/enseignants/ajout", post(create_enseignant))
        .route("/api/enseignants", get(get_all_enseignants))
        .route(
            "/api/enseignants/{enseignant_id}",
            get(get_enseignant_by_id)
                .put(update_enseignant)
                .delete(delete_enseignant),
        )
}

#[utoipa::path(
    post,
    path = "/api/enseignants/ajout",
    request_body = CreateEnseignantRequest,
    responses(
        (status = 201, description = "Enseignant créé", body = CreateEnseignantResponse),
        (status = 400, description = "Champs manquants"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Enseignants"
)]
pub async fn create_enseignant(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateEnseignantRequest>,
) -> Result<(StatusCode, Json<CreateEnseignantResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let enseignant_repo = EnseignantRepository::new();
    let enseignant = enseignant_repo
        .create(
            Uuid::new_v4(),
            payload.nom.unwrap_or_default(),
            payload.prenom.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.telephone,
            payload.specialite,
        )
        .await
        .map_err(|e| internal_error("Failed to create enseignant", e))?;

    let response = CreateEnseignantResponse {
        success: true,
        message: "Enseignant créé avec succès".to_string(),
        data: enseignant,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/enseignants",
    responses(
        (status = 200, description = "Liste des enseignants", body = EnseignantListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enseignants"
)]
pub async fn get_all_enseignants()
-> Result<(StatusCode, Json<EnseignantListResponse>), (StatusCode, String)> {
    let enseignant_repo = EnseignantRepository::new();

    let enseignants = enseignant_repo
        .find_all()
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = EnseignantListResponse {
        success: true,
        count: enseignants.len(),
        data: enseignants,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/enseignants/{enseignant_id}",
    params(
        ("enseignant_id" = Uuid, Path, description = "Enseignant ID")
    ),
    responses(
        (status = 200, description = "Enseignant trouvé", body = EnseignantResponse),
        (status = 404, description = "Enseignant introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Enseignants"
)]
pub async fn get_enseignant_by_id(
    Path(enseignant_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EnseignantResponse>), (StatusCode, String)> {
    let enseignant_repo = EnseignantRepository::new();

    let enseignant = enseignant_repo
        .find_by_id(enseignant_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Enseignant introuvable".to_string()))?;

    let response = EnseignantResponse {
        success: true,
        data: enseignant,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/enseignants/{enseignant_id}",
    params(
        ("enseignant_id" = Uuid, Path, description = "Enseignant ID")
    ),
    request_body = UpdateEnseignantRequest,
    responses(
        (status = 200, description = "Enseignant mis à jour", body = EnseignantResponse),
        (status = 404, description = "Enseignant introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Enseignants"
)]
pub async fn update_enseignant(
    AuthClaims(auth_claims): AuthClaims,
    Path(enseignant_id): Path<Uuid>,
    Json(payload): Json<UpdateEnseignantRequest>,
) -> Result<(StatusCode, Json<EnseignantResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let enseignant_repo = EnseignantRepository::new();

    enseignant_repo
        .find_by_id(enseignant_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Enseignant introuvable".to_string()))?;

    let updates = EnseignantUpdate {
        nom: payload.nom,
        prenom: payload.prenom,
        email: payload.email,
        telephone: payload.telephone,
        specialite: payload.specialite,
    };

    let enseignant = enseignant_repo
        .update(enseignant_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update enseignant", e))?;

    let response = EnseignantResponse {
        success: true,
        data: enseignant,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/enseignants/{enseignant_id}",
    params(
        ("enseignant_id" = Uuid, Path, description = "Enseignant ID")
    ),
    responses(
        (status = 200, description = "Enseignant supprimé", body = EnseignantMessageResponse),
        (status = 404, description = "Enseignant introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Enseignants"
)]
pub async fn delete_enseignant(
    AuthClaims(auth_claims): AuthClaims,
    Path(enseignant_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EnseignantMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let enseignant_repo = EnseignantRepository::new();

    enseignant_repo
        .find_by_id(enseignant_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Enseignant introuvable".to_string()))?;

    enseignant_repo
        .delete(enseignant_id)
        .await
        .map_err(|e| internal_error("Failed to delete enseignant", e))?;

    let response = EnseignantMessageResponse {
        success: true,
        message: "Enseignant supprimé avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
