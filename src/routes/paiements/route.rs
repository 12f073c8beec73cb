use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreatePaiementRequest, CreatePaiementResponse, PaiementListResponse, PaiementMessageResponse,
    PaiementQueryParams, PaiementResponse, UpdatePaiementRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{EleveRepository, PaiementRepository, PaiementUpdate};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/paiements/ajout", post(create_paiement))
        .route("/api/paiements", get(get_all_paiements))
        .route(
            "/api/paiements/{paiement_id}",
            get(get_paiement_by_id)
                .put(update_paiement)
                .delete(delete_paiement),
        )
}

#[utoipa::path(
    post,
    path = "/api/paiements/ajout",
    request_body = CreatePaiementRequest,
    responses(
        (status = 201, description = "Paiement enregistré", body = CreatePaiementResponse),
        (status = 400, description = "Champs manquants ou élève invalide"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Paiements"
)]
pub async fn create_paiement(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreatePaiementRequest>,
) -> Result<(StatusCode, Json<CreatePaiementResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let eleve_id = payload
        .eleve
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "L'élève est requis".to_string()))?;
    let montant = payload
        .montant
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Le montant est requis".to_string()))?;

    let eleve_repo = EleveRepository::new();
    eleve_repo
        .find_by_id(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Élève invalide".to_string()))?;

    let paiement_repo = PaiementRepository::new();
    let paiement = paiement_repo
        .create(
            Uuid::new_v4(),
            eleve_id,
            payload.tranche.unwrap_or_default(),
            montant,
            payload.annee_scolaire.unwrap_or_default(),
        )
        .await
        .map_err(|e| internal_error("Failed to create paiement", e))?;

    let response = CreatePaiementResponse {
        success: true,
        message: "Paiement enregistré avec succès".to_string(),
        data: paiement,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/paiements",
    params(PaiementQueryParams),
    responses(
        (status = 200, description = "Liste des paiements", body = PaiementListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Paiements"
)]
pub async fn get_all_paiements(
    Query(params): Query<PaiementQueryParams>,
) -> Result<(StatusCode, Json<PaiementListResponse>), (StatusCode, String)> {
    let paiement_repo = PaiementRepository::new();

    let paiements = match params.eleve {
        Some(eleve_id) => paiement_repo.find_by_eleve(eleve_id).await,
        None => paiement_repo.find_all().await,
    }
    .map_err(|e| internal_error("Database error", e))?;

    let response = PaiementListResponse {
        success: true,
        count: paiements.len(),
        data: paiements,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/paiements/{paiement_id}",
    params(
        ("paiement_id" = Uuid, Path, description = "Paiement ID")
    ),
    responses(
        (status = 200, description = "Paiement trouvé", body = PaiementResponse),
        (status = 404, description = "Paiement introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Paiements"
)]
pub async fn get_paiement_by_id(
    Path(paiement_id): Path<Uuid>,
) -> Result<(StatusCode, Json<PaiementResponse>), (StatusCode, String)> {
    let paiement_repo = PaiementRepository::new();

    let paiement = paiement_repo
        .find_by_id(paiement_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Paiement introuvable".to_string()))?;

    let response = PaiementResponse {
        success: true,
        data: paiement,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/paiements/{paiement_id}",
    params(
        ("paiement_id" = Uuid, Path, description = "Paiement ID")
    ),
    request_body = UpdatePaiementRequest,
    responses(
        (status = 200, description = "Paiement mis à jour", body = PaiementResponse),
        (status = 404, description = "Paiement introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Paiements"
)]
pub async fn update_paiement(
    AuthClaims(auth_claims): AuthClaims,
    Path(paiement_id): Path<Uuid>,
    Json(payload): Json<UpdatePaiementRequest>,
) -> Result<(StatusCode, Json<PaiementResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let paiement_repo = PaiementRepository::new();

    paiement_repo
        .find_by_id(paiement_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Paiement introuvable".to_string()))?;

    let updates = PaiementUpdate {
        eleve_id: payload.eleve,
        tranche: payload.tranche,
        montant: payload.montant,
        annee_scolaire: payload.annee_scolaire,
    };

    let paiement = paiement_repo
        .update(paiement_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update paiement", e))?;

    let response = PaiementResponse {
        success: true,
        data: paiement,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/paiements/{paiement_id}",
    params(
        ("paiement_id" = Uuid, Path, description = "Paiement ID")
    ),
    responses(
        (status = 200, description = "Paiement supprimé", body = PaiementMessageResponse),
        (status = 404, description = "Paiement introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Paiements"
)]
pub async fn delete_paiement(
    AuthClaims(auth_claims): AuthClaims,
    Path(paiement_id): Path<Uuid>,
) -> Result<(StatusCode, Json<PaiementMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let paiement_repo = PaiementRepository::new();

    paiement_repo
        .find_by_id(paiement_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Paiement introuvable".to_string()))?;

    paiement_repo
        .delete(paiement_id)
        .await
        .map_err(|e| internal_error("Failed to delete paiement", e))?;

    let response = PaiementMessageResponse {
        success: true,
        message: "Paiement supprimé avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
