use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateEmploiRequest, CreateEmploiResponse, EmploiListResponse, EmploiMessageResponse,
    EmploiQueryParams, EmploiResponse, UpdateEmploiRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{
    ClasseRepository, EmploiRepository, EmploiUpdate, EnseignantRepository, MatiereRepository,
};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/emplois/ajout", post(create_emploi))
        .route("/api/emplois", get(get_all_emplois))
        .route(
            "/api/emplois/{emploi_id}",
            get(get_emploi_by_id)
                .put(update_emploi)
                .delete(delete_emploi),
        )
}

/// Adds a timetable slot after checking all three references exist.
#[utoipa::path(
    post,
    path = "/api/emplois/ajout",
    request_body = CreateEmploiRequest,
    responses(
        (status = 201, description = "Créneau ajouté", body = CreateEmploiResponse),
        (status = 400, description = "Champs manquants ou référence invalide"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Emplois du temps"
)]
pub async fn create_emploi(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateEmploiRequest>,
) -> Result<(StatusCode, Json<CreateEmploiResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let classe_id = payload
        .classe
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "La classe est requise".to_string()))?;
    let matiere_id = payload
        .matiere
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "La matière est requise".to_string()))?;
    let enseignant_id = payload
        .enseignant
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "L'enseignant est requis".to_string()))?;

    let classe_repo = ClasseRepository::new();
    classe_repo
        .find_by_id(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Classe invalide".to_string()))?;

    let matiere_repo = MatiereRepository::new();
    matiere_repo
        .find_by_id(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Matière invalide".to_string()))?;

    let enseignant_repo = EnseignantRepository::new();
    enseignant_repo
        .find_by_id(enseignant_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Enseignant invalide".to_string()))?;

    let emploi_repo = EmploiRepository::new();
    let emploi = emploi_repo
        .create(
            Uuid::new_v4(),
            classe_id,
            matiere_id,
            enseignant_id,
            payload.jour.unwrap_or_default(),
            payload.heure_debut.unwrap_or_default(),
            payload.heure_fin.unwrap_or_default(),
        )
        .await
        .map_err(|e| internal_error("Failed to create emploi du temps", e))?;

    let response = CreateEmploiResponse {
        success: true,
        message: "Créneau ajouté avec succès".to_string(),
        data: emploi,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/emplois",
    params(EmploiQueryParams),
    responses(
        (status = 200, description = "Liste des créneaux", body = EmploiListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Emplois du temps"
)]
pub async fn get_all_emplois(
    Query(params): Query<EmploiQueryParams>,
) -> Result<(StatusCode, Json<EmploiListResponse>), (StatusCode, String)> {
    let emploi_repo = EmploiRepository::new();

    let emplois = match params.classe {
        Some(classe_id) => emploi_repo.find_by_classe(classe_id).await,
        None => emploi_repo.find_all().await,
    }
    .map_err(|e| internal_error("Database error", e))?;

    let response = EmploiListResponse {
        success: true,
        count: emplois.len(),
        data: emplois,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/emplois/{emploi_id}",
    params(
        ("emploi_id" = Uuid, Path, description = "Emploi du temps ID")
    ),
    responses(
        (status = 200, description = "Créneau trouvé", body = EmploiResponse),
        (status = 404, description = "Créneau introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Emplois du temps"
)]
pub async fn get_emploi_by_id(
    Path(emploi_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EmploiResponse>), (StatusCode, String)> {
    let emploi_repo = EmploiRepository::new();

    let emploi = emploi_repo
        .find_by_id(emploi_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Créneau introuvable".to_string()))?;

    let response = EmploiResponse {
        success: true,
        data: emploi,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/emplois/{emploi_id}",
    params(
        ("emploi_id" = Uuid, Path, description = "Emploi du temps ID")
    ),
    request_body = UpdateEmploiRequest,
    responses(
        (status = 200, description = "Créneau mis à jour", body = EmploiResponse),
        (status = 404, description = "Créneau introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Emplois du temps"
)]
pub async fn update_emploi(
    AuthClaims(auth_claims): AuthClaims,
    Path(emploi_id): Path<Uuid>,
    Json(payload): Json<UpdateEmploiRequest>,
) -> Result<(StatusCode, Json<EmploiResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let emploi_repo = EmploiRepository::new();

    emploi_repo
        .find_by_id(emploi_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Créneau introuvable".to_string()))?;

    let updates = EmploiUpdate {
        classe_id: payload.classe,
        matiere_id: payload.matiere,
        enseignant_id: payload.enseignant,
        jour: payload.jour,
        heure_debut: payload.heure_debut,
        heure_fin: payload.heure_fin,
    };

    let emploi = emploi_repo
        .update(emploi_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update emploi du temps", e))?;

    let response = EmploiResponse {
        success: true,
        data: emploi,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/emplois/{emploi_id}",
    params(
        ("emploi_id" = Uuid, Path, description = "Emploi du temps ID")
    ),
    responses(
        (status = 200, description = "Créneau supprimé", body = EmploiMessageResponse),
        (status = 404, description = "Créneau introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Emplois du temps"
)]
pub async fn delete_emploi(
    AuthClaims(auth_claims): AuthClaims,
    Path(emploi_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EmploiMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let emploi_repo = EmploiRepository::new();

    emploi_repo
        .find_by_id(emploi_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Créneau introuvable".to_string()))?;

    emploi_repo
        .delete(emploi_id)
        .await
        .map_err(|e| internal_error("Failed to delete emploi du temps", e))?;

    let response = EmploiMessageResponse {
        success: true,
        message: "Créneau supprimé avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
