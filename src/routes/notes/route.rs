use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CreateNoteRequest, CreateNoteResponse, NoteListResponse, NoteMessageResponse, NoteQueryParams,
    NoteResponse, UpdateNoteRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{EleveRepository, MatiereRepository, NoteRepository, NoteUpdate};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/notes/ajout", post(create_note))
        .route("/api/notes", get(get_all_notes))
        .route(
            "/api/notes/{note_id}",
            get(get_note_by_id).put(update_note).delete(delete_note),
        )
}

/// Records a grade. Enseignants can grade, not only admins.
#[utoipa::path(
    post,
    path = "/api/notes/ajout",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note enregistrée", body = CreateNoteResponse),
        (status = 400, description = "Champs manquants ou référence invalide"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
pub async fn create_note(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<CreateNoteResponse>), (StatusCode, String)> {
    permission::is_admin_or_enseignant(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let eleve_id = payload
        .eleve
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "L'élève est requis".to_string()))?;
    let matiere_id = payload
        .matiere
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "La matière est requise".to_string()))?;
    let valeur = payload
        .valeur
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "La valeur est requise".to_string()))?;

    let eleve_repo = EleveRepository::new();
    eleve_repo
        .find_by_id(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Élève invalide".to_string()))?;

    let matiere_repo = MatiereRepository::new();
    matiere_repo
        .find_by_id(matiere_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Matière invalide".to_string()))?;

    let note_repo = NoteRepository::new();
    let note = note_repo
        .create(Uuid::new_v4(), eleve_id, matiere_id, valeur)
        .await
        .map_err(|e| internal_error("Failed to create note", e))?;

    let response = CreateNoteResponse {
        success: true,
        message: "Note enregistrée avec succès".to_string(),
        data: note,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    params(NoteQueryParams),
    responses(
        (status = 200, description = "Liste des notes", body = NoteListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notes"
)]
pub async fn get_all_notes(
    Query(params): Query<NoteQueryParams>,
) -> Result<(StatusCode, Json<NoteListResponse>), (StatusCode, String)> {
    let note_repo = NoteRepository::new();

    let notes = match params.eleve {
        Some(eleve_id) => note_repo.find_by_eleve(eleve_id).await,
        None => note_repo.find_all().await,
    }
    .map_err(|e| internal_error("Database error", e))?;

    let response = NoteListResponse {
        success: true,
        count: notes.len(),
        data: notes,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = Uuid, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note trouvée", body = NoteResponse),
        (status = 404, description = "Note introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notes"
)]
pub async fn get_note_by_id(
    Path(note_id): Path<Uuid>,
) -> Result<(StatusCode, Json<NoteResponse>), (StatusCode, String)> {
    let note_repo = NoteRepository::new();

    let note = note_repo
        .find_by_id(note_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Note introuvable".to_string()))?;

    let response = NoteResponse {
        success: true,
        data: note,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = Uuid, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note mise à jour", body = NoteResponse),
        (status = 404, description = "Note introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
pub async fn update_note(
    AuthClaims(auth_claims): AuthClaims,
    Path(note_id): Path<Uuid>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), (StatusCode, String)> {
    permission::is_admin_or_enseignant(&auth_claims)?;

    let note_repo = NoteRepository::new();

    note_repo
        .find_by_id(note_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Note introuvable".to_string()))?;

    let updates = NoteUpdate {
        eleve_id: payload.eleve,
        matiere_id: payload.matiere,
        valeur: payload.valeur,
    };

    let note = note_repo
        .update(note_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update note", e))?;

    let response = NoteResponse {
        success: true,
        data: note,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{note_id}",
    params(
        ("note_id" = Uuid, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note supprimée", body = NoteMessageResponse),
        (status = 404, description = "Note introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Notes"
)]
pub async fn delete_note(
    AuthClaims(auth_claims): AuthClaims,
    Path(note_id): Path<Uuid>,
) -> Result<(StatusCode, Json<NoteMessageResponse>), (StatusCode, String)> {
    permission::is_admin_or_enseignant(&auth_claims)?;

    let note_repo = NoteRepository::new();

    note_repo
        .find_by_id(note_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Note introuvable".to_string()))?;

    note_repo
        .delete(note_id)
        .await
        .map_err(|e| internal_error("Failed to delete note", e))?;

    let response = NoteMessageResponse {
        success: true,
        message: "Note supprimée avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
