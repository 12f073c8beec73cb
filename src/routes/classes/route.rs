use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    ClasseDetail, ClasseListResponse, ClasseMessageResponse, ClasseResponse, CreateClasseRequest,
    CreateClasseResponse, UpdateClasseRequest,
};
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{ClasseRepository, ClasseUpdate, EleveRepository};
use crate::routes::internal_error;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/classes/ajout", post(create_classe))
        .route("/api/classes", get(get_all_classes))
        .route(
            "/api/classes/{classe_id}",
            get(get_classe_by_id)
                .put(update_classe)
                .delete(delete_classe),
        )
}

/// Creates a classe with its ordered (matiere, enseignant) assignments.
#[utoipa::path(
    post,
    path = "/api/classes/ajout",
    request_body = CreateClasseRequest,
    responses(
        (status = 201, description = "Classe créée", body = CreateClasseResponse),
        (status = 400, description = "Champs manquants"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn create_classe(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateClasseRequest>,
) -> Result<(StatusCode, Json<CreateClasseResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    let classe_repo = ClasseRepository::new();
    let classe_id = Uuid::new_v4();

    let matieres: Vec<(Uuid, Uuid)> = payload
        .matieres
        .iter()
        .map(|a| (a.matiere, a.enseignant))
        .collect();

    let classe = classe_repo
        .create(
            classe_id,
            payload.nom.unwrap_or_default(),
            payload.niveau.unwrap_or_default(),
            matieres,
        )
        .await
        .map_err(|e| internal_error("Failed to create classe", e))?;

    let assignments = classe_repo
        .find_assignments(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = CreateClasseResponse {
        success: true,
        message: "Classe créée avec succès".to_string(),
        data: ClasseDetail::from_models(classe, assignments),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "Liste des classes", body = ClasseListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Classes"
)]
pub async fn get_all_classes()
-> Result<(StatusCode, Json<ClasseListResponse>), (StatusCode, String)> {
    let classe_repo = ClasseRepository::new();

    let classes = classe_repo
        .find_all()
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = ClasseListResponse {
        success: true,
        count: classes.len(),
        data: classes,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/classes/{classe_id}",
    params(
        ("classe_id" = Uuid, Path, description = "Classe ID")
    ),
    responses(
        (status = 200, description = "Classe trouvée", body = ClasseResponse),
        (status = 404, description = "Classe introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Classes"
)]
pub async fn get_classe_by_id(
    Path(classe_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ClasseResponse>), (StatusCode, String)> {
    let classe_repo = ClasseRepository::new();

    let classe = classe_repo
        .find_by_id(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Classe introuvable".to_string()))?;

    let assignments = classe_repo
        .find_assignments(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = ClasseResponse {
        success: true,
        data: ClasseDetail::from_models(classe, assignments),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/classes/{classe_id}",
    params(
        ("classe_id" = Uuid, Path, description = "Classe ID")
    ),
    request_body = UpdateClasseRequest,
    responses(
        (status = 200, description = "Classe mise à jour", body = ClasseResponse),
        (status = 404, description = "Classe introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn update_classe(
    AuthClaims(auth_claims): AuthClaims,
    Path(classe_id): Path<Uuid>,
    Json(payload): Json<UpdateClasseRequest>,
) -> Result<(StatusCode, Json<ClasseResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let classe_repo = ClasseRepository::new();

    classe_repo
        .find_by_id(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Classe introuvable".to_string()))?;

    let updates = ClasseUpdate {
        nom: payload.nom,
        niveau: payload.niveau,
        matieres: payload
            .matieres
            .map(|list| list.iter().map(|a| (a.matiere, a.enseignant)).collect()),
    };

    let classe = classe_repo
        .update(classe_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update classe", e))?;

    let assignments = classe_repo
        .find_assignments(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let response = ClasseResponse {
        success: true,
        data: ClasseDetail::from_models(classe, assignments),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/classes/{classe_id}",
    params(
        ("classe_id" = Uuid, Path, description = "Classe ID")
    ),
    responses(
        (status = 200, description = "Classe supprimée", body = ClasseMessageResponse),
        (status = 400, description = "La classe contient encore des élèves"),
        (status = 404, description = "Classe introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
pub async fn delete_classe(
    AuthClaims(auth_claims): AuthClaims,
    Path(classe_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ClasseMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let classe_repo = ClasseRepository::new();

    classe_repo
        .find_by_id(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Classe introuvable".to_string()))?;

    // The eleve FK restricts deletion; report it instead of surfacing a 500
    let eleve_repo = EleveRepository::new();
    let eleve_count = eleve_repo
        .count_by_classe(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?;
    if eleve_count > 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "La classe contient encore des élèves".to_string(),
        ));
    }

    classe_repo
        .delete(classe_id)
        .await
        .map_err(|e| internal_error("Failed to delete classe", e))?;

    let response = ClasseMessageResponse {
        success: true,
        message: "Classe supprimée avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
