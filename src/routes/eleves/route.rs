use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    CompteCree, CreateEleveRequest, CreateEleveResponse, EleveCree, EleveDetail,
    EleveDetailResponse, EleveListResponse, EleveMessageResponse, UpdateEleveRequest,
};
use crate::entities::sea_orm_active_enums::StatutEnum;
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{
    ClasseRepository, EleveRepository, EleveUpdate, NouveauCompte, NouvelEleve,
};
use crate::routes::{internal_error, is_unique_violation};
use crate::utils::credentials;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/eleves/ajout", post(create_eleve))
        .route("/api/eleves", get(get_all_eleves))
        .route(
            "/api/eleves/{eleve_id}",
            get(get_eleve_by_id).put(update_eleve).delete(delete_eleve),
        )
}

/// Creates an eleve and provisions its login account in one transaction.
#[utoipa::path(
    post,
    path = "/api/eleves/ajout",
    request_body = CreateEleveRequest,
    responses(
        (status = 201, description = "Eleve créé avec son compte", body = CreateEleveResponse),
        (status = 400, description = "Champs manquants ou classe invalide"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Eleves"
)]
pub async fn create_eleve(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateEleveRequest>,
) -> Result<(StatusCode, Json<CreateEleveResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    payload
        .validate()
        .map_err(|message| (StatusCode::BAD_REQUEST, message))?;

    // validate() guarantees these are present
    let nom = payload.nom.unwrap_or_default();
    let prenom = payload.prenom.unwrap_or_default();
    let email = payload.email.unwrap_or_default();
    let classe_id = payload
        .classe
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "La classe est requise".to_string()))?;

    let classe_repo = ClasseRepository::new();
    classe_repo
        .find_by_id(classe_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Classe invalide".to_string()))?;

    let nom_utilisateur = credentials::derive_username(&prenom, &nom);
    let mot_de_passe = credentials::generate_password();
    let cin = credentials::generate_cin();

    let mot_de_passe_hash =
        bcrypt::hash(&mot_de_passe, bcrypt::DEFAULT_COST).map_err(|e| {
            internal_error("Failed to hash password", e)
        })?;

    let eleve_repo = EleveRepository::new();
    let (eleve, utilisateur) = eleve_repo
        .create_with_compte(
            NouvelEleve {
                eleve_id: Uuid::new_v4(),
                nom,
                prenom,
                email,
                telephone: payload.telephone,
                date_naissance: payload.date_naissance,
                adresse: payload.adresse,
                statut: StatutEnum::Actif,
                classe_id,
            },
            NouveauCompte {
                utilisateur_id: Uuid::new_v4(),
                nom_utilisateur,
                mot_de_passe_hash,
                cin,
            },
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                (
                    StatusCode::BAD_REQUEST,
                    "Un compte existe déjà avec ce nom d'utilisateur".to_string(),
                )
            } else {
                internal_error("Failed to create eleve", e)
            }
        })?;

    let response = CreateEleveResponse {
        success: true,
        message: "Élève créé avec succès".to_string(),
        eleve: EleveCree {
            id: eleve.eleve_id,
            nom: eleve.nom,
            prenom: eleve.prenom,
        },
        utilisateur: CompteCree {
            nom_utilisateur: utilisateur.nom_utilisateur,
            cin: utilisateur.cin,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists every eleve with its classe joined in.
#[utoipa::path(
    get,
    path = "/api/eleves",
    responses(
        (status = 200, description = "Liste des élèves", body = EleveListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Eleves"
)]
pub async fn get_all_eleves() -> Result<(StatusCode, Json<EleveListResponse>), (StatusCode, String)>
{
    let eleve_repo = EleveRepository::new();

    let eleves = eleve_repo
        .find_all_with_classe()
        .await
        .map_err(|e| internal_error("Database error", e))?;

    let data: Vec<EleveDetail> = eleves
        .into_iter()
        .map(|(eleve, classe)| EleveDetail::from_models(eleve, classe))
        .collect();

    let response = EleveListResponse {
        success: true,
        count: data.len(),
        data,
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/eleves/{eleve_id}",
    params(
        ("eleve_id" = Uuid, Path, description = "Eleve ID")
    ),
    responses(
        (status = 200, description = "Élève trouvé", body = EleveDetailResponse),
        (status = 404, description = "Élève introuvable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Eleves"
)]
pub async fn get_eleve_by_id(
    Path(eleve_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EleveDetailResponse>), (StatusCode, String)> {
    let eleve_repo = EleveRepository::new();

    let (eleve, classe) = eleve_repo
        .find_by_id_with_classe(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Élève introuvable".to_string()))?;

    let response = EleveDetailResponse {
        success: true,
        data: EleveDetail::from_models(eleve, classe),
    };

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/eleves/{eleve_id}",
    params(
        ("eleve_id" = Uuid, Path, description = "Eleve ID")
    ),
    request_body = UpdateEleveRequest,
    responses(
        (status = 200, description = "Élève mis à jour", body = EleveDetailResponse),
        (status = 400, description = "Classe invalide"),
        (status = 404, description = "Élève introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Eleves"
)]
pub async fn update_eleve(
    AuthClaims(auth_claims): AuthClaims,
    Path(eleve_id): Path<Uuid>,
    Json(payload): Json<UpdateEleveRequest>,
) -> Result<(StatusCode, Json<EleveDetailResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let eleve_repo = EleveRepository::new();

    eleve_repo
        .find_by_id(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Élève introuvable".to_string()))?;

    if let Some(classe_id) = payload.classe {
        let classe_repo = ClasseRepository::new();
        classe_repo
            .find_by_id(classe_id)
            .await
            .map_err(|e| internal_error("Database error", e))?
            .ok_or_else(|| (StatusCode::BAD_REQUEST, "Classe invalide".to_string()))?;
    }

    let updates = EleveUpdate {
        nom: payload.nom,
        prenom: payload.prenom,
        email: payload.email,
        telephone: payload.telephone,
        date_naissance: payload.date_naissance,
        adresse: payload.adresse,
        statut: payload.statut,
        classe_id: payload.classe,
    };

    eleve_repo
        .update(eleve_id, updates)
        .await
        .map_err(|e| internal_error("Failed to update eleve", e))?;

    let (eleve, classe) = eleve_repo
        .find_by_id_with_classe(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Élève introuvable".to_string()))?;

    let response = EleveDetailResponse {
        success: true,
        data: EleveDetail::from_models(eleve, classe),
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Deletes the eleve and its paired login account.
#[utoipa::path(
    delete,
    path = "/api/eleves/{eleve_id}",
    params(
        ("eleve_id" = Uuid, Path, description = "Eleve ID")
    ),
    responses(
        (status = 200, description = "Élève supprimé", body = EleveMessageResponse),
        (status = 404, description = "Élève introuvable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Eleves"
)]
pub async fn delete_eleve(
    AuthClaims(auth_claims): AuthClaims,
    Path(eleve_id): Path<Uuid>,
) -> Result<(StatusCode, Json<EleveMessageResponse>), (StatusCode, String)> {
    permission::is_admin(&auth_claims)?;

    let eleve_repo = EleveRepository::new();

    eleve_repo
        .find_by_id(eleve_id)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Élève introuvable".to_string()))?;

    eleve_repo
        .delete(eleve_id)
        .await
        .map_err(|e| internal_error("Failed to delete eleve", e))?;

    let response = EleveMessageResponse {
        success: true,
        message: "Élève supprimé avec succès".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
