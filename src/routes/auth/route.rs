use axum::{Json, Router, http::StatusCode, routing::post};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use chrono::{Duration, Utc};
use uuid::Uuid;

use super::dto::{
    ConnexionRequest, ConnexionResponse, DeconnexionResponse, InscriptionRequest,
    InscriptionResponse, ProfilUtilisateur,
};
use crate::config::{APP_CONFIG, JWT_EXPIRED_TIME};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::extractor::AuthClaims;
use crate::repositories::{SessionRepository, UtilisateurRepository};
use crate::routes::{internal_error, is_unique_violation};
use crate::utils::credentials;
use crate::utils::jwt::JwtManager;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/auth/connexion", post(connexion))
        .route("/api/auth/inscription", post(inscription))
        .route("/api/auth/deconnexion", post(deconnexion))
}

/// Verifies the credentials, issues a JWT and records the session.
#[utoipa::path(
    post,
    path = "/api/auth/connexion",
    request_body = ConnexionRequest,
    responses(
        (status = 200, description = "Connexion réussie", body = ConnexionResponse),
        (status = 401, description = "Identifiants invalides"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn connexion(
    Json(payload): Json<ConnexionRequest>,
) -> Result<(StatusCode, Json<ConnexionResponse>), (StatusCode, String)> {
    let utilisateur_repo = UtilisateurRepository::new();

    let utilisateur = utilisateur_repo
        .find_by_nom_utilisateur(&payload.nom_utilisateur)
        .await
        .map_err(|e| internal_error("Database error", e))?
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                "Nom d'utilisateur ou mot de passe invalide".to_string(),
            )
        })?;

    let password_valid = bcrypt::verify(&payload.mot_de_passe, &utilisateur.mot_de_passe)
        .map_err(|e| internal_error("Password verification error", e))?;

    if !password_valid {
        return Err((
            StatusCode::UNAUTHORIZED,
            "Nom d'utilisateur ou mot de passe invalide".to_string(),
        ));
    }

    let jwt_manager = JwtManager::new(APP_CONFIG.session_secret.clone());
    let token = jwt_manager
        .create_jwt(
            &utilisateur.utilisateur_id.to_string(),
            &utilisateur.nom_utilisateur,
            utilisateur.role.clone(),
            JWT_EXPIRED_TIME,
        )
        .map_err(|e| internal_error("Failed to create token", e))?;

    let session_repo = SessionRepository::new();

    // Opportunistic cleanup of stale sessions
    if let Err(e) = session_repo.delete_expired().await {
        tracing::warn!("Failed to purge expired sessions: {}", e);
    }

    let expires_at = (Utc::now() + Duration::seconds(JWT_EXPIRED_TIME)).naive_utc();
    session_repo
        .create(
            Uuid::new_v4(),
            utilisateur.utilisateur_id,
            token.clone(),
            expires_at,
        )
        .await
        .map_err(|e| internal_error("Failed to record session", e))?;

    let response = ConnexionResponse {
        success: true,
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: JWT_EXPIRED_TIME,
        utilisateur: ProfilUtilisateur {
            utilisateur_id: utilisateur.utilisateur_id,
            nom_utilisateur: utilisateur.nom_utilisateur,
            email: utilisateur.email,
            role: utilisateur.role,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Registers a standalone account (not tied to an eleve record).
#[utoipa::path(
    post,
    path = "/api/auth/inscription",
    request_body = InscriptionRequest,
    responses(
        (status = 201, description = "Compte créé", body = InscriptionResponse),
        (status = 400, description = "Nom d'utilisateur déjà pris"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn inscription(
    Json(payload): Json<InscriptionRequest>,
) -> Result<(StatusCode, Json<InscriptionResponse>), (StatusCode, String)> {
    let utilisateur_repo = UtilisateurRepository::new();

    if payload.nom_utilisateur.trim().is_empty() || payload.mot_de_passe.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Nom d'utilisateur et mot de passe sont requis".to_string(),
        ));
    }

    let mot_de_passe_hash = bcrypt::hash(&payload.mot_de_passe, bcrypt::DEFAULT_COST)
        .map_err(|e| internal_error("Failed to hash password", e))?;

    let cin = payload.cin.unwrap_or_else(credentials::generate_cin);
    let role = payload.role.unwrap_or(RoleEnum::Eleve);

    let utilisateur = utilisateur_repo
        .create(
            Uuid::new_v4(),
            payload.nom_utilisateur,
            payload.email,
            mot_de_passe_hash,
            cin,
            role,
            None,
            None,
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                (
                    StatusCode::BAD_REQUEST,
                    "Un compte existe déjà avec ce nom d'utilisateur ou ce CIN".to_string(),
                )
            } else {
                internal_error("Failed to create account", e)
            }
        })?;

    let response = InscriptionResponse {
        success: true,
        message: "Compte créé avec succès".to_string(),
        utilisateur: ProfilUtilisateur {
            utilisateur_id: utilisateur.utilisateur_id,
            nom_utilisateur: utilisateur.nom_utilisateur,
            email: utilisateur.email,
            role: utilisateur.role,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Drops the server-side session for the presented token.
#[utoipa::path(
    post,
    path = "/api/auth/deconnexion",
    responses(
        (status = 200, description = "Déconnexion réussie", body = DeconnexionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Auth"
)]
pub async fn deconnexion(
    TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>,
    AuthClaims(_auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<DeconnexionResponse>), (StatusCode, String)> {
    let session_repo = SessionRepository::new();

    session_repo
        .delete_by_token(bearer.token())
        .await
        .map_err(|e| internal_error("Failed to delete session", e))?;

    let response = DeconnexionResponse {
        success: true,
        message: "Déconnexion réussie".to_string(),
    };

    Ok((StatusCode::OK, Json(response)))
}
