use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{header, StatusCode};

use crate::config::APP_CONFIG;
use crate::utils::jwt::{JwtManager, TokenClaims};

/// Extracts and verifies the bearer token from the `Authorization` header.
pub struct AuthClaims(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    "Missing Authorization header".to_string(),
                )
            })?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                "Authorization header must be a Bearer token".to_string(),
            )
        })?;

        let jwt_manager = JwtManager::new(APP_CONFIG.session_secret.clone());
        let claims = jwt_manager.verify_jwt(token).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            )
        })?;

        Ok(AuthClaims(claims))
    }
}
