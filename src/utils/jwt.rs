use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub nom_utilisateur: String,
    pub role: RoleEnum,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtManager {
    secret: String,
}

impl JwtManager {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn create_jwt(
        &self,
        utilisateur_id: &str,
        nom_utilisateur: &str,
        role: RoleEnum,
        expires_in: i64,
    ) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: utilisateur_id.to_string(),
            nom_utilisateur: nom_utilisateur.to_string(),
            role,
            iat: now,
            exp: now + expires_in,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to encode JWT")
    }

    pub fn verify_jwt(&self, token: &str) -> Result<TokenClaims> {
        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Failed to decode JWT")?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_round_trip() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_jwt("abc-123", "aminata.diallo", RoleEnum::Eleve, 3600)
            .unwrap();

        let claims = manager.verify_jwt(&token).unwrap();
        assert_eq!(claims.sub, "abc-123");
        assert_eq!(claims.nom_utilisateur, "aminata.diallo");
        assert_eq!(claims.role, RoleEnum::Eleve);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_jwt_rejects_wrong_secret() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_jwt("abc-123", "admin", RoleEnum::Admin, 3600)
            .unwrap();

        let other = JwtManager::new("other-secret".to_string());
        assert!(other.verify_jwt(&token).is_err());
    }

    #[test]
    fn test_jwt_rejects_expired_token() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_jwt("abc-123", "admin", RoleEnum::Admin, -3600)
            .unwrap();

        assert!(manager.verify_jwt(&token).is_err());
    }
}
