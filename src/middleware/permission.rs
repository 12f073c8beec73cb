use http::StatusCode;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::utils::jwt::TokenClaims;

pub fn is_admin(claims: &TokenClaims) -> Result<(), (StatusCode, String)> {
    if claims.role != RoleEnum::Admin {
        return Err((
            StatusCode::FORBIDDEN,
            "Only admin can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn is_admin_or_enseignant(claims: &TokenClaims) -> Result<(), (StatusCode, String)> {
    match claims.role {
        RoleEnum::Admin | RoleEnum::Enseignant => Ok(()),
        RoleEnum::Eleve => Err((
            StatusCode::FORBIDDEN,
            "Only admin or enseignant can perform this action".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: RoleEnum) -> TokenClaims {
        TokenClaims {
            sub: "00000000-0000-0000-0000-000000000000".to_string(),
            nom_utilisateur: "test.user".to_string(),
            role,
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(is_admin(&claims(RoleEnum::Admin)).is_ok());
        assert!(is_admin(&claims(RoleEnum::Enseignant)).is_err());
        assert!(is_admin(&claims(RoleEnum::Eleve)).is_err());
    }

    #[test]
    fn test_is_admin_or_enseignant() {
        assert!(is_admin_or_enseignant(&claims(RoleEnum::Admin)).is_ok());
        assert!(is_admin_or_enseignant(&claims(RoleEnum::Enseignant)).is_ok());
        assert!(is_admin_or_enseignant(&claims(RoleEnum::Eleve)).is_err());
    }
}
