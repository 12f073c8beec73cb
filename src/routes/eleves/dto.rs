use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::StatutEnum;
use crate::entities::{classe, eleve};

pub const CLASSE_NON_ATTRIBUEE: &str = "Non attribué";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEleveRequest {
    #[schema(example = "Diallo")]
    pub nom: Option<String>,

    #[schema(example = "Aminata")]
    pub prenom: Option<String>,

    #[schema(example = "aminata.diallo@example.com")]
    pub email: Option<String>,

    #[schema(example = "0612345678")]
    pub telephone: Option<String>,

    pub date_naissance: Option<NaiveDate>,

    #[schema(example = "12 rue des Écoles")]
    pub adresse: Option<String>,

    /// Identifier of the classe the eleve is enrolled in.
    pub classe: Option<Uuid>,
}

impl CreateEleveRequest {
    /// Rejects payloads missing a required field before anything touches the
    /// database.
    pub fn validate(&self) -> Result<(), String> {
        if self.nom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le nom est requis".to_string());
        }
        if self.prenom.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("Le prénom est requis".to_string());
        }
        if self.email.as_deref().is_none_or(|v| v.trim().is_empty()) {
            return Err("L'email est requis".to_string());
        }
        if self.classe.is_none() {
            return Err("La classe est requise".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEleveRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub adresse: Option<String>,
    pub statut: Option<StatutEnum>,
    pub classe: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EleveCree {
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompteCree {
    pub nom_utilisateur: String,
    pub cin: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEleveResponse {
    pub success: bool,
    pub message: String,
    pub eleve: EleveCree,
    pub utilisateur: CompteCree,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EleveDetail {
    pub eleve_id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub nom_complet: String,
    pub email: String,
    pub telephone: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub adresse: Option<String>,
    pub statut: StatutEnum,
    pub classe: String,
    pub create_at: chrono::NaiveDateTime,
}

impl EleveDetail {
    /// Joins the classe name in, substituting a placeholder when the
    /// reference is dangling, and precomputes `nom_complet`.
    pub fn from_models(eleve: eleve::Model, classe: Option<classe::Model>) -> Self {
        let nom_complet = format!("{} {}", eleve.prenom, eleve.nom);
        let classe_nom = classe
            .map(|c| c.nom)
            .unwrap_or_else(|| CLASSE_NON_ATTRIBUEE.to_string());

        Self {
            eleve_id: eleve.eleve_id,
            nom: eleve.nom,
            prenom: eleve.prenom,
            nom_complet,
            email: eleve.email,
            telephone: eleve.telephone,
            date_naissance: eleve.date_naissance,
            adresse: eleve.adresse,
            statut: eleve.statut,
            classe: classe_nom,
            create_at: eleve.create_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EleveListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<EleveDetail>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EleveDetailResponse {
    pub success: bool,
    pub data: EleveDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EleveMessageResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn eleve_model() -> eleve::Model {
        let now = Utc::now().naive_utc();
        eleve::Model {
            eleve_id: Uuid::new_v4(),
            nom: "Diallo".to_string(),
            prenom: "Aminata".to_string(),
            email: "aminata.diallo@example.com".to_string(),
            telephone: None,
            date_naissance: None,
            adresse: None,
            statut: StatutEnum::Actif,
            classe_id: Uuid::new_v4(),
            create_at: now,
            update_at: now,
        }
    }

    #[test]
    fn test_detail_joins_classe_name() {
        let now = Utc::now().naive_utc();
        let classe = classe::Model {
            classe_id: Uuid::new_v4(),
            nom: "6e A".to_string(),
            niveau: "6e".to_string(),
            create_at: now,
            update_at: now,
        };

        let detail = EleveDetail::from_models(eleve_model(), Some(classe));
        assert_eq!(detail.classe, "6e A");
        assert_eq!(detail.nom_complet, "Aminata Diallo");
    }

    #[test]
    fn test_detail_substitutes_placeholder_for_missing_classe() {
        let detail = EleveDetail::from_models(eleve_model(), None);
        assert_eq!(detail.classe, CLASSE_NON_ATTRIBUEE);
    }

    #[test]
    fn test_validation_rejects_missing_fields() {
        let empty = CreateEleveRequest {
            nom: None,
            prenom: None,
            email: None,
            telephone: None,
            date_naissance: None,
            adresse: None,
            classe: None,
        };
        assert!(empty.validate().is_err());

        let blank_nom = CreateEleveRequest {
            nom: Some("   ".to_string()),
            prenom: Some("Aminata".to_string()),
            email: Some("a@b.c".to_string()),
            telephone: None,
            date_naissance: None,
            adresse: None,
            classe: Some(Uuid::new_v4()),
        };
        assert!(blank_nom.validate().is_err());

        let missing_classe = CreateEleveRequest {
            nom: Some("Diallo".to_string()),
            prenom: Some("Aminata".to_string()),
            email: Some("a@b.c".to_string()),
            telephone: None,
            date_naissance: None,
            adresse: None,
            classe: None,
        };
        assert!(missing_classe.validate().is_err());

        let complete = CreateEleveRequest {
            nom: Some("Diallo".to_string()),
            prenom: Some("Aminata".to_string()),
            email: Some("a@b.c".to_string()),
            telephone: None,
            date_naissance: None,
            adresse: None,
            classe: Some(Uuid::new_v4()),
        };
        assert!(complete.validate().is_ok());
    }
}
