use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{RoleEnum, StatutEnum};
use crate::entities::utilisateur;
use crate::static_service::DATABASE_CONNECTION;

pub struct UtilisateurRepository;

impl UtilisateurRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_nom_utilisateur(
        &self,
        nom_utilisateur: &str,
    ) -> Result<Option<utilisateur::Model>> {
        let db = self.get_connection();
        let utilisateur = utilisateur::Entity::find()
            .filter(utilisateur::Column::NomUtilisateur.eq(nom_utilisateur))
            .one(db)
            .await?;
        Ok(utilisateur)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        utilisateur_id: Uuid,
        nom_utilisateur: String,
        email: String,
        mot_de_passe_hash: String,
        cin: String,
        role: RoleEnum,
        eleve_id: Option<Uuid>,
        enseignant_id: Option<Uuid>,
    ) -> Result<utilisateur::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let utilisateur_model = utilisateur::ActiveModel {
            utilisateur_id: Set(utilisateur_id),
            nom_utilisateur: Set(nom_utilisateur),
            email: Set(email),
            mot_de_passe: Set(mot_de_passe_hash),
            cin: Set(cin),
            role: Set(role),
            eleve_id: Set(eleve_id),
            enseignant_id: Set(enseignant_id),
            statut: Set(StatutEnum::Actif),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = utilisateur_model.insert(db).await?;
        Ok(result)
    }
}
