use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::enseignant;
use crate::static_service::DATABASE_CONNECTION;

pub struct EnseignantRepository;

impl EnseignantRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<enseignant::Model>> {
        let db = self.get_connection();
        let enseignants = enseignant::Entity::find()
            .order_by_asc(enseignant::Column::Nom)
            .all(db)
            .await?;
        Ok(enseignants)
    }

    pub async fn find_by_id(&self, enseignant_id: Uuid) -> Result<Option<enseignant::Model>> {
        let db = self.get_connection();
        let enseignant = enseignant::Entity::find_by_id(enseignant_id).one(db).await?;
        Ok(enseignant)
    }

    pub async fn create(
        &self,
        enseignant_id: Uuid,
        nom: String,
        prenom: String,
        email: String,
        telephone: Option<String>,
        specialite: Option<String>,
    ) -> Result<enseignant::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let enseignant_model = enseignant::ActiveModel {
            enseignant_id: Set(enseignant_id),
            nom: Set(nom),
            prenom: Set(prenom),
            email: Set(email),
            telephone: Set(telephone),
            specialite: Set(specialite),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = enseignant_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        enseignant_id: Uuid,
        updates: EnseignantUpdate,
    ) -> Result<enseignant::Model> {
        let enseignant = self
            .find_by_id(enseignant_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Enseignant not found"))?;
        let db = self.get_connection();

        let mut active_model: enseignant::ActiveModel = enseignant.into();

        if let Some(nom) = updates.nom {
            active_model.nom = Set(nom);
        }
        if let Some(prenom) = updates.prenom {
            active_model.prenom = Set(prenom);
        }
        if let Some(email) = updates.email {
            active_model.email = Set(email);
        }
        if let Some(telephone) = updates.telephone {
            active_model.telephone = Set(Some(telephone));
        }
        if let Some(specialite) = updates.specialite {
            active_model.specialite = Set(Some(specialite));
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, enseignant_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = enseignant::Entity::delete_by_id(enseignant_id)
            .exec(db)
            .await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct EnseignantUpdate {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub specialite: Option<String>,
}
