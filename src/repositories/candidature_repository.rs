use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::candidature;
use crate::static_service::DATABASE_CONNECTION;

pub struct CandidatureRepository;

impl CandidatureRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<candidature::Model>> {
        let db = self.get_connection();
        let candidatures = candidature::Entity::find()
            .order_by_desc(candidature::Column::CreateAt)
            .all(db)
            .await?;
        Ok(candidatures)
    }

    pub async fn find_by_id(&self, candidature_id: Uuid) -> Result<Option<candidature::Model>> {
        let db = self.get_connection();
        let candidature = candidature::Entity::find_by_id(candidature_id).one(db).await?;
        Ok(candidature)
    }

    pub async fn find_by_offre(&self, offre_id: Uuid) -> Result<Vec<candidature::Model>> {
        let db = self.get_connection();
        let candidatures = candidature::Entity::find()
            .filter(candidature::Column::OffreId.eq(offre_id))
            .order_by_desc(candidature::Column::CreateAt)
            .all(db)
            .await?;
        Ok(candidatures)
    }

    pub async fn create(
        &self,
        candidature_id: Uuid,
        offre_id: Uuid,
        nom: String,
        email: String,
        message: Option<String>,
    ) -> Result<candidature::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let candidature_model = candidature::ActiveModel {
            candidature_id: Set(candidature_id),
            offre_id: Set(offre_id),
            nom: Set(nom),
            email: Set(email),
            message: Set(message),
            statut: Set("en_attente".to_string()),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = candidature_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        candidature_id: Uuid,
        updates: CandidatureUpdate,
    ) -> Result<candidature::Model> {
        let candidature = self
            .find_by_id(candidature_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Candidature not found"))?;
        let db = self.get_connection();

        let mut active_model: candidature::ActiveModel = candidature.into();

        if let Some(nom) = updates.nom {
            active_model.nom = Set(nom);
        }
        if let Some(email) = updates.email {
            active_model.email = Set(email);
        }
        if let Some(message) = updates.message {
            active_model.message = Set(Some(message));
        }
        if let Some(statut) = updates.statut {
            active_model.statut = Set(statut);
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, candidature_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = candidature::Entity::delete_by_id(candidature_id)
            .exec(db)
            .await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct CandidatureUpdate {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub statut: Option<String>,
}
