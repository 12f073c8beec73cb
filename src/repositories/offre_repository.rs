use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{candidature, offre};
use crate::static_service::DATABASE_CONNECTION;

pub struct OffreRepository;

impl OffreRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<offre::Model>> {
        let db = self.get_connection();
        let offres = offre::Entity::find()
            .order_by_desc(offre::Column::CreateAt)
            .all(db)
            .await?;
        Ok(offres)
    }

    pub async fn find_by_id(&self, offre_id: Uuid) -> Result<Option<offre::Model>> {
        let db = self.get_connection();
        let offre = offre::Entity::find_by_id(offre_id).one(db).await?;
        Ok(offre)
    }

    pub async fn create(
        &self,
        offre_id: Uuid,
        titre: String,
        description: String,
        date_limite: Option<NaiveDate>,
    ) -> Result<offre::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let offre_model = offre::ActiveModel {
            offre_id: Set(offre_id),
            titre: Set(titre),
            description: Set(description),
            date_limite: Set(date_limite),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = offre_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, offre_id: Uuid, updates: OffreUpdate) -> Result<offre::Model> {
        let offre = self
            .find_by_id(offre_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Offre not found"))?;
        let db = self.get_connection();

        let mut active_model: offre::ActiveModel = offre.into();

        if let Some(titre) = updates.titre {
            active_model.titre = Set(titre);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(description);
        }
        if let Some(date_limite) = updates.date_limite {
            active_model.date_limite = Set(Some(date_limite));
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, offre_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();

        // Applications reference the offre, drop them first
        candidature::Entity::delete_many()
            .filter(candidature::Column::OffreId.eq(offre_id))
            .exec(db)
            .await?;

        let result = offre::Entity::delete_by_id(offre_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct OffreUpdate {
    pub titre: Option<String>,
    pub description: Option<String>,
    pub date_limite: Option<NaiveDate>,
}
