use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{matiere, matiere_enseignant};
use crate::static_service::DATABASE_CONNECTION;

pub struct MatiereRepository;

impl MatiereRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<matiere::Model>> {
        let db = self.get_connection();
        let matieres = matiere::Entity::find()
            .order_by_asc(matiere::Column::Nom)
            .all(db)
            .await?;
        Ok(matieres)
    }

    pub async fn find_by_id(&self, matiere_id: Uuid) -> Result<Option<matiere::Model>> {
        let db = self.get_connection();
        let matiere = matiere::Entity::find_by_id(matiere_id).one(db).await?;
        Ok(matiere)
    }

    pub async fn find_enseignant_ids(&self, matiere_id: Uuid) -> Result<Vec<Uuid>> {
        let db = self.get_connection();
        let relationships = matiere_enseignant::Entity::find()
            .filter(matiere_enseignant::Column::MatiereId.eq(matiere_id))
            .all(db)
            .await?;

        Ok(relationships
            .into_iter()
            .map(|r| r.enseignant_id)
            .collect())
    }

    pub async fn create(
        &self,
        matiere_id: Uuid,
        nom: String,
        coefficient: i32,
        description: Option<String>,
        enseignant_ids: Vec<Uuid>,
    ) -> Result<matiere::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let matiere_model = matiere::ActiveModel {
            matiere_id: Set(matiere_id),
            nom: Set(nom),
            coefficient: Set(coefficient),
            description: Set(description),
            create_at: Set(now),
            update_at: Set(now),
        };
        let result = matiere_model.insert(db).await?;

        for enseignant_id in enseignant_ids {
            let relationship = matiere_enseignant::ActiveModel {
                matiere_id: Set(matiere_id),
                enseignant_id: Set(enseignant_id),
                create_at: Set(now),
            };
            relationship.insert(db).await?;
        }

        Ok(result)
    }

    pub async fn update(&self, matiere_id: Uuid, updates: MatiereUpdate) -> Result<matiere::Model> {
        let matiere = self
            .find_by_id(matiere_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Matiere not found"))?;
        let db = self.get_connection();

        let mut active_model: matiere::ActiveModel = matiere.into();

        if let Some(nom) = updates.nom {
            active_model.nom = Set(nom);
        }
        if let Some(coefficient) = updates.coefficient {
            active_model.coefficient = Set(coefficient);
        }
        if let Some(description) = updates.description {
            active_model.description = Set(Some(description));
        }

        active_model.update_at = Set(Utc::now().naive_utc());
        let result = active_model.update(db).await?;

        if let Some(enseignant_ids) = updates.enseignant_ids {
            matiere_enseignant::Entity::delete_many()
                .filter(matiere_enseignant::Column::MatiereId.eq(matiere_id))
                .exec(db)
                .await?;

            let now = Utc::now().naive_utc();
            for enseignant_id in enseignant_ids {
                let relationship = matiere_enseignant::ActiveModel {
                    matiere_id: Set(matiere_id),
                    enseignant_id: Set(enseignant_id),
                    create_at: Set(now),
                };
                relationship.insert(db).await?;
            }
        }

        Ok(result)
    }

    pub async fn delete(&self, matiere_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();

        matiere_enseignant::Entity::delete_many()
            .filter(matiere_enseignant::Column::MatiereId.eq(matiere_id))
            .exec(db)
            .await?;

        let result = matiere::Entity::delete_by_id(matiere_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct MatiereUpdate {
    pub nom: Option<String>,
    pub coefficient: Option<i32>,
    pub description: Option<String>,
    pub enseignant_ids: Option<Vec<Uuid>>,
}
