use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{classe, classe_matiere};
use crate::static_service::DATABASE_CONNECTION;

pub struct ClasseRepository;

impl ClasseRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<classe::Model>> {
        let db = self.get_connection();
        let classes = classe::Entity::find()
            .order_by_asc(classe::Column::Nom)
            .all(db)
            .await?;
        Ok(classes)
    }

    pub async fn find_by_id(&self, classe_id: Uuid) -> Result<Option<classe::Model>> {
        let db = self.get_connection();
        let classe = classe::Entity::find_by_id(classe_id).one(db).await?;
        Ok(classe)
    }

    /// Returns the class with its (matiere, enseignant) assignment rows in
    /// position order.
    pub async fn find_assignments(&self, classe_id: Uuid) -> Result<Vec<classe_matiere::Model>> {
        let db = self.get_connection();
        let assignments = classe_matiere::Entity::find()
            .filter(classe_matiere::Column::ClasseId.eq(classe_id))
            .order_by_asc(classe_matiere::Column::Position)
            .all(db)
            .await?;
        Ok(assignments)
    }

    pub async fn create(
        &self,
        classe_id: Uuid,
        nom: String,
        niveau: String,
        matieres: Vec<(Uuid, Uuid)>,
    ) -> Result<classe::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let classe_model = classe::ActiveModel {
            classe_id: Set(classe_id),
            nom: Set(nom),
            niveau: Set(niveau),
            create_at: Set(now),
            update_at: Set(now),
        };
        let result = classe_model.insert(db).await?;

        for (position, (matiere_id, enseignant_id)) in matieres.into_iter().enumerate() {
            let assignment = classe_matiere::ActiveModel {
                classe_id: Set(classe_id),
                matiere_id: Set(matiere_id),
                enseignant_id: Set(enseignant_id),
                position: Set(position as i32),
                create_at: Set(now),
            };
            assignment.insert(db).await?;
        }

        Ok(result)
    }

    pub async fn update(&self, classe_id: Uuid, updates: ClasseUpdate) -> Result<classe::Model> {
        let classe = self
            .find_by_id(classe_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Classe not found"))?;
        let db = self.get_connection();

        let mut active_model: classe::ActiveModel = classe.into();

        if let Some(nom) = updates.nom {
            active_model.nom = Set(nom);
        }
        if let Some(niveau) = updates.niveau {
            active_model.niveau = Set(niveau);
        }

        active_model.update_at = Set(Utc::now().naive_utc());
        let result = active_model.update(db).await?;

        // Assignment list is replaced wholesale when provided
        if let Some(matieres) = updates.matieres {
            classe_matiere::Entity::delete_many()
                .filter(classe_matiere::Column::ClasseId.eq(classe_id))
                .exec(db)
                .await?;

            let now = Utc::now().naive_utc();
            for (position, (matiere_id, enseignant_id)) in matieres.into_iter().enumerate() {
                let assignment = classe_matiere::ActiveModel {
                    classe_id: Set(classe_id),
                    matiere_id: Set(matiere_id),
                    enseignant_id: Set(enseignant_id),
                    position: Set(position as i32),
                    create_at: Set(now),
                };
                assignment.insert(db).await?;
            }
        }

        Ok(result)
    }

    pub async fn delete(&self, classe_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();

        classe_matiere::Entity::delete_many()
            .filter(classe_matiere::Column::ClasseId.eq(classe_id))
            .exec(db)
            .await?;

        let result = classe::Entity::delete_by_id(classe_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct ClasseUpdate {
    pub nom: Option<String>,
    pub niveau: Option<String>,
    pub matieres: Option<Vec<(Uuid, Uuid)>>,
}
