use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::emploi_du_temps;
use crate::static_service::DATABASE_CONNECTION;

pub struct EmploiRepository;

impl EmploiRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<emploi_du_temps::Model>> {
        let db = self.get_connection();
        let emplois = emploi_du_temps::Entity::find()
            .order_by_asc(emploi_du_temps::Column::Jour)
            .all(db)
            .await?;
        Ok(emplois)
    }

    pub async fn find_by_id(&self, emploi_id: Uuid) -> Result<Option<emploi_du_temps::Model>> {
        let db = self.get_connection();
        let emploi = emploi_du_temps::Entity::find_by_id(emploi_id).one(db).await?;
        Ok(emploi)
    }

    pub async fn find_by_classe(&self, classe_id: Uuid) -> Result<Vec<emploi_du_temps::Model>> {
        let db = self.get_connection();
        let emplois = emploi_du_temps::Entity::find()
            .filter(emploi_du_temps::Column::ClasseId.eq(classe_id))
            .order_by_asc(emploi_du_temps::Column::Jour)
            .all(db)
            .await?;
        Ok(emplois)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        emploi_id: Uuid,
        classe_id: Uuid,
        matiere_id: Uuid,
        enseignant_id: Uuid,
        jour: String,
        heure_debut: String,
        heure_fin: String,
    ) -> Result<emploi_du_temps::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let emploi_model = emploi_du_temps::ActiveModel {
            emploi_id: Set(emploi_id),
            classe_id: Set(classe_id),
            matiere_id: Set(matiere_id),
            enseignant_id: Set(enseignant_id),
            jour: Set(jour),
            heure_debut: Set(heure_debut),
            heure_fin: Set(heure_fin),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = emploi_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        emploi_id: Uuid,
        updates: EmploiUpdate,
    ) -> Result<emploi_du_temps::Model> {
        let emploi = self
            .find_by_id(emploi_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Emploi du temps not found"))?;
        let db = self.get_connection();

        let mut active_model: emploi_du_temps::ActiveModel = emploi.into();

        if let Some(classe_id) = updates.classe_id {
            active_model.classe_id = Set(classe_id);
        }
        if let Some(matiere_id) = updates.matiere_id {
            active_model.matiere_id = Set(matiere_id);
        }
        if let Some(enseignant_id) = updates.enseignant_id {
            active_model.enseignant_id = Set(enseignant_id);
        }
        if let Some(jour) = updates.jour {
            active_model.jour = Set(jour);
        }
        if let Some(heure_debut) = updates.heure_debut {
            active_model.heure_debut = Set(heure_debut);
        }
        if let Some(heure_fin) = updates.heure_fin {
            active_model.heure_fin = Set(heure_fin);
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, emploi_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = emploi_du_temps::Entity::delete_by_id(emploi_id)
            .exec(db)
            .await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct EmploiUpdate {
    pub classe_id: Option<Uuid>,
    pub matiere_id: Option<Uuid>,
    pub enseignant_id: Option<Uuid>,
    pub jour: Option<String>,
    pub heure_debut: Option<String>,
    pub heure_fin: Option<String>,
}
