use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use crate::entities::note;
use crate::static_service::DATABASE_CONNECTION;

pub struct NoteRepository;

impl NoteRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<note::Model>> {
        let db = self.get_connection();
        let notes = note::Entity::find()
            .order_by_desc(note::Column::CreateAt)
            .all(db)
            .await?;
        Ok(notes)
    }

    pub async fn find_by_id(&self, note_id: Uuid) -> Result<Option<note::Model>> {
        let db = self.get_connection();
        let note = note::Entity::find_by_id(note_id).one(db).await?;
        Ok(note)
    }

    pub async fn find_by_eleve(&self, eleve_id: Uuid) -> Result<Vec<note::Model>> {
        let db = self.get_connection();
        let notes = note::Entity::find()
            .filter(note::Column::EleveId.eq(eleve_id))
            .order_by_desc(note::Column::CreateAt)
            .all(db)
            .await?;
        Ok(notes)
    }

    pub async fn create(
        &self,
        note_id: Uuid,
        eleve_id: Uuid,
        matiere_id: Uuid,
        valeur: Decimal,
    ) -> Result<note::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let note_model = note::ActiveModel {
            note_id: Set(note_id),
            eleve_id: Set(eleve_id),
            matiere_id: Set(matiere_id),
            valeur: Set(valeur),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = note_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, note_id: Uuid, updates: NoteUpdate) -> Result<note::Model> {
        let note = self
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Note not found"))?;
        let db = self.get_connection();

        let mut active_model: note::ActiveModel = note.into();

        if let Some(eleve_id) = updates.eleve_id {
            active_model.eleve_id = Set(eleve_id);
        }
        if let Some(matiere_id) = updates.matiere_id {
            active_model.matiere_id = Set(matiere_id);
        }
        if let Some(valeur) = updates.valeur {
            active_model.valeur = Set(valeur);
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, note_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = note::Entity::delete_by_id(note_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct NoteUpdate {
    pub eleve_id: Option<Uuid>,
    pub matiere_id: Option<Uuid>,
    pub valeur: Option<Decimal>,
}
