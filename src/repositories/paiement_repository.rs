use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use crate::entities::paiement;
use crate::static_service::DATABASE_CONNECTION;

pub struct PaiementRepository;

impl PaiementRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<paiement::Model>> {
        let db = self.get_connection();
        let paiements = paiement::Entity::find()
            .order_by_desc(paiement::Column::CreateAt)
            .all(db)
            .await?;
        Ok(paiements)
    }

    pub async fn find_by_id(&self, paiement_id: Uuid) -> Result<Option<paiement::Model>> {
        let db = self.get_connection();
        let paiement = paiement::Entity::find_by_id(paiement_id).one(db).await?;
        Ok(paiement)
    }

    pub async fn find_by_eleve(&self, eleve_id: Uuid) -> Result<Vec<paiement::Model>> {
        let db = self.get_connection();
        let paiements = paiement::Entity::find()
            .filter(paiement::Column::EleveId.eq(eleve_id))
            .order_by_desc(paiement::Column::CreateAt)
            .all(db)
            .await?;
        Ok(paiements)
    }

    pub async fn create(
        &self,
        paiement_id: Uuid,
        eleve_id: Uuid,
        tranche: String,
        montant: Decimal,
        annee_scolaire: String,
    ) -> Result<paiement::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let paiement_model = paiement::ActiveModel {
            paiement_id: Set(paiement_id),
            eleve_id: Set(eleve_id),
            tranche: Set(tranche),
            montant: Set(montant),
            annee_scolaire: Set(annee_scolaire),
            create_at: Set(now),
            update_at: Set(now),
        };

        let result = paiement_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        paiement_id: Uuid,
        updates: PaiementUpdate,
    ) -> Result<paiement::Model> {
        let paiement = self
            .find_by_id(paiement_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Paiement not found"))?;
        let db = self.get_connection();

        let mut active_model: paiement::ActiveModel = paiement.into();

        if let Some(eleve_id) = updates.eleve_id {
            active_model.eleve_id = Set(eleve_id);
        }
        if let Some(tranche) = updates.tranche {
            active_model.tranche = Set(tranche);
        }
        if let Some(montant) = updates.montant {
            active_model.montant = Set(montant);
        }
        if let Some(annee_scolaire) = updates.annee_scolaire {
            active_model.annee_scolaire = Set(annee_scolaire);
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, paiement_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = paiement::Entity::delete_by_id(paiement_id).exec(db).await?;
        Ok(result)
    }
}

#[derive(Default)]
pub struct PaiementUpdate {
    pub eleve_id: Option<Uuid>,
    pub tranche: Option<String>,
    pub montant: Option<Decimal>,
    pub annee_scolaire: Option<String>,
}
