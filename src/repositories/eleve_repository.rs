use anyhow::Result;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::{RoleEnum, StatutEnum};
use crate::entities::{classe, eleve, utilisateur};
use crate::static_service::DATABASE_CONNECTION;

pub struct EleveRepository;

impl EleveRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, eleve_id: Uuid) -> Result<Option<eleve::Model>> {
        let db = self.get_connection();
        let eleve = eleve::Entity::find_by_id(eleve_id).one(db).await?;
        Ok(eleve)
    }

    pub async fn find_by_id_with_classe(
        &self,
        eleve_id: Uuid,
    ) -> Result<Option<(eleve::Model, Option<classe::Model>)>> {
        let db = self.get_connection();
        let result = eleve::Entity::find_by_id(eleve_id)
            .find_also_related(classe::Entity)
            .one(db)
            .await?;
        Ok(result)
    }

    pub async fn find_all_with_classe(
        &self,
    ) -> Result<Vec<(eleve::Model, Option<classe::Model>)>> {
        let db = self.get_connection();
        let eleves = eleve::Entity::find()
            .find_also_related(classe::Entity)
            .order_by_desc(eleve::Column::CreateAt)
            .all(db)
            .await?;
        Ok(eleves)
    }

    pub async fn count_by_classe(&self, classe_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let count = eleve::Entity::find()
            .filter(eleve::Column::ClasseId.eq(classe_id))
            .count(db)
            .await?;
        Ok(count)
    }

    /// Inserts the eleve and its login account in one transaction. The source
    /// system performed these as two unguarded writes and could leave an
    /// orphaned eleve behind; here either both rows commit or neither does.
    pub async fn create_with_compte(
        &self,
        nouvel_eleve: NouvelEleve,
        nouveau_compte: NouveauCompte,
    ) -> Result<(eleve::Model, utilisateur::Model)> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();

        let txn = db.begin().await?;

        let eleve_model = eleve::ActiveModel {
            eleve_id: Set(nouvel_eleve.eleve_id),
            nom: Set(nouvel_eleve.nom),
            prenom: Set(nouvel_eleve.prenom),
            email: Set(nouvel_eleve.email.clone()),
            telephone: Set(nouvel_eleve.telephone),
            date_naissance: Set(nouvel_eleve.date_naissance),
            adresse: Set(nouvel_eleve.adresse),
            statut: Set(nouvel_eleve.statut),
            classe_id: Set(nouvel_eleve.classe_id),
            create_at: Set(now),
            update_at: Set(now),
        };
        let eleve = eleve_model.insert(&txn).await?;

        let utilisateur_model = utilisateur::ActiveModel {
            utilisateur_id: Set(nouveau_compte.utilisateur_id),
            nom_utilisateur: Set(nouveau_compte.nom_utilisateur),
            email: Set(nouvel_eleve.email),
            mot_de_passe: Set(nouveau_compte.mot_de_passe_hash),
            cin: Set(nouveau_compte.cin),
            role: Set(RoleEnum::Eleve),
            eleve_id: Set(Some(eleve.eleve_id)),
            enseignant_id: Set(None),
            statut: Set(StatutEnum::Actif),
            create_at: Set(now),
            update_at: Set(now),
        };
        let utilisateur = utilisateur_model.insert(&txn).await?;

        txn.commit().await?;

        Ok((eleve, utilisateur))
    }

    pub async fn update(&self, eleve_id: Uuid, updates: EleveUpdate) -> Result<eleve::Model> {
        let eleve = self
            .find_by_id(eleve_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Eleve not found"))?;
        let db = self.get_connection();

        let mut active_model: eleve::ActiveModel = eleve.into();

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
        if let Some(date_naissance) = updates.date_naissance {
            active_model.date_naissance = Set(Some(date_naissance));
        }
        if let Some(adresse) = updates.adresse {
            active_model.adresse = Set(Some(adresse));
        }
        if let Some(statut) = updates.statut {
            active_model.statut = Set(statut);
        }
        if let Some(classe_id) = updates.classe_id {
            active_model.classe_id = Set(classe_id);
        }

        active_model.update_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, eleve_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();

        // Remove the paired account first (eleve rows cascade elsewhere)
        utilisateur::Entity::delete_many()
            .filter(utilisateur::Column::EleveId.eq(eleve_id))
            .exec(db)
            .await?;

        let result = eleve::Entity::delete_by_id(eleve_id).exec(db).await?;
        Ok(result)
    }
}

pub struct NouvelEleve {
    pub eleve_id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub adresse: Option<String>,
    pub statut: StatutEnum,
    pub classe_id: Uuid,
}

pub struct NouveauCompte {
    pub utilisateur_id: Uuid,
    pub nom_utilisateur: String,
    pub mot_de_passe_hash: String,
    pub cin: String,
}

#[derive(Default)]
pub struct EleveUpdate {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub adresse: Option<String>,
    pub statut: Option<StatutEnum>,
    pub classe_id: Option<Uuid>,
}
