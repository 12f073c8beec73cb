use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::sea_orm_active_enums::{RoleEnum, StatutEnum};
use crate::entities::utilisateur;

/// Creates the default admin account on first boot so the service is usable
/// before any other account exists.
pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let admin_email: &str = &APP_CONFIG.admin_email;
    let default_password: &str = &APP_CONFIG.admin_password;

    let existing_admin = utilisateur::Entity::find()
        .filter(utilisateur::Column::Email.eq(admin_email))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let hashed_password = bcrypt::hash(default_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash admin password")?;

    let now = Utc::now().naive_utc();

    let admin_user = utilisateur::ActiveModel {
        utilisateur_id: Set(Uuid::new_v4()),
        nom_utilisateur: Set("admin".to_string()),
        email: Set(admin_email.to_string()),
        mot_de_passe: Set(hashed_password),
        cin: Set("ADMIN0".to_string()),
        role: Set(RoleEnum::Admin),
        eleve_id: Set(None),
        enseignant_id: Set(None),
        statut: Set(StatutEnum::Actif),
        create_at: Set(now),
        update_at: Set(now),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("Admin user created successfully");
    tracing::info!("  Email: {}", admin_email);
    tracing::warn!("Please change the default password after first login!");

    Ok(())
}
