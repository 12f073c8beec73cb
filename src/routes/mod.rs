use http::StatusCode;

use crate::config::APP_CONFIG;

pub mod auth;
pub mod candidatures;
pub mod classes;
pub mod eleves;
pub mod emplois;
pub mod enseignants;
pub mod health;
pub mod matieres;
pub mod notes;
pub mod offres;
pub mod paiements;

/// Maps an unexpected failure to a 500. The underlying error is only attached
/// outside production.
pub(crate) fn internal_error<E: std::fmt::Display>(context: &str, err: E) -> (StatusCode, String) {
    if APP_CONFIG.is_production() {
        (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}: {}", context, err),
        )
    }
}

/// Unique-index violations surface as constraint errors; callers map them to
/// a 400 instead of a 500.
pub(crate) fn is_unique_violation<E: std::fmt::Display>(err: &E) -> bool {
    let message = err.to_string();
    message.contains("duplicate key") || message.contains("UNIQUE constraint")
}
