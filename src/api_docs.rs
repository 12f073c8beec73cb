use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::entities::sea_orm_active_enums::{RoleEnum, StatutEnum};
use crate::entities::{
    candidature, classe, eleve, emploi_du_temps, enseignant, matiere, note, offre, paiement,
};
use crate::routes::{
    auth, candidatures, classes, eleves, emplois, enseignants, health, matieres, notes, offres,
    paiements,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::route::health,
        auth::route::connexion,
        auth::route::inscription,
        auth::route::deconnexion,
        eleves::route::create_eleve,
        eleves::route::get_all_eleves,
        eleves::route::get_eleve_by_id,
        eleves::route::update_eleve,
        eleves::route::delete_eleve,
        enseignants::route::create_enseignant,
        enseignants::route::get_all_enseignants,
        enseignants::route::get_enseignant_by_id,
        enseignants::route::update_enseignant,
        enseignants::route::delete_enseignant,
        classes::route::create_classe,
        classes::route::get_all_classes,
        classes::route::get_classe_by_id,
        classes::route::update_classe,
        classes::route::delete_classe,
        matieres::route::create_matiere,
        matieres::route::get_all_matieres,
        matieres::route::get_matiere_by_id,
        matieres::route::update_matiere,
        matieres::route::delete_matiere,
        notes::route::create_note,
        notes::route::get_all_notes,
        notes::route::get_note_by_id,
        notes::route::update_note,
        notes::route::delete_note,
        paiements::route::create_paiement,
        paiements::route::get_all_paiements,
        paiements::route::get_paiement_by_id,
        paiements::route::update_paiement,
        paiements::route::delete_paiement,
        offres::route::create_offre,
        offres::route::get_all_offres,
        offres::route::get_offre_by_id,
        offres::route::update_offre,
        offres::route::delete_offre,
        candidatures::route::create_candidature,
        candidatures::route::get_all_candidatures,
        candidatures::route::get_candidature_by_id,
        candidatures::route::update_candidature,
        candidatures::route::delete_candidature,
        emplois::route::create_emploi,
        emplois::route::get_all_emplois,
        emplois::route::get_emploi_by_id,
        emplois::route::update_emploi,
        emplois::route::delete_emploi,
    ),
    components(schemas(
        RoleEnum,
        StatutEnum,
        classe::Model,
        eleve::Model,
        enseignant::Model,
        matiere::Model,
        note::Model,
        paiement::Model,
        offre::Model,
        candidature::Model,
        emploi_du_temps::Model,
        health::route::HealthResponse,
        auth::dto::ConnexionRequest,
        auth::dto::ConnexionResponse,
        auth::dto::InscriptionRequest,
        auth::dto::InscriptionResponse,
        auth::dto::DeconnexionResponse,
        auth::dto::ProfilUtilisateur,
        eleves::dto::CreateEleveRequest,
        eleves::dto::CreateEleveResponse,
        eleves::dto::UpdateEleveRequest,
        eleves::dto::EleveCree,
        eleves::dto::CompteCree,
        eleves::dto::EleveDetail,
        eleves::dto::EleveDetailResponse,
        eleves::dto::EleveListResponse,
        eleves::dto::EleveMessageResponse,
        enseignants::dto::CreateEnseignantRequest,
        enseignants::dto::CreateEnseignantResponse,
        enseignants::dto::UpdateEnseignantRequest,
        enseignants::dto::EnseignantResponse,
        enseignants::dto::EnseignantListResponse,
        enseignants::dto::EnseignantMessageResponse,
        classes::dto::MatiereAssignment,
        classes::dto::CreateClasseRequest,
        classes::dto::CreateClasseResponse,
        classes::dto::UpdateClasseRequest,
        classes::dto::ClasseDetail,
        classes::dto::ClasseResponse,
        classes::dto::ClasseListResponse,
        classes::dto::ClasseMessageResponse,
        matieres::dto::CreateMatiereRequest,
        matieres::dto::CreateMatiereResponse,
        matieres::dto::UpdateMatiereRequest,
        matieres::dto::MatiereDetail,
        matieres::dto::MatiereResponse,
        matieres::dto::MatiereListResponse,
        matieres::dto::MatiereMessageResponse,
        notes::dto::CreateNoteRequest,
        notes::dto::CreateNoteResponse,
        notes::dto::UpdateNoteRequest,
        notes::dto::NoteResponse,
        notes::dto::NoteListResponse,
        notes::dto::NoteMessageResponse,
        paiements::dto::CreatePaiementRequest,
        paiements::dto::CreatePaiementResponse,
        paiements::dto::UpdatePaiementRequest,
        paiements::dto::PaiementResponse,
        paiements::dto::PaiementListResponse,
        paiements::dto::PaiementMessageResponse,
        offres::dto::CreateOffreRequest,
        offres::dto::CreateOffreResponse,
        offres::dto::UpdateOffreRequest,
        offres::dto::OffreResponse,
        offres::dto::OffreListResponse,
        offres::dto::OffreMessageResponse,
        candidatures::dto::CreateCandidatureRequest,
        candidatures::dto::CreateCandidatureResponse,
        candidatures::dto::UpdateCandidatureRequest,
        candidatures::dto::CandidatureResponse,
        candidatures::dto::CandidatureListResponse,
        candidatures::dto::CandidatureMessageResponse,
        emplois::dto::CreateEmploiRequest,
        emplois::dto::CreateEmploiResponse,
        emplois::dto::UpdateEmploiRequest,
        emplois::dto::EmploiResponse,
        emplois::dto::EmploiListResponse,
        emplois::dto::EmploiMessageResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Connexion, inscription et déconnexion"),
        (name = "Eleves", description = "Gestion des élèves et de leurs comptes"),
        (name = "Enseignants", description = "Gestion des enseignants"),
        (name = "Classes", description = "Gestion des classes et de leurs matières"),
        (name = "Matieres", description = "Gestion des matières"),
        (name = "Notes", description = "Gestion des notes"),
        (name = "Paiements", description = "Gestion des paiements de scolarité"),
        (name = "Offres", description = "Offres d'emploi publiées par l'école"),
        (name = "Candidatures", description = "Candidatures aux offres d'emploi"),
        (name = "Emplois du temps", description = "Gestion des emplois du temps"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
