pub mod sea_orm_active_enums;

pub mod candidature;
pub mod classe;
pub mod classe_matiere;
pub mod eleve;
pub mod emploi_du_temps;
pub mod enseignant;
pub mod matiere;
pub mod matiere_enseignant;
pub mod note;
pub mod offre;
pub mod paiement;
pub mod session;
pub mod utilisateur;
