pub mod candidature_repository;
pub mod classe_repository;
pub mod eleve_repository;
pub mod emploi_repository;
pub mod enseignant_repository;
pub mod matiere_repository;
pub mod note_repository;
pub mod offre_repository;
pub mod paiement_repository;
pub mod session_repository;
pub mod utilisateur_repository;

pub use candidature_repository::{CandidatureRepository, CandidatureUpdate};
pub use classe_repository::{ClasseRepository, ClasseUpdate};
pub use eleve_repository::{EleveRepository, EleveUpdate, NouveauCompte, NouvelEleve};
pub use emploi_repository::{EmploiRepository, EmploiUpdate};
pub use enseignant_repository::{EnseignantRepository, EnseignantUpdate};
pub use matiere_repository::{MatiereRepository, MatiereUpdate};
pub use note_repository::{NoteRepository, NoteUpdate};
pub use offre_repository::{OffreRepository, OffreUpdate};
pub use paiement_repository::{PaiementRepository, PaiementUpdate};
pub use session_repository::SessionRepository;
pub use utilisateur_repository::UtilisateurRepository;
