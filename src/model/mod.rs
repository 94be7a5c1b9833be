//! Pure data structures (entities and payload DTOs) implementing the
//! [`Resource`](crate::resource::Resource) trait.

pub mod domaine;
pub mod equipe;
pub mod essai;
pub mod etudiant;

pub use domaine::*;
pub use equipe::*;
pub use essai::*;
pub use etudiant::*;
