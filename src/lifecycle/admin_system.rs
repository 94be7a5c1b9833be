use std::sync::Arc;

use tracing::info;

use crate::api::Transport;
use crate::model::{Domaine, Equipe, Essai, Etudiant};
use crate::store::ResourceStore;

/// The four resource stores of the admin console, wired over one shared
/// transport.
///
/// `AdminSystem` replaces implicit module-level singletons with explicit
/// ownership: the application builds one over
/// [`HttpTransport`](crate::api::HttpTransport), tests build isolated
/// systems over [`MockTransport`](crate::store::MockTransport), and nothing
/// reaches for global state.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(Session::new());
/// let transport = Arc::new(HttpTransport::new("http://localhost:8000", session)?);
/// let system = AdminSystem::new(transport);
///
/// system.domaines.list().await?;
/// let stats = system.etudiants.statistiques();
/// ```
pub struct AdminSystem {
    /// Store for the domain collection (the only one with a count endpoint).
    pub domaines: ResourceStore<Domaine>,

    /// Store for the student collection (carries the role statistics).
    pub etudiants: ResourceStore<Etudiant>,

    /// Store for the team collection.
    pub equipes: ResourceStore<Equipe>,

    /// Store for the trial collection.
    pub essais: ResourceStore<Essai>,
}

impl AdminSystem {
    /// Builds all four stores over the injected transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        info!("wiring resource stores");
        Self {
            domaines: ResourceStore::new(transport.clone()),
            etudiants: ResourceStore::new(transport.clone()),
            equipes: ResourceStore::new(transport.clone()),
            essais: ResourceStore::new(transport),
        }
    }
}
