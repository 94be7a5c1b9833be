//! Derived statistics over the student cache.

use super::core::ResourceStore;
use crate::model::{Etudiant, Role};

/// Role breakdown of the student collection.
///
/// Computed, never stored: each call recounts the current cache, so there is
/// nothing to invalidate and repeated calls without an intervening mutation
/// return identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistiques {
    pub total: usize,
    pub createurs: usize,
    pub membres: usize,
    pub pourcentage_createurs: f64,
    pub pourcentage_membres: f64,
}

impl ResourceStore<Etudiant> {
    /// Counts students per role with each role's share of the whole. An
    /// empty cache yields zero percentages rather than NaN.
    pub fn statistiques(&self) -> Statistiques {
        let items = self.items();
        let total = items.len();
        let createurs = items.iter().filter(|e| e.role == Role::Createur).count();
        let membres = items.iter().filter(|e| e.role == Role::Membre).count();

        let share = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            }
        };

        Statistiques {
            total,
            createurs,
            membres,
            pourcentage_createurs: share(createurs),
            pourcentage_membres: share(membres),
        }
    }
}
