//! Shared bearer-token state.

use std::sync::RwLock;
use tracing::info;

type EvictionHook = Box<dyn Fn() + Send + Sync>;

/// The persisted session the transport reads its bearer token from.
///
/// One `Session` is shared (via `Arc`) between the transport and the
/// embedding application. The application sets the token after login and
/// registers an eviction hook; the transport clears the token and fires the
/// hook when the server answers 401. The hook is where the application
/// forces navigation back to its login entry point — that side effect is
/// owned here, not by the stores, so in-flight store operations still settle
/// into their failed state when it happens.
#[derive(Default)]
pub struct Session {
    token: RwLock<Option<String>>,
    on_evicted: RwLock<Option<EvictionHook>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the bearer token for subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Registers the hook fired when the session is evicted.
    pub fn on_evicted(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_evicted.write().unwrap() = Some(Box::new(hook));
    }

    /// Clears the token and fires the eviction hook. Called by the transport
    /// on an unauthorized response; idempotent.
    pub fn evict(&self) {
        info!("session evicted");
        *self.token.write().unwrap() = None;
        if let Some(hook) = self.on_evicted.read().unwrap().as_ref() {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn evict_clears_token_and_fires_hook() {
        let session = Session::new();
        session.set_token("jwt-abc");
        assert!(session.is_authenticated());

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        session.on_evicted(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        session.evict();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // Evicting an already-empty session is harmless.
        session.evict();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }
}
