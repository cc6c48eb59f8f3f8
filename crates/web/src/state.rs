//! Application state shared across handlers.

use std::sync::Arc;

use vetx_store::Store;

use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives every handler the
/// same store handle; no handler holds state of its own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: Store,
}

impl AppState {
    /// Create a new application state around an already-seeded store.
    #[must_use]
    pub fn new(config: SiteConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the admin store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}
