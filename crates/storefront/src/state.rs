//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::{InMemoryProductRepository, ProductRepository};
use crate::config::StorefrontConfig;
use crate::events::EventStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog repository, the event store, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Arc<dyn ProductRepository>,
    events: EventStore,
}

impl AppState {
    /// Create application state with the seeded in-memory catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(InMemoryProductRepository::seeded());
        Self::with_catalog(config, catalog)
    }

    /// Create application state over an explicit catalog repository.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Arc<dyn ProductRepository>) -> Self {
        let events = EventStore::new(config.events_forward.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                events,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog repository.
    #[must_use]
    pub fn catalog(&self) -> &dyn ProductRepository {
        self.inner.catalog.as_ref()
    }

    /// Get a reference to the event store.
    #[must_use]
    pub fn events(&self) -> &EventStore {
        &self.inner.events
    }
}
