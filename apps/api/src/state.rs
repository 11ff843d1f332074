use std::sync::Arc;

use crate::config::Config;
use crate::insights::geolocation::Geocoder;
use crate::llm_client::LlmClient;
use crate::store::{KeyValueStore, ScopedStore, SessionScope};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub geocoder: Geocoder,
    /// Pluggable key-value backend. Redis when configured, memory otherwise.
    pub store: Arc<dyn KeyValueStore>,
    pub config: Config,
}

impl AppState {
    /// The store view for one caller's session.
    pub fn scoped_store(&self, scope: &SessionScope) -> ScopedStore {
        ScopedStore::new(self.store.clone(), scope.0.clone())
    }
}
