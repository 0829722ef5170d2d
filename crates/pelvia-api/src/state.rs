use std::sync::Arc;

use pelvia_rules::catalog::{Catalog, LabelLookup};

use crate::config::ApiConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub labels: Arc<dyn LabelLookup>,
}

impl AppState {
    /// State with the built-in Spanish label catalog.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_labels(config, Arc::new(Catalog))
    }

    pub fn with_labels(config: ApiConfig, labels: Arc<dyn LabelLookup>) -> Self {
        Self {
            config: Arc::new(config),
            labels,
        }
    }
}
