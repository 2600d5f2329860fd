//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::services::PropertyService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Property service implementation
    pub service: Arc<dyn PropertyService>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(service: Arc<dyn PropertyService>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner { service, config }),
        }
    }

    /// Get a reference to the property service
    pub fn service(&self) -> &dyn PropertyService {
        self.inner.service.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
