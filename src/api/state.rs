//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{UserRepository, UserStore};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User store
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create application state around an existing repository.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Build a fresh store as described by the configuration.
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_sample_users {
            UserStore::with_sample_users(config.number_policy)
        } else {
            UserStore::new(config.number_policy)
        };

        tracing::info!(
            policy = %config.number_policy,
            seeded = config.seed_sample_users,
            "User store initialized"
        );

        Self::new(Arc::new(store))
    }
}
