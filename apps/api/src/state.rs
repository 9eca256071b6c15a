use std::sync::Arc;

use crate::accounts::{AccountRegistry, PlaceholderTokenIssuer};
use crate::config::Config;
use crate::jobs::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after seeding; shared without locking.
    pub jobs: Arc<JobStore>,
    pub accounts: Arc<AccountRegistry>,
}

impl AppState {
    /// Seeded job store and an empty registry wired to the placeholder token issuer.
    pub fn new(config: &Config) -> Self {
        let issuer = Arc::new(PlaceholderTokenIssuer::new(config.placeholder_token.clone()));
        AppState {
            jobs: Arc::new(JobStore::seeded()),
            accounts: Arc::new(AccountRegistry::new(issuer)),
        }
    }
}
