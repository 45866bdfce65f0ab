//! Unified service container for Tandem
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::search::SearchService;
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Search service for query evaluation
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let search = Arc::new(SearchService::new(
            config.search.default_limit,
            config.search.max_query_length,
        ));

        Self {
            search,
            config: Arc::new(config),
        }
    }
}
