use std::sync::Arc;

use exemplar::SearchService;

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Search service (shared across requests)
    pub service: Arc<SearchService>,
}

impl ServerState {
    /// Create new server state, building the embedding provider and corpus
    /// store from configuration.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let embedder = config.embedder.build()?;
        let store = config.corpus.build()?;
        let service = Arc::new(SearchService::new(embedder, store, config.top_k));

        Ok(Self {
            config: Arc::new(config),
            service,
        })
    }

    /// Create state around an existing service. Used by tests to inject
    /// stub collaborators.
    pub fn with_service(config: ServerConfig, service: Arc<SearchService>) -> Self {
        Self {
            config: Arc::new(config),
            service,
        }
    }
}
