use std::sync::Arc;

use async_trait::async_trait;
use ranker::CorpusRecord;

use crate::{CorpusError, MemoryStore, RestStore};

/// Trait for a source of embedded corpus documents.
///
/// `fetch_all` returns the complete corpus snapshot for one ranking pass.
/// Record order is whatever the store produced it in; the ranker relies on
/// that order to break score ties deterministically.
#[async_trait]
pub trait CorpusStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError>;
}

/// Configuration for selecting and building a corpus store.
///
/// # Example
/// ```
/// use corpus::StoreConfig;
///
/// // In-memory (for testing)
/// let config = StoreConfig::in_memory();
///
/// // PostgREST-backed
/// let config = StoreConfig::rest(
///     "https://project.supabase.co",
///     "service-role-key",
///     "example_vectors",
/// );
/// let store = config.build().unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub enum StoreConfig {
    /// Fetch rows from a PostgREST endpoint.
    Rest {
        base_url: String,
        api_key: String,
        table: String,
    },
    /// Use an in-memory store. This is useful for testing.
    #[default]
    InMemory,
}

impl StoreConfig {
    /// Create an in-memory store configuration.
    pub fn in_memory() -> Self {
        StoreConfig::InMemory
    }

    /// Create a PostgREST store configuration.
    pub fn rest(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        StoreConfig::Rest {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: table.into(),
        }
    }

    /// Build the store based on the configuration.
    pub fn build(&self) -> Result<Arc<dyn CorpusStore>, CorpusError> {
        match self {
            StoreConfig::InMemory => Ok(Arc::new(MemoryStore::new())),
            StoreConfig::Rest {
                base_url,
                api_key,
                table,
            } => Ok(Arc::new(RestStore::new(base_url, api_key, table)?)),
        }
    }
}
