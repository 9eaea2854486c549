//! Workspace umbrella crate for Exemplar semantic example search.
//!
//! This crate stitches the embedding provider, the corpus store, and the
//! ranker together so callers can go from a draft application text to a
//! ranked list of similar examples with a single API entry point.
//!
//! ```no_run
//! use std::sync::Arc;
//! use exemplar::{SearchService, StubEmbedder, MemoryStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), exemplar::SearchError> {
//! let service = SearchService::new(
//!     Arc::new(StubEmbedder::default()),
//!     Arc::new(MemoryStore::new()),
//!     10,
//! );
//! let ranking = service.search("a draft cover letter").await?;
//! assert!(ranking.hits.len() <= 10);
//! # Ok(())
//! # }
//! ```

pub use corpus::{CorpusError, CorpusStore, MemoryStore, RestStore, StoreConfig};
pub use embedder::{
    ApiEmbedder, EmbedError, EmbedderConfig, EmbeddingProvider, RetryConfig, StubEmbedder,
};
pub use ranker::{rank, CorpusRecord, RankError, RankedResult, Ranking};

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while answering a search request.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The caller's input was unusable before any collaborator was invoked.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("embedding failed: {0}")]
    Embed(#[from] EmbedError),
    #[error("corpus fetch failed: {0}")]
    Corpus(#[from] CorpusError),
    #[error("ranking failed: {0}")]
    Rank(#[from] RankError),
}

/// End-to-end search over a corpus of embedded example applications.
///
/// One call to [`search`](Self::search) embeds the input text, pulls the
/// full corpus snapshot, and returns the `top_k` most similar records by
/// dot product, best first.
pub struct SearchService {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn CorpusStore>,
    top_k: usize,
}

impl SearchService {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn CorpusStore>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            store,
            top_k,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Rank the corpus against `user_application` and return the best
    /// `top_k` hits.
    ///
    /// Corpus records whose vector length differs from the query embedding
    /// are skipped (and counted in [`Ranking::skipped`]) rather than failing
    /// the request. Blank input is rejected before any network call.
    pub async fn search(&self, user_application: &str) -> Result<Ranking, SearchError> {
        if user_application.trim().is_empty() {
            return Err(SearchError::InvalidInput(
                "user_application must not be blank".into(),
            ));
        }

        let query = self.embedder.embed(user_application).await?;
        let corpus = self.store.fetch_all().await?;
        let candidates = corpus.len();

        let ranking = rank(&query, corpus, self.top_k)?;

        if ranking.skipped > 0 {
            tracing::warn!(
                skipped = ranking.skipped,
                candidates,
                "ranked corpus with dimension mismatches"
            );
        }
        tracing::debug!(
            candidates,
            hits = ranking.hits.len(),
            "search request ranked"
        );

        Ok(ranking)
    }
}
