//! Exemplar embedding provider.
//!
//! Turns free text into a fixed-length embedding vector. Two implementations
//! of [`EmbeddingProvider`] ship with the crate:
//!
//! - [`ApiEmbedder`] - calls a remote embeddings endpoint speaking the
//!   OpenAI wire format (`{"input": ..., "model": ...}` in,
//!   `{"data": [{"embedding": [..]}]}` out). Transient failures (timeouts,
//!   connection resets, HTTP 408/429/5xx) are retried with exponential
//!   backoff; everything else fails fast.
//! - [`StubEmbedder`] - deterministic hash-derived vectors for tests and
//!   offline runs. Same text, same vector, every time.
//!
//! All configuration is explicit: endpoint, credentials, and model name come
//! in through [`EmbedderConfig`] at construction. Nothing here reads the
//! process environment at request time.
//!
//! ## Example
//!
//! ```no_run
//! use embedder::{ApiEmbedder, EmbedderConfig, EmbeddingProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = EmbedderConfig {
//!         api_key: Some("sk-...".into()),
//!         ..EmbedderConfig::default()
//!     };
//!     let embedder = ApiEmbedder::new(cfg)?;
//!     let vector = embedder.embed("a draft job application").await?;
//!     assert!(!vector.is_empty());
//!     Ok(())
//! }
//! ```

mod api;
mod config;
mod error;
mod retry;
mod stub;

pub use crate::api::ApiEmbedder;
pub use crate::config::EmbedderConfig;
pub use crate::error::EmbedError;
pub use crate::retry::{is_retryable_error, RetryConfig};
pub use crate::stub::StubEmbedder;

use async_trait::async_trait;

/// Converts free text into a fixed-length embedding vector.
///
/// Implementations must be deterministic with respect to their own state:
/// the same provider given the same text produces vectors of one fixed
/// dimension so all embeddings in a ranking pass are comparable.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}
