use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;

/// Runtime configuration for the remote embedding client.
///
/// # Example
/// ```
/// use embedder::EmbedderConfig;
///
/// let cfg = EmbedderConfig {
///     model_name: "text-embedding-3-small".into(),
///     api_key: Some("sk-test".into()),
///     ..Default::default()
/// };
/// assert_eq!(cfg.timeout_secs, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedderConfig {
    /// Embeddings endpoint URL.
    pub api_url: String,
    /// Bearer token sent in the `Authorization` header when present.
    pub api_key: Option<String>,
    /// Model identifier sent with every request.
    pub model_name: String,
    /// Overall per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry behavior for transient failures.
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/embeddings".into(),
            api_key: None,
            model_name: "text-embedding-3-small".into(),
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}
