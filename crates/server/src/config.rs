use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use corpus::{CorpusStore, StoreConfig};
use embedder::{ApiEmbedder, EmbedderConfig, EmbeddingProvider, StubEmbedder};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Number of results returned per search
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Embedding provider settings
    #[serde(default)]
    pub embedder: EmbedderSettings,

    /// Corpus store settings
    #[serde(default)]
    pub corpus: CorpusSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            top_k: default_top_k(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            embedder: EmbedderSettings::default(),
            corpus: CorpusSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("exemplar").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("EXEMPLAR").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

/// Which embedding provider the server talks to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmbedderSettings {
    /// `"api"` for a remote endpoint, `"stub"` for the deterministic
    /// offline provider.
    #[serde(default = "default_embedder_mode")]
    pub mode: String,

    /// Embeddings endpoint URL (api mode)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the embeddings endpoint (api mode)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with every request (api mode)
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Vector dimension (stub mode)
    #[serde(default = "default_stub_dim")]
    pub stub_dim: usize,
}

impl Default for EmbedderSettings {
    fn default() -> Self {
        Self {
            mode: default_embedder_mode(),
            api_url: default_api_url(),
            api_key: None,
            model_name: default_model_name(),
            stub_dim: default_stub_dim(),
        }
    }
}

impl EmbedderSettings {
    /// Build the embedding provider based on the configuration.
    pub fn build(&self) -> ServerResult<Arc<dyn EmbeddingProvider>> {
        match self.mode.as_str() {
            "stub" => Ok(Arc::new(StubEmbedder::new(self.stub_dim))),
            "api" => {
                let cfg = EmbedderConfig {
                    api_url: self.api_url.clone(),
                    api_key: self.api_key.clone(),
                    model_name: self.model_name.clone(),
                    ..EmbedderConfig::default()
                };
                let client = ApiEmbedder::new(cfg)
                    .map_err(|e| ServerError::Config(e.to_string()))?;
                Ok(Arc::new(client))
            }
            other => Err(ServerError::Config(format!(
                "unknown embedder mode: {other:?} (expected \"api\" or \"stub\")"
            ))),
        }
    }
}

/// Which corpus store the server reads from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusSettings {
    /// `"rest"` for a PostgREST endpoint, `"memory"` for the in-memory store.
    #[serde(default = "default_corpus_mode")]
    pub mode: String,

    /// PostgREST base URL (rest mode)
    #[serde(default)]
    pub base_url: String,

    /// PostgREST service key (rest mode)
    #[serde(default)]
    pub api_key: String,

    /// Table holding the embedded examples
    #[serde(default = "default_table")]
    pub table: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            mode: default_corpus_mode(),
            base_url: String::new(),
            api_key: String::new(),
            table: default_table(),
        }
    }
}

impl CorpusSettings {
    /// Build the corpus store based on the configuration.
    pub fn build(&self) -> ServerResult<Arc<dyn CorpusStore>> {
        let store_config = match self.mode.as_str() {
            "memory" => StoreConfig::in_memory(),
            "rest" => StoreConfig::rest(&self.base_url, &self.api_key, &self.table),
            other => {
                return Err(ServerError::Config(format!(
                    "unknown corpus mode: {other:?} (expected \"rest\" or \"memory\")"
                )))
            }
        };
        store_config
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_top_k() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_embedder_mode() -> String {
    "api".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/embeddings".to_string()
}

fn default_model_name() -> String {
    "text-embedding-3-small".to_string()
}

fn default_stub_dim() -> usize {
    384
}

fn default_corpus_mode() -> String {
    "rest".to_string()
}

fn default_table() -> String {
    "example_vectors".to_string()
}
