//! Exemplar Server - HTTP REST API for semantic example search
//!
//! This crate provides the HTTP server that exposes Exemplar's search
//! functionality via a REST API:
//!
//! - **Example Search**: POST a draft application, get back the most
//!   similar stored examples ranked by embedding similarity
//! - **Health**: Liveness and readiness probes
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: Flat `{"error": "..."}` JSON error responses
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /api/v1/search` - Rank stored examples against a draft application
//!
//! # Error Contract
//!
//! - `400` - `user_application` missing or blank
//! - `404` - unknown route
//! - `405` - known route, wrong HTTP method
//! - `500` - embedding provider or corpus store failure (details logged,
//!   never returned to the caller)

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{CorpusSettings, EmbedderSettings, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
