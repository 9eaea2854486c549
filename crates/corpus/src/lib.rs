//! Exemplar corpus stores.
//!
//! A corpus store hands back the full set of embedded documents a search
//! request ranks against. Two implementations of [`CorpusStore`] ship with
//! the crate:
//!
//! - [`RestStore`] - fetches rows from a PostgREST endpoint
//!   (`GET {base}/rest/v1/{table}?select=id,application_text,vector`).
//!   Vector columns arrive either as JSON arrays or as pgvector text
//!   literals like `"[0.1,0.2]"`; both are decoded.
//! - [`MemoryStore`] - a seedable in-memory store for tests and offline
//!   runs.
//!
//! [`StoreConfig::build`] selects the implementation at runtime.

mod memory;
mod rest;
mod store;

pub use crate::memory::MemoryStore;
pub use crate::rest::RestStore;
pub use crate::store::{CorpusStore, StoreConfig};

use thiserror::Error;

/// Errors surfaced by corpus stores.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// Transport-level failure reaching the store.
    #[error("corpus request failed: {0}")]
    Http(String),
    /// The store answered with a non-success status or is otherwise unusable.
    #[error("corpus store error: {0}")]
    Store(String),
    /// A row could not be decoded into a corpus record.
    #[error("corpus decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_detail() {
        let err = CorpusError::Http("connection refused".into());
        assert!(err.to_string().contains("connection refused"));

        let err = CorpusError::Decode("vector column missing".into());
        assert!(err.to_string().contains("vector column missing"));
    }
}
