use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One stored example available for ranking.
///
/// Records arrive as a read-only snapshot from the corpus store; the ranker
/// trusts identifier uniqueness and mutates nothing. The `vector` must have
/// the same length as the query vector to participate in a ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusRecord {
    /// Opaque unique identifier within one corpus snapshot.
    pub id: String,
    /// The stored example text.
    pub text: String,
    /// Pre-computed embedding for the text.
    pub vector: Vec<f32>,
}

impl CorpusRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            vector,
        }
    }
}

/// One ranked hit. Transient: exists only for the duration of one response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedResult {
    /// Identifier of the matched corpus record.
    pub id: String,
    /// Text of the matched corpus record.
    pub text: String,
    /// Raw dot-product similarity against the query vector.
    pub similarity: f32,
}

/// Outcome of one ranking pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Top-K hits, similarity descending; ties keep corpus fetch order.
    pub hits: Vec<RankedResult>,
    /// Records excluded because their vector length did not match the query.
    pub skipped: usize,
}

/// Errors produced by the ranking core.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RankError {
    /// The query vector was empty; nothing can be scored against it.
    #[error("query vector must not be empty")]
    EmptyQuery,
}
