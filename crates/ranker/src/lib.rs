//! Exemplar similarity ranking core.
//!
//! Given a query embedding and a snapshot of corpus records, this crate
//! produces a deterministic, ordered top-K list of the records most similar
//! to the query. Similarity is the raw dot product of the two vectors. No
//! magnitude normalization is applied, so scores are comparable only within
//! a single ranking pass over one corpus snapshot.
//!
//! The crate is pure: no I/O, no async, no shared state. The caller
//! materializes the query vector and the corpus snapshot first (see the
//! `embedder` and `corpus` crates), then hands both to [`rank`]. The linear
//! scan sits behind this one entry point, so an indexed nearest-neighbor
//! structure can replace it later without touching callers.
//!
//! ## Example
//!
//! ```
//! use ranker::{rank, CorpusRecord};
//!
//! let corpus = vec![
//!     CorpusRecord::new("a", "first example", vec![1.0, 0.0]),
//!     CorpusRecord::new("b", "second example", vec![0.0, 1.0]),
//! ];
//!
//! let ranking = rank(&[1.0, 0.5], corpus, 1).unwrap();
//! assert_eq!(ranking.hits[0].id, "a");
//! ```

mod rank;
mod types;

pub use crate::rank::rank;
pub use crate::types::{CorpusRecord, RankError, RankedResult, Ranking};
