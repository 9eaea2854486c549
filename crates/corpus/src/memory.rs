use std::sync::RwLock;

use async_trait::async_trait;
use ranker::CorpusRecord;

use crate::{CorpusError, CorpusStore};

/// An in-memory store using a `RwLock` around a `Vec`.
///
/// Records are returned in insertion order.
pub struct MemoryStore {
    records: RwLock<Vec<CorpusRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<CorpusRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a record to the store.
    pub fn insert(&self, record: CorpusRecord) -> Result<(), CorpusError> {
        self.records
            .write()
            .map_err(|_| CorpusError::Store("poisoned lock".into()))?
            .push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CorpusStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        let guard = self
            .records
            .read()
            .map_err(|_| CorpusError::Store("poisoned lock".into()))?;
        Ok(guard.clone())
    }
}
