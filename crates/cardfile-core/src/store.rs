//! Store — append-only, in-memory sequence of validated [`Record`]s.
//!
//! The store is the single source of truth for the list view; it lives for
//! the lifetime of the process and is discarded with it. There is no update
//! or delete, no capacity limit, and no uniqueness constraint — duplicate
//! submissions are allowed and keep their own positions.

use std::sync::RwLock;

use crate::types::Record;

/// Append-only container of validated records, in insertion order.
///
/// Owned by the composition root and passed to consumers explicitly; nothing
/// here is global. A single reader-writer lock is all the coordination the
/// access pattern needs (rare, small, append-only writes), and reads hand out
/// snapshots so a render pass is never affected by a concurrent append.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<Vec<Record>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated record to the end of the sequence. Never fails.
    pub fn append(&self, record: Record) {
        let mut records = self.records.write().expect("record store lock poisoned");
        records.push(record);
        tracing::debug!(total = records.len(), "record appended");
    }

    /// Snapshot of the full sequence in insertion order.
    ///
    /// The returned vector is detached from the store: appends after the
    /// snapshot was taken are not reflected in it.
    pub fn all(&self) -> Vec<Record> {
        self.records
            .read()
            .expect("record store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .expect("record store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
