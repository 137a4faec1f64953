//! Bounded, most-recent-first history of completed generations.

use crate::core::HistoryRecord;
use crate::session::SessionHandle;

/// Default number of history records retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Ordered sequence of history records, newest first, capped at a fixed
/// capacity. Appending past the cap evicts the oldest entry; records are
/// never updated in place.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    capacity: usize,
    records: Vec<HistoryRecord>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStore {
    /// Creates an empty store with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    /// Prepends a record, then truncates to capacity.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
    }

    /// All records, newest first.
    #[must_use]
    pub fn all(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Re-hydrates the session from a record without re-running generation.
    ///
    /// Copies prompt, artifact, and reports; the in-progress flag is left
    /// untouched.
    pub fn load_into(session: &SessionHandle, record: &HistoryRecord) {
        let mut session = session.write();
        session.prompt = record.prompt.clone();
        session.artifact = record.artifact.clone();
        session.reports = record.reports.clone();
    }
}
