//! Record collection state behind the multi-record form.
//!
//! DESIGN
//! ======
//! The collection is mutated only through [`RecordListState::apply`] (or the
//! operations it dispatches to), which keeps a single writer. Its length stays
//! within `MIN_RECORDS..=MAX_RECORDS`; requests that would break that bound
//! are ignored rather than reported.
//!
//! Entries carry a stable id next to their record. Forms are keyed by that id
//! so a form keeps showing its own record when an earlier entry is removed and
//! the remaining indexes shift down.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use schema::CveModel;

pub use schema::{MAX_RECORDS, MIN_RECORDS};

/// One record in the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordEntry {
    pub id: u64,
    pub record: CveModel,
}

/// A mutation request against the record collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordListEvent {
    /// Synthesize one default record if the collection is empty.
    Seed,
    /// Append a default record.
    Add,
    /// Remove the record at an index.
    Remove(usize),
    /// Replace the record at an index.
    Update(usize, CveModel),
}

/// Ordered record collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordListState {
    entries: Vec<RecordEntry>,
    next_id: u64,
}

impl RecordListState {
    /// Entries in order.
    #[must_use]
    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current index of the entry with `id`.
    #[must_use]
    pub fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// The outbound batch: every record, in order.
    #[must_use]
    pub fn batch(&self) -> Vec<CveModel> {
        self.entries.iter().map(|e| e.record).collect()
    }

    /// Whether the add affordance should be shown.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_RECORDS
    }

    /// Whether remove affordances should be shown.
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.entries.len() > MIN_RECORDS
    }

    /// Synthesize one default record when the collection is empty.
    pub fn seed(&mut self) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        self.push_default();
        true
    }

    /// Append a default record unless the collection is full.
    pub fn add_record(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.push_default();
        true
    }

    /// Remove the record at `index` unless it is the last one left.
    pub fn remove_record(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Replace the record at `index`.
    pub fn update_record(&mut self, index: usize, record: CveModel) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.record = record;
        true
    }

    /// Run one event. Returns the batch to publish when the event changed the
    /// collection, `None` when it was ignored.
    pub fn apply(&mut self, event: RecordListEvent) -> Option<Vec<CveModel>> {
        let changed = match event {
            RecordListEvent::Seed => self.seed(),
            RecordListEvent::Add => self.add_record(),
            RecordListEvent::Remove(index) => self.remove_record(index),
            RecordListEvent::Update(index, record) => self.update_record(index, record),
        };
        changed.then(|| self.batch())
    }

    fn push_default(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(RecordEntry { id, record: CveModel::default() });
    }
}
