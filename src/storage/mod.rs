//! File-backed entry store
//!
//! `EntryStore` owns the ordered in-memory sequence of entries and mirrors
//! it to the backing CSV file after every mutation. Insertion order, display
//! order, and persisted row order are the same thing; duplicates are
//! permitted. The store assumes a single process instance per data file, so
//! there is no locking.

pub mod csv_file;

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Entry, EntryId, Money};

/// Fixed name of the backing file, in the process's working directory
pub const STORE_FILE: &str = "expenses.csv";

/// The ordered, file-backed collection of expense entries
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Create an empty store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Populate the store from the backing file.
    ///
    /// An absent file leaves the store empty and is not an error. A
    /// malformed row surfaces an error; rows read before the failure stay in
    /// the store.
    pub fn load(&mut self) -> ExpenseResult<()> {
        self.entries.clear();
        csv_file::read_entries(&self.path, &mut self.entries)
    }

    /// Rewrite the backing file from the store's current contents
    pub fn save(&self) -> ExpenseResult<()> {
        csv_file::write_entries_atomic(&self.path, &self.entries)
    }

    /// Append an entry and persist the full store
    pub fn add(&mut self, entry: Entry) -> ExpenseResult<()> {
        self.entries.push(entry);
        self.save()
    }

    /// Remove the entry with the given id and persist the full store.
    ///
    /// Removal is by identity, so a stale display index can never delete a
    /// different entry than the one the user selected.
    pub fn remove(&mut self, id: EntryId) -> ExpenseResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::entry_not_found(id.to_string()))?;

        let entry = self.entries.remove(index);
        self.save()?;
        Ok(entry)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Sum of every entry's amount, recomputed in full
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
