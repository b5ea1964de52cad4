//! CSV encoding of the backing file
//!
//! The persisted format is plain comma-delimited UTF-8: a fixed header row
//! `Date,Description,Amount,Category` followed by one row per entry in store
//! order. Writes are full-file rewrites through a temp file in the same
//! directory followed by a rename, so a crash mid-write cannot leave a
//! truncated backing file behind.

use std::fs::{self, File};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Entry, Money};

/// Column order of the backing file. Fixed; must not change.
const HEADER: [&str; 4] = ["Date", "Description", "Amount", "Category"];

/// One persisted row. IDs are in-memory only and never written.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EntryRecord {
    date: NaiveDate,
    description: String,
    amount: Money,
    category: String,
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date,
            description: entry.description.clone(),
            amount: entry.amount,
            category: entry.category.clone(),
        }
    }
}

impl From<EntryRecord> for Entry {
    fn from(record: EntryRecord) -> Self {
        Entry::new(record.date, record.description, record.amount, record.category)
    }
}

/// Read entries from the backing file, appending to `entries` in file order.
///
/// An absent file is not an error and leaves `entries` untouched. A malformed
/// row (bad date, non-numeric amount, wrong column count) stops the read with
/// an error; rows parsed before the failure remain in `entries`.
pub fn read_entries(path: &Path, entries: &mut Vec<Entry>) -> ExpenseResult<()> {
    if !path.exists() {
        return Ok(());
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    for result in reader.deserialize::<EntryRecord>() {
        let record = result.map_err(|e| {
            ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        entries.push(record.into());
    }

    Ok(())
}

/// Overwrite the backing file with a header row and one row per entry.
///
/// Writes to a temp file in the same directory, syncs, then renames over the
/// target so the file is either fully replaced or not modified at all.
pub fn write_entries_atomic(path: &Path, entries: &[Entry]) -> ExpenseResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file in the same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    // The header is written explicitly so an empty store still produces it
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|e| ExpenseError::Storage(format!("Failed to write header: {}", e)))?;

    for entry in entries {
        writer
            .serialize(EntryRecord::from(entry))
            .map_err(|e| ExpenseError::Storage(format!("Failed to write entry: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| ExpenseError::Storage(format!("Failed to finish write: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
