//! Terminal-based personal expense tracker
//!
//! Records, lists, deletes, and totals expense entries, persisted to a
//! comma-delimited text file (`expenses.csv` in the working directory) that
//! is fully rewritten after every mutation.
//!
//! # Architecture
//!
//! - `models`: the entry record, its ID, and the money type
//! - `storage`: the file-backed entry store and its CSV encoding
//! - `error`: custom error types
//! - `tui`: the interactive terminal interface

pub mod error;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
