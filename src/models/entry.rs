//! Expense entry model
//!
//! An entry records one expense: date, description, amount, and a free-text
//! category. Construction from raw form text lives here as a pure function
//! so validation is testable without any display surface.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use super::ids::EntryId;
use super::money::Money;

/// One recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Unique identifier (in-memory only, never persisted)
    pub id: EntryId,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Free-text category label
    pub category: String,
}

impl Entry {
    /// Create an entry from already-validated fields
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            date,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    /// Construct a valid entry from four raw text inputs, or fail with a
    /// user-facing reason.
    ///
    /// Fields are checked in order date, description, amount, category; the
    /// first failing field's error is returned and later fields are not
    /// examined. Construction has no side effects; appending to the store is
    /// the caller's job.
    pub fn from_input(
        date: &str,
        description: &str,
        amount: &str,
        category: &str,
    ) -> Result<Self, EntryValidationError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| EntryValidationError::InvalidDate)?;

        if description.is_empty() {
            return Err(EntryValidationError::MissingField("Description"));
        }

        let amount = Money::parse(amount).map_err(|_| EntryValidationError::InvalidAmount)?;
        if amount.is_negative() {
            return Err(EntryValidationError::InvalidAmount);
        }

        if category.is_empty() {
            return Err(EntryValidationError::MissingField("Category"));
        }

        Ok(Self::new(date, description, amount, category))
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for entry construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryValidationError {
    /// Date text does not parse as YYYY-MM-DD
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    /// A required text field is empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Amount text is not a non-negative decimal number
    #[error("Invalid amount. Enter a non-negative number")]
    InvalidAmount,
}
