//! Core data models
//!
//! The entry record, its strongly-typed ID, and the money type.

pub mod entry;
pub mod ids;
pub mod money;

pub use entry::{Entry, EntryValidationError};
pub use ids::EntryId;
pub use money::Money;
