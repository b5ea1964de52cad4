//! Terminal user interface module
//!
//! A full-screen ratatui interface: a four-field entry form, the expense
//! table, the running total, and a status bar for errors and warnings.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
