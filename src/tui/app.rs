//! Application state for the TUI
//!
//! `App` is the explicit context object every handler operates on: the
//! file-backed store, the entry form, the list selection, and the current
//! status message. All state changes flow through the methods here so the
//! operations are testable without a terminal.

use std::time::Instant;

use ratatui::style::Color;

use crate::models::Money;
use crate::storage::EntryStore;

use super::form::EntryFormState;

/// Which part of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Typing into the entry form
    #[default]
    Form,
    /// Navigating the entry list
    List,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    /// Display color for this severity
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    created_at: Instant,
    duration_secs: u64,
}

impl StatusMessage {
    /// Create a new status message; errors and warnings linger longer
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        let duration_secs = match kind {
            StatusKind::Warning | StatusKind::Error => 6,
            StatusKind::Info | StatusKind::Success => 3,
        };
        Self {
            text: text.into(),
            kind,
            created_at: Instant::now(),
            duration_secs,
        }
    }

    /// Check whether the message should be dropped
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Main application state
pub struct App {
    /// The file-backed entry store
    pub store: EntryStore,

    /// Entry form state
    pub form: EntryFormState,

    /// Current input mode
    pub input_mode: InputMode,

    /// Selected row in the entry list (zero or one)
    pub selected: Option<usize>,

    /// Status message to display
    pub status: Option<StatusMessage>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App around a loaded store
    pub fn new(store: EntryStore) -> Self {
        Self {
            store,
            form: EntryFormState::new(),
            input_mode: InputMode::default(),
            selected: None,
            status: None,
            should_quit: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage::new(text, kind));
    }

    /// Drop the status message once it has expired
    pub fn tick(&mut self) {
        if self.status.as_ref().is_some_and(|s| s.is_expired()) {
            self.status = None;
        }
    }

    /// Running total over every entry in the store
    pub fn total(&self) -> Money {
        self.store.total()
    }

    /// Validate the form and append the resulting entry to the store.
    ///
    /// On success the store is persisted, the form is cleared, and the new
    /// row becomes visible. On failure the specific field error is surfaced
    /// and store, file, and form contents are left unchanged.
    pub fn add_entry(&mut self) {
        let entry = match self.form.build_entry() {
            Ok(entry) => entry,
            Err(err) => {
                self.set_status(err.to_string(), StatusKind::Error);
                return;
            }
        };

        let label = entry.description.clone();
        if let Err(err) = self.store.add(entry) {
            self.set_status(err.to_string(), StatusKind::Error);
            return;
        }

        self.form.clear();
        self.set_status(format!("Added \"{}\"", label), StatusKind::Success);
    }

    /// Delete the currently selected entry, if any.
    ///
    /// With no selection this is a warning, not an error, and nothing
    /// changes. Deletion resolves the selected row to its entry id and
    /// removes by identity.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected else {
            self.set_status("Select an entry to delete", StatusKind::Warning);
            return;
        };

        let Some(entry) = self.store.entries().get(index) else {
            self.selected = None;
            self.set_status("Select an entry to delete", StatusKind::Warning);
            return;
        };

        let id = entry.id;
        match self.store.remove(id) {
            Ok(removed) => {
                self.clamp_selection();
                self.set_status(
                    format!("Deleted \"{}\"", removed.description),
                    StatusKind::Success,
                );
            }
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    /// Move the list selection down, starting at the first row
    pub fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(self.store.len() - 1),
        });
    }

    /// Move the list selection up, starting at the first row
    pub fn select_prev(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Keep the selection inside the list after a removal
    fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.store.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }

    /// Switch keystrokes to the entry form
    pub fn focus_form(&mut self) {
        self.input_mode = InputMode::Form;
    }

    /// Switch keystrokes to the entry list
    pub fn focus_list(&mut self) {
        self.input_mode = InputMode::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::STORE_FILE;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = EntryStore::new(temp_dir.path().join(STORE_FILE));
        store.load().unwrap();
        (temp_dir, App::new(store))
    }

    fn fill_form(app: &mut App, date: &str, description: &str, amount: &str, category: &str) {
        app.form.date_input = app.form.date_input.clone().content(date);
        app.form.description_input = app.form.description_input.clone().content(description);
        app.form.amount_input = app.form.amount_input.clone().content(amount);
        app.form.category_input = app.form.category_input.clone().content(category);
    }

    #[test]
    fn test_add_entry_success_clears_form() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "50000", "Food");

        app.add_entry();

        assert_eq!(app.store.len(), 1);
        assert!(app.form.description_input.value().is_empty());
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Success);
        assert_eq!(app.total().to_string(), "50000.00");
    }

    #[test]
    fn test_add_entry_validation_failure_changes_nothing() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "abc", "Food");

        app.add_entry();

        assert_eq!(app.store.len(), 0);
        assert!(!app.store.path().exists());
        // Form contents are preserved so the user can correct and retry
        assert_eq!(app.form.amount_input.value(), "abc");
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("amount"));
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "50000", "Food");
        app.add_entry();

        app.delete_selected();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Warning);
    }

    #[test]
    fn test_delete_selected_removes_exactly_that_entry() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "50000", "Food");
        app.add_entry();
        fill_form(&mut app, "2024-03-02", "Bus", "15000", "Transport");
        app.add_entry();

        app.selected = Some(0);
        app.delete_selected();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.entries()[0].description, "Bus");
        assert_eq!(app.total().to_string(), "15000.00");
        // Selection stays on the row that moved up
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_delete_last_entry_clears_selection() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "50000", "Food");
        app.add_entry();

        app.selected = Some(0);
        app.delete_selected();

        assert!(app.store.is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_selection_movement() {
        let (_temp_dir, mut app) = create_test_app();
        app.select_next();
        assert_eq!(app.selected, None); // empty list

        fill_form(&mut app, "2024-03-01", "A", "100", "X");
        app.add_entry();
        fill_form(&mut app, "2024-03-02", "B", "200", "X");
        app.add_entry();

        app.select_next();
        assert_eq!(app.selected, Some(0));
        app.select_next();
        assert_eq!(app.selected, Some(1));
        app.select_next();
        assert_eq!(app.selected, Some(1)); // clamped at the end
        app.select_prev();
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_total_tracks_adds() {
        let (_temp_dir, mut app) = create_test_app();
        fill_form(&mut app, "2024-03-01", "Lunch", "50000", "Food");
        app.add_entry();
        fill_form(&mut app, "2024-03-02", "Bus", "15000", "Transport");
        app.add_entry();

        assert_eq!(app.total().to_string(), "65000.00");
    }
}
