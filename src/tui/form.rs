//! Entry form panel
//!
//! The four-field form (date, description, amount, category) that feeds the
//! add operation. Unlike a modal dialog, the form is always visible at the
//! top of the screen. Building an entry from the form delegates to the pure
//! `Entry::from_input` validation, so the form itself holds no field rules.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Entry, EntryValidationError};

use super::widgets::TextInput;

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Description,
    Amount,
    Category,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Description => Self::Date,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State of the entry form
#[derive(Debug, Clone)]
pub struct EntryFormState {
    /// Currently focused field
    pub focused_field: FormField,

    /// Date input
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Category input
    pub category_input: TextInput,
}

impl Default for EntryFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryFormState {
    /// Create a fresh form with today's date prefilled
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: FormField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it for?"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 25000.00"),
            category_input: TextInput::new()
                .label("Category")
                .placeholder("e.g. Food, Transport"),
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.date_input.focused = self.focused_field == FormField::Date;
        self.description_input.focused = self.focused_field == FormField::Description;
        self.amount_input.focused = self.focused_field == FormField::Amount;
        self.category_input.focused = self.focused_field == FormField::Category;
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Date => &mut self.date_input,
            FormField::Description => &mut self.description_input,
            FormField::Amount => &mut self.amount_input,
            FormField::Category => &mut self.category_input,
        }
    }

    /// Build an entry from the current field contents
    pub fn build_entry(&self) -> Result<Entry, EntryValidationError> {
        Entry::from_input(
            self.date_input.value(),
            self.description_input.value(),
            self.amount_input.value(),
            self.category_input.value(),
        )
    }

    /// Reset all fields, keeping focus on the date field
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Render the entry form panel
pub fn render(frame: &mut Frame, form: &EntryFormState, focused: bool, area: Rect) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" New Entry ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&form.date_input, chunks[0]);
    frame.render_widget(&form.description_input, chunks[1]);
    frame.render_widget(&form.amount_input, chunks[2]);
    frame.render_widget(&form.category_input, chunks[3]);

    if let Some(hint_area) = chunks.get(4) {
        if hint_area.height > 0 {
            let hint = Paragraph::new("Tab: next field   Enter: add entry   Esc: entry list")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, *hint_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Date.next(), FormField::Description);
        assert_eq!(FormField::Category.next(), FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Category);
    }

    #[test]
    fn test_focus_follows_field() {
        let mut form = EntryFormState::new();
        assert!(form.date_input.focused);

        form.next_field();
        assert_eq!(form.focused_field, FormField::Description);
        assert!(form.description_input.focused);
        assert!(!form.date_input.focused);

        form.prev_field();
        assert!(form.date_input.focused);
    }

    #[test]
    fn test_build_entry_from_fields() {
        let mut form = EntryFormState::new();
        form.date_input = form.date_input.clone().content("2024-01-15");
        form.description_input = form.description_input.clone().content("Coffee");
        form.amount_input = form.amount_input.clone().content("25000");
        form.category_input = form.category_input.clone().content("Food");

        let entry = form.build_entry().unwrap();
        assert_eq!(entry.description, "Coffee");
        assert_eq!(entry.amount, Money::from_hundredths(2_500_000));
    }

    #[test]
    fn test_build_entry_reports_first_invalid_field() {
        let mut form = EntryFormState::new();
        form.date_input = form.date_input.clone().content("not-a-date");
        assert_eq!(form.build_entry(), Err(EntryValidationError::InvalidDate));
    }

    #[test]
    fn test_clear_resets_fields_and_focus() {
        let mut form = EntryFormState::new();
        form.description_input = form.description_input.clone().content("Coffee");
        form.next_field();
        form.next_field();

        form.clear();
        assert_eq!(form.focused_field, FormField::Date);
        assert!(form.description_input.value().is_empty());
        // Date comes back prefilled with today
        assert!(!form.date_input.value().is_empty());
    }
}
