//! Entry list view
//!
//! Shows every entry in store order as a four-column table. The highlighted
//! row is the current selection for the delete operation; display order and
//! store order are always the same.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the entry table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.input_mode == InputMode::List;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Expenses ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.store.is_empty() {
        let text = Paragraph::new("No expenses recorded. Fill the form and press Enter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Description
        Constraint::Length(14), // Amount
        Constraint::Length(16), // Category
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .store
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.date.format("%Y-%m-%d").to_string()),
                Cell::from(truncate(&entry.description, 40)),
                Cell::from(entry.amount.to_string())
                    .style(Style::default().fg(Color::Red)),
                Cell::from(truncate(&entry.category, 16)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(app.selected);

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
