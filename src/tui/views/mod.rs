//! TUI views module
//!
//! The entry form, the entry table, the running total, and the status bar.

pub mod entries;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{App, InputMode};
use super::form;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, &app.form, app.input_mode == InputMode::Form, layout.form);
    entries::render(frame, app, layout.entries);
    render_total(frame, app, layout.total);
    status_bar::render(frame, app, layout.status_bar);
}

/// Render the running total, right-aligned with a currency label
fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Total Expenses: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("IDR {}", app.total()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .right_aligned();

    frame.render_widget(Paragraph::new(line), area);
}
