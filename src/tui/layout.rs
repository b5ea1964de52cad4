//! Layout definitions for the TUI
//!
//! The screen is a single vertical stack: entry form, entry table, running
//! total, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Entry form panel at the top
    pub form: Rect,
    /// Entry table
    pub entries: Rect,
    /// Running total line
    pub total: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from the available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Form (4 fields + hint + borders)
                Constraint::Min(4),    // Entry table
                Constraint::Length(1), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            entries: chunks[1],
            total: chunks[2],
            status_bar: chunks[3],
        }
    }
}
