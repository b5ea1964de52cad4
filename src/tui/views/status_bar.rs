//! Status bar view
//!
//! Shows key hints for the current input mode and the latest status message.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.input_mode {
        InputMode::Form => " Tab:Next field  Enter:Add  Esc:List ",
        InputMode::List => " j/k:Move  d:Delete  a:Form  q:Quit ",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    if let Some(ref status) = app.status {
        spans.push(Span::raw("│ "));
        spans.push(Span::styled(
            status.text.as_str(),
            Style::default().fg(status.kind.color()),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
