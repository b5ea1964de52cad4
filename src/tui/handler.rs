//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the entry list depending on the
//! current input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Form => handle_form_key(app, key),
        InputMode::List => handle_list_key(app, key),
    }

    Ok(())
}

/// Handle keys while typing into the entry form
fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.add_entry(),
        KeyCode::Tab | KeyCode::Down => app.form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.prev_field(),
        KeyCode::Esc => app.focus_list(),

        KeyCode::Char(c) => app.form.focused_input().insert(c),
        KeyCode::Backspace => app.form.focused_input().backspace(),
        KeyCode::Delete => app.form.focused_input().delete(),
        KeyCode::Left => app.form.focused_input().move_left(),
        KeyCode::Right => app.form.focused_input().move_right(),
        KeyCode::Home => app.form.focused_input().move_start(),
        KeyCode::End => app.form.focused_input().move_end(),

        _ => {}
    }
}

/// Handle keys while navigating the entry list
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.focus_form(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{EntryStore, STORE_FILE};
    use crate::tui::app::StatusKind;
    use tempfile::TempDir;

    fn create_test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = EntryStore::new(temp_dir.path().join(STORE_FILE));
        store.load().unwrap();
        (temp_dir, App::new(store))
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(app, Event::Key(key)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.date_input.clear();
        type_text(&mut app, "2024-03-01");
        assert_eq!(app.form.date_input.value(), "2024-03-01");

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lunch");
        assert_eq!(app.form.description_input.value(), "Lunch");
    }

    #[test]
    fn test_enter_adds_entry_end_to_end() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.date_input.clear();
        type_text(&mut app, "2024-03-01");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "50000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.entries()[0].description, "Lunch");
    }

    #[test]
    fn test_enter_with_bad_amount_reports_error() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.date_input.clear();
        type_text(&mut app, "2024-03-01");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 0);
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
    }

    #[test]
    fn test_mode_switching_and_quit() {
        let (_temp_dir, mut app) = create_test_app();
        assert_eq!(app.input_mode, InputMode::Form);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::List);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.input_mode, InputMode::Form);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_key_in_list_mode() {
        let (_temp_dir, mut app) = create_test_app();
        app.form.date_input.clear();
        type_text(&mut app, "2024-03-01");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "50000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Food");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));

        assert!(app.store.is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_in_form_mode() {
        let (_temp_dir, mut app) = create_test_app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(key)).unwrap();
        assert!(app.should_quit);
    }
}
