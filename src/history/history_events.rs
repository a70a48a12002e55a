//! History popup event handling

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::App;

/// Handle key events while the history popup is open.
/// Returns true if the event was consumed.
pub fn handle_history_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.history.is_visible() {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.history.close();
            true
        }

        // Enter recalls the selected entry into the find bar.
        KeyCode::Enter => {
            if let Some(entry) = app.history.selected_entry().map(String::from) {
                app.search.set_pattern(&entry);
            }
            app.history.close();
            true
        }

        KeyCode::Down => {
            app.history.select_next();
            true
        }
        KeyCode::Up => {
            app.history.select_previous();
            true
        }

        // Everything else edits the filter.
        _ => {
            let input = Input::from(key);
            if app.history.filter_textarea_mut().input(input) {
                app.history.on_filter_input_changed();
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use ratatui::crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_closed_popup_consumes_nothing() {
        let mut app = test_app();
        assert!(!handle_history_key(&mut app, press(KeyCode::Enter)));
    }

    #[test]
    fn test_escape_closes_popup() {
        let mut app = test_app();
        app.history.open();
        assert!(handle_history_key(&mut app, press(KeyCode::Esc)));
        assert!(!app.history.is_visible());
    }

    #[test]
    fn test_enter_recalls_selection() {
        let mut app = test_app();
        app.history.record("Shot02");
        app.history.open();

        handle_history_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.search.pattern(), "Shot02");
        assert!(!app.history.is_visible());
    }

    #[test]
    fn test_typing_filters_entries() {
        let mut app = test_app();
        app.history.record("approved");
        app.history.record("Shot02");
        app.history.open();

        handle_history_key(&mut app, press(KeyCode::Char('a')));
        handle_history_key(&mut app, press(KeyCode::Char('p')));
        assert_eq!(app.history.filtered_count(), 1);
        assert_eq!(app.history.selected_entry(), Some("approved"));
    }
}
