//! Find bar event handling
//!
//! Keyboard events for the find bar: pattern editing, confirm-then-navigate
//! Enter handling, and recent-search cycling.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[cfg(debug_assertions)]
use log::debug;

use crate::app::{App, Focus};

/// Handle key events while the find bar has focus.
/// Returns true if the event was consumed.
pub fn handle_find_bar_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        // Escape backs out of a confirmed search first, then clears the bar.
        KeyCode::Esc => {
            if app.search.is_confirmed() {
                app.search.unconfirm();
            } else {
                app.search.set_pattern("");
                app.history.reset_cycling();
            }
            true
        }

        // Enter runs the search (first press) or navigates to the next
        // match (subsequent presses).
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            if !app.search.is_confirmed() {
                app.run_search();
                app.search.confirm();
            } else {
                app.find_next();
            }
            true
        }

        // Shift+Enter: same, but navigates backward once confirmed.
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            if !app.search.is_confirmed() {
                app.run_search();
                app.search.confirm();
            } else {
                app.find_previous();
            }
            true
        }

        // Up/Down cycle through recent searches in place.
        KeyCode::Up => {
            if let Some(entry) = app.history.cycle_previous() {
                #[cfg(debug_assertions)]
                debug!("Recalled recent search '{}'", entry);
                app.search.set_pattern(&entry);
            }
            true
        }
        KeyCode::Down => {
            match app.history.cycle_next() {
                Some(entry) => app.search.set_pattern(&entry),
                // Cycled past the most recent entry: back to an empty bar.
                None => app.search.set_pattern(""),
            }
            true
        }

        // Tab moves focus to the results table.
        KeyCode::Tab => {
            app.focus = Focus::Results;
            true
        }

        // Everything else edits the pattern.
        _ => {
            app.search.search_textarea_mut().input(key);
            app.search.unconfirm();
            app.history.reset_cycling();
            true
        }
    }
}
