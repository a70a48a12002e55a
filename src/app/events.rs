use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::clipboard;
use crate::history::history_events;
use crate::search::search_events;

use super::state::{App, Focus};

/// Timeout for event polling - allows periodic UI refresh
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            // Check that it's a key press event to avoid duplicates
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
            self.mark_dirty();
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The history popup is modal while open
        if history_events::handle_history_key(self, key) {
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::FindBar => {
                search_events::handle_find_bar_key(self, key);
            }
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Keys handled regardless of focus.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => {
                self.quit();
                true
            }
            KeyCode::Char('r') => {
                self.search.toggle_regex();
                true
            }
            KeyCode::Char('t') => {
                self.search.cycle_scope();
                true
            }
            KeyCode::Char('g') => {
                self.search.toggle_case_sensitive();
                true
            }
            KeyCode::Char('w') => {
                self.cycle_reach();
                true
            }
            KeyCode::Char('p') => {
                self.history.open();
                true
            }
            _ => false,
        }
    }

    /// Keys while the results table has focus.
    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Esc => {
                self.focus = Focus::FindBar;
            }
            KeyCode::Char('q') => {
                self.quit();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.find_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.find_previous();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.find_previous();
            }
            KeyCode::Char('n') => {
                self.find_next();
            }
            KeyCode::Char('N') => {
                self.find_previous();
            }
            // Re-announce the current match (the original's "go to shot").
            KeyCode::Enter => {
                self.announce_current();
            }
            KeyCode::Char('y') => {
                self.copy_current_media_path();
            }
            _ => {}
        }
    }

    /// Copy the current match's media path to the clipboard.
    fn copy_current_media_path(&mut self) {
        let Some(record) = self.current_record() else {
            self.status.set_info("No current match to copy from");
            return;
        };

        match record.media_path.clone() {
            Some(path) => match clipboard::copy_text(&path) {
                Ok(()) => self.status.set_info(format!("Copied {}", path)),
                Err(e) => self.status.set_error(format!("Copy failed: {}", e)),
            },
            None => self.status.set_info("Current match has no media"),
        }
    }
}
