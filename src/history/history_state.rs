use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::matcher::HistoryMatcher;

/// Recent searches kept, oldest evicted first.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Maximum number of history items to display in the popup.
pub const MAX_VISIBLE_HISTORY: usize = 10;

/// Creates a TextArea configured for history filter input.
fn create_filter_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Manages the recent-search list and its popup.
///
/// Entries are most-recent-first. Recording a pattern that is already in
/// the list moves it to the front rather than duplicating it; the list is
/// bounded to `MAX_RECENT_SEARCHES`. The settings store supplies the
/// initial entries and persists them back; this state never touches disk.
pub struct HistoryState {
    entries: Vec<String>,
    filtered_indices: Vec<usize>,
    filter_textarea: TextArea<'static>,
    selected_index: usize,
    visible: bool,
    matcher: HistoryMatcher,
    cycling_index: Option<usize>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HistoryState {
    /// Creates a HistoryState seeded with persisted entries.
    pub fn new(entries: Vec<String>) -> Self {
        let filtered_indices = (0..entries.len()).collect();
        Self {
            entries,
            filtered_indices,
            filter_textarea: create_filter_textarea(),
            selected_index: 0,
            visible: false,
            matcher: HistoryMatcher::new(),
            cycling_index: None,
        }
    }

    /// Record a search pattern: move-to-front on repeat, evict the oldest
    /// entry past the bound. Blank patterns are not recorded.
    pub fn record(&mut self, pattern: &str) {
        if pattern.trim().is_empty() {
            return;
        }

        self.entries.retain(|e| e != pattern);
        self.entries.insert(0, pattern.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);

        self.filtered_indices = (0..self.entries.len()).collect();
        self.cycling_index = None;
    }

    /// The recent searches, most recent first (persisted by the caller).
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Opens the history popup.
    pub fn open(&mut self) {
        self.visible = true;
        self.filter_textarea.select_all();
        self.filter_textarea.cut();
        self.update_filter();
        self.selected_index = 0;
    }

    /// Closes the history popup and resets filter state.
    pub fn close(&mut self) {
        self.visible = false;
        self.filter_textarea.select_all();
        self.filter_textarea.cut();
        self.selected_index = 0;
        self.filtered_indices = (0..self.entries.len()).collect();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn filter_query(&self) -> &str {
        self.filter_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Returns a mutable reference to the filter TextArea for input handling.
    pub fn filter_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.filter_textarea
    }

    /// Called after TextArea input to update the filter.
    pub fn on_filter_input_changed(&mut self) {
        self.update_filter();
        self.selected_index = 0;
    }

    /// Selects the next item in the filtered list.
    pub fn select_next(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.filtered_indices.len();
        }
    }

    /// Selects the previous item in the filtered list.
    pub fn select_previous(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.filtered_indices.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Returns the currently selected entry, if any.
    pub fn selected_entry(&self) -> Option<&str> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&idx| self.entries.get(idx))
            .map(String::as_str)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// The visible (filtered) entries with their display indices, limited
    /// to `MAX_VISIBLE_HISTORY` items.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.filtered_indices
            .iter()
            .take(MAX_VISIBLE_HISTORY)
            .enumerate()
            .filter_map(|(display_idx, &entry_idx)| {
                self.entries.get(entry_idx).map(|e| (display_idx, e.as_str()))
            })
    }

    fn update_filter(&mut self) {
        let query = self.filter_query().to_string();
        self.filtered_indices = self.matcher.filter(&query, &self.entries);
    }

    /// Cycle to the previous (older) recent search. Stays at the oldest.
    pub fn cycle_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let next_idx = match self.cycling_index {
            None => 0,
            Some(idx) if idx + 1 < self.entries.len() => idx + 1,
            Some(idx) => idx,
        };

        self.cycling_index = Some(next_idx);
        self.entries.get(next_idx).cloned()
    }

    /// Cycle to the next (newer) recent search, or None past the newest.
    pub fn cycle_next(&mut self) -> Option<String> {
        match self.cycling_index {
            None => None,
            Some(0) => {
                self.cycling_index = None;
                None
            }
            Some(idx) => {
                let next_idx = idx - 1;
                self.cycling_index = Some(next_idx);
                self.entries.get(next_idx).cloned()
            }
        }
    }

    /// Reset cycling state (called when the user types).
    pub fn reset_cycling(&mut self) {
        self.cycling_index = None;
    }
}
