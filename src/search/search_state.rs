use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::collect::ShotRecord;
use crate::error::FindError;

use super::evaluate::find_matches;
use super::match_list::MatchList;
use super::query::{MatchMode, Query, SearchScope};

/// Creates a TextArea configured for search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Manages the state of the find bar.
pub struct SearchState {
    /// Whether the search has been confirmed (Enter pressed).
    /// When confirmed, Enter/Shift+Enter navigate matches instead of editing.
    confirmed: bool,
    /// Search pattern text input.
    search_textarea: TextArea<'static>,
    /// Use regular expressions instead of plain substrings.
    use_regex: bool,
    /// The engine-level flag; the "ignore case" checkbox is mapped through
    /// one negation when settings are applied, nowhere else.
    case_sensitive: bool,
    scope: SearchScope,
    /// Current match set and cursor. Rebuilt wholesale per search.
    matches: MatchList,
    /// Pattern error from the last evaluation, shown until the next search.
    last_error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            confirmed: false,
            search_textarea: create_search_textarea(),
            use_regex: false,
            case_sensitive: true,
            scope: SearchScope::All,
            matches: MatchList::default(),
            last_error: None,
        }
    }

    /// Returns the current search pattern.
    pub fn pattern(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the pattern text (history recall, settings restore).
    pub fn set_pattern(&mut self, pattern: &str) {
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.search_textarea.insert_str(pattern);
        self.unconfirm();
    }

    /// Returns a mutable reference to the search TextArea for input handling.
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Confirms the search, enabling Enter/n/N navigation.
    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    /// Unconfirms the search (when the pattern or options change).
    pub fn unconfirm(&mut self) {
        self.confirmed = false;
    }

    pub fn use_regex(&self) -> bool {
        self.use_regex
    }

    pub fn toggle_regex(&mut self) {
        self.use_regex = !self.use_regex;
        self.unconfirm();
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    pub fn toggle_case_sensitive(&mut self) {
        self.case_sensitive = !self.case_sensitive;
        self.unconfirm();
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: SearchScope) {
        self.scope = scope;
    }

    pub fn cycle_scope(&mut self) {
        self.scope = self.scope.next();
        self.unconfirm();
    }

    pub fn set_use_regex(&mut self, use_regex: bool) {
        self.use_regex = use_regex;
    }

    /// The query this state currently describes.
    pub fn query(&self) -> Query {
        Query {
            pattern: self.pattern().to_string(),
            mode: if self.use_regex {
                MatchMode::Regex
            } else {
                MatchMode::Plain
            },
            case_sensitive: self.case_sensitive,
            scope: self.scope,
        }
    }

    pub fn match_list(&self) -> &MatchList {
        &self.matches
    }

    pub fn match_list_mut(&mut self) -> &mut MatchList {
        &mut self.matches
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Evaluate the current query over `records`, replacing the match set.
    ///
    /// An invalid pattern leaves an empty match set and records the error
    /// for display; it is also returned so the caller can update status.
    pub fn run_search(&mut self, records: &[ShotRecord]) -> Result<usize, FindError> {
        self.last_error = None;
        match find_matches(records, &self.query()) {
            Ok(indices) => {
                let count = indices.len();
                self.matches = MatchList::new(indices);
                Ok(count)
            }
            Err(e) => {
                self.matches = MatchList::default();
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Get match count display string "(current/total)".
    pub fn match_count_display(&self) -> String {
        match self.matches.cursor() {
            None => "(0/0)".to_string(),
            Some(cursor) => format!("({}/{})", cursor + 1, self.matches.len()),
        }
    }
}
