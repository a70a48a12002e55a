use ratatui::widgets::TableState;

use crate::collect::{CollectReach, Focused, ShotRecord, collect_shots};
use crate::history::HistoryState;
use crate::project::Project;
use crate::search::SearchState;
use crate::settings::{self, Settings};
use crate::status::StatusLine;

#[cfg(debug_assertions)]
use log::debug;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FindBar,
    Results,
}

/// Application state
pub struct App {
    pub projects: Vec<Project>,
    /// Position of the current sequence within the loaded projects.
    pub focused: Focused,
    pub reach: CollectReach,
    /// Shot records from the last collection pass.
    pub records: Vec<ShotRecord>,
    pub search: SearchState,
    pub history: HistoryState,
    pub status: StatusLine,
    pub table: TableState,
    pub focus: Focus,
    pub should_quit: bool,
    dirty: bool,
    persist_settings: bool,
    settings_save_warned: bool,
}

impl App {
    /// Create a new App, seeding panel state from persisted settings.
    pub fn new(projects: Vec<Project>, saved: Settings) -> Self {
        let mut search = SearchState::new();
        search.set_pattern(&saved.last_search);
        search.set_use_regex(saved.use_regex);
        // The stored checkbox is "ignore case"; this is the one place it is
        // mapped onto the engine's case_sensitive flag.
        search.set_case_sensitive(!saved.ignore_case);
        search.set_scope(saved.scope);

        Self {
            projects,
            focused: Focused {
                project: 0,
                sequence: 0,
            },
            reach: saved.reach,
            records: Vec::new(),
            search,
            history: HistoryState::new(saved.recent_searches),
            status: StatusLine::new(),
            table: TableState::default(),
            focus: Focus::FindBar,
            should_quit: false,
            dirty: true,
            persist_settings: true,
            settings_save_warned: false,
        }
    }

    /// Disable settings persistence (tests run against the real data dir
    /// otherwise).
    pub fn with_persistence(mut self, enabled: bool) -> Self {
        self.persist_settings = enabled;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Quit, persisting panel state on the way out.
    pub fn quit(&mut self) {
        self.save_settings();
        self.should_quit = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// The shot record at the navigation cursor, if any.
    pub fn current_record(&self) -> Option<&ShotRecord> {
        let index = self.search.match_list().current().ok()?;
        self.records.get(index)
    }

    /// Run a search over a fresh collection pass.
    ///
    /// Blocks until done; the status line is updated synchronously before
    /// and after. The pattern is recorded into the recent-search list and
    /// panel settings are persisted, matching the panel's write-on-search
    /// behavior.
    pub fn run_search(&mut self) {
        self.status.set_info("Searching...");

        self.records = collect_shots(&self.projects, self.focused, self.reach);

        let pattern = self.search.pattern().to_string();
        if !pattern.is_empty() {
            self.history.record(&pattern);
        }

        match self.search.run_search(&self.records) {
            Ok(0) => {
                self.table.select(None);
                self.status.set_info("No matches found");
            }
            Ok(_count) => {
                #[cfg(debug_assertions)]
                debug!("Search '{}' matched {} of {} records", pattern, _count, self.records.len());
                self.sync_selection();
                self.announce_current();
            }
            Err(e) => {
                self.table.select(None);
                self.status.set_error(e.to_string());
            }
        }

        self.save_settings();
        self.mark_dirty();
    }

    /// Step to the next match. With no match set yet, runs the search
    /// instead and stops; it does not additionally advance.
    pub fn find_next(&mut self) {
        if self.search.match_list().is_empty() {
            self.run_search();
            return;
        }
        if self.search.match_list_mut().advance().is_ok() {
            self.sync_selection();
            self.announce_current();
        }
    }

    /// Step to the previous match; same empty-set fallback as `find_next`.
    pub fn find_previous(&mut self) {
        if self.search.match_list().is_empty() {
            self.run_search();
            return;
        }
        if self.search.match_list_mut().retreat().is_ok() {
            self.sync_selection();
            self.announce_current();
        }
    }

    /// Position the cursor on a result row directly (table selection).
    pub fn select_row(&mut self, row: usize) {
        match self.search.match_list_mut().set_cursor(row) {
            Ok(()) => {
                self.sync_selection();
                self.announce_current();
            }
            // Out-of-range rows are a caller bug, not a user-facing failure.
            Err(_e) => {
                #[cfg(debug_assertions)]
                debug!("select_row: {}", _e);
            }
        }
    }

    fn sync_selection(&mut self) {
        self.table.select(self.search.match_list().cursor());
    }

    /// Update the status readout for the current match.
    pub fn announce_current(&mut self) {
        let list = self.search.match_list();
        if let (Some(position), Ok(index)) = (list.cursor(), list.current())
            && let Some(record) = self.records.get(index)
        {
            let (total, shot, track, sequence) = (
                list.len(),
                record.shot_name.clone(),
                record.track.clone(),
                record.sequence.clone(),
            );
            self.status
                .set_match_position(position + 1, total, &shot, &track, &sequence);
        }
    }

    pub fn cycle_reach(&mut self) {
        self.reach = self.reach.next();
        self.search.unconfirm();
        self.mark_dirty();
    }

    /// Snapshot the current panel state for persistence.
    pub fn settings(&self) -> Settings {
        Settings {
            last_search: self.search.pattern().to_string(),
            use_regex: self.search.use_regex(),
            ignore_case: !self.search.case_sensitive(),
            scope: self.search.scope(),
            reach: self.reach,
            recent_searches: self.history.entries().to_vec(),
        }
    }

    /// Persist panel state, degrading to session-only on failure.
    pub fn save_settings(&mut self) {
        if !self.persist_settings {
            return;
        }
        if let Err(_e) = settings::save_settings(&self.settings()) {
            #[cfg(debug_assertions)]
            log::error!("Failed to save panel settings: {}", _e);
            if !self.settings_save_warned {
                self.settings_save_warned = true;
                self.status
                    .set_error("Panel settings not saved; state will last this session only");
            }
        }
    }
}
