//! Recent-search history
//!
//! Keeps the bounded most-recent-first list of search patterns, a fuzzy
//! filtered popup for recalling them, and Up/Down cycling in the find bar.
//! Persistence is handled by the panel settings store, not here.

pub mod history_events;
pub mod history_render;
mod history_state;
mod matcher;

pub use history_state::{HistoryState, MAX_RECENT_SEARCHES, MAX_VISIBLE_HISTORY};
