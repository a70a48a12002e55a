//! Search module
//!
//! Finds shots by text in shot names, metadata, or tag notes, searching
//! either plain text or regular expressions. Matching is a pure projection
//! over the collected shot records; the match list keeps a cursor with
//! wraparound navigation over the results.

mod evaluate;
mod match_list;
mod matcher;
pub mod query;
pub mod search_events;
pub mod search_render;
mod search_state;

pub use evaluate::find_matches;
pub use match_list::MatchList;
pub use matcher::PatternMatcher;
pub use query::{MatchMode, Query, SearchScope};
pub use search_state::SearchState;
