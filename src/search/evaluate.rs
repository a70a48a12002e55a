use crate::collect::ShotRecord;
use crate::error::FindError;

use super::matcher::PatternMatcher;
use super::query::{Query, SearchScope};

/// Evaluate a query against a collection of shot records.
///
/// Returns indices into `records` in input order; the match set is a pure
/// projection and nothing here mutates the records or the query. A
/// malformed pattern surfaces as `InvalidPattern` with no matches.
pub fn find_matches(records: &[ShotRecord], query: &Query) -> Result<Vec<usize>, FindError> {
    let matcher = PatternMatcher::compile(query)?;

    Ok(records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_scope(record, &matcher, query.scope))
        .map(|(index, _)| index)
        .collect())
}

fn matches_scope(record: &ShotRecord, matcher: &PatternMatcher, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Names => matches_names(record, matcher),
        SearchScope::Metadata => matches_metadata(record, matcher),
        SearchScope::TagNotes => matches_tag_notes(record, matcher),
        // Union of the three scopes, not a concatenated rendering: joining
        // fields would invent matches across field boundaries.
        SearchScope::All => {
            matches_names(record, matcher)
                || matches_metadata(record, matcher)
                || matches_tag_notes(record, matcher)
        }
    }
}

fn matches_names(record: &ShotRecord, matcher: &PatternMatcher) -> bool {
    matcher.is_match(&record.shot_name) || matcher.is_match(&record.clip_name)
}

fn matches_metadata(record: &ShotRecord, matcher: &PatternMatcher) -> bool {
    record
        .shot_metadata
        .iter()
        .chain(record.clip_metadata.iter())
        .any(|(key, value)| matcher.is_match(key) || matcher.is_match(value))
}

fn matches_tag_notes(record: &ShotRecord, matcher: &PatternMatcher) -> bool {
    record.tag_notes().any(|note| matcher.is_match(note))
}
