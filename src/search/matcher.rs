use memchr::memmem;
use regex::RegexBuilder;

use crate::error::FindError;

use super::query::{MatchMode, Query};

/// A query's pattern, compiled once per evaluation.
#[derive(Debug)]
pub enum PatternMatcher {
    Plain {
        /// Already lower-folded when the match is case-insensitive.
        needle: String,
        case_sensitive: bool,
    },
    Regex(regex::Regex),
}

impl PatternMatcher {
    /// Compile the pattern for a query.
    ///
    /// A malformed regular expression is a user error, reported as
    /// `InvalidPattern` rather than raised; the caller shows it and treats
    /// the evaluation as producing no matches.
    pub fn compile(query: &Query) -> Result<Self, FindError> {
        match query.mode {
            MatchMode::Plain => {
                let needle = if query.case_sensitive {
                    query.pattern.clone()
                } else {
                    query.pattern.to_lowercase()
                };
                Ok(PatternMatcher::Plain {
                    needle,
                    case_sensitive: query.case_sensitive,
                })
            }
            MatchMode::Regex => RegexBuilder::new(&query.pattern)
                .case_insensitive(!query.case_sensitive)
                .build()
                .map(PatternMatcher::Regex)
                .map_err(|e| FindError::InvalidPattern(e.to_string())),
        }
    }

    /// Whether the pattern is found anywhere in `haystack`.
    ///
    /// The empty plain pattern matches every haystack, the empty string
    /// being a substring of every string. Callers rely on this to list the
    /// full collection.
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            PatternMatcher::Plain {
                needle,
                case_sensitive,
            } => {
                if *case_sensitive {
                    memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
                } else {
                    let folded = haystack.to_lowercase();
                    memmem::find(folded.as_bytes(), needle.as_bytes()).is_some()
                }
            }
            PatternMatcher::Regex(regex) => regex.is_match(haystack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::query::SearchScope;
    use proptest::prelude::*;

    fn plain(pattern: &str, case_sensitive: bool) -> PatternMatcher {
        PatternMatcher::compile(
            &Query::new(pattern)
                .case_sensitive(case_sensitive)
                .scope(SearchScope::All),
        )
        .unwrap()
    }

    fn regex(pattern: &str, case_sensitive: bool) -> Result<PatternMatcher, FindError> {
        PatternMatcher::compile(
            &Query::new(pattern)
                .mode(MatchMode::Regex)
                .case_sensitive(case_sensitive),
        )
    }

    #[test]
    fn test_plain_substring() {
        let matcher = plain("t02", true);
        assert!(matcher.is_match("Shot020"));
        assert!(!matcher.is_match("Shot010"));
    }

    #[test]
    fn test_plain_case_sensitivity() {
        let sensitive = plain("SHOT", true);
        assert!(!sensitive.is_match("Shot020"));

        let insensitive = plain("SHOT", false);
        assert!(insensitive.is_match("Shot020"));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let matcher = plain("", true);
        assert!(matcher.is_match("Shot010"));
        assert!(matcher.is_match(""));
    }

    #[test]
    fn test_regex_match() {
        let matcher = regex(r"Shot0[12]0", true).unwrap();
        assert!(matcher.is_match("Shot010"));
        assert!(matcher.is_match("Shot020"));
        assert!(!matcher.is_match("Shot030"));
    }

    #[test]
    fn test_regex_case_insensitive() {
        let matcher = regex(r"^shot", false).unwrap();
        assert!(matcher.is_match("Shot010"));
    }

    #[test]
    fn test_invalid_regex_reports_error() {
        let err = regex("(", true).unwrap_err();
        assert!(matches!(err, FindError::InvalidPattern(_)));
    }

    #[test]
    fn test_unicode_fold() {
        let matcher = plain("WÖRLD", false);
        assert!(matcher.is_match("hello wörld"));
    }

    // *For any* pattern and haystack, case-insensitive plain matching gives
    // the same answer regardless of the case the pattern arrives in.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_case_insensitive_is_case_invariant(
            pattern in "[a-zA-Z0-9]{1,10}",
            haystack in "[a-zA-Z0-9 ]{0,60}",
        ) {
            let lower = plain(&pattern.to_lowercase(), false);
            let upper = plain(&pattern.to_uppercase(), false);
            prop_assert_eq!(lower.is_match(&haystack), upper.is_match(&haystack));
        }

        #[test]
        fn prop_empty_plain_pattern_matches_all(haystack in ".{0,60}") {
            let matcher = plain("", true);
            prop_assert!(matcher.is_match(&haystack));
        }
    }
}
