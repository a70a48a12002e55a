use serde::{Deserialize, Serialize};

/// How the pattern is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Literal substring match.
    #[default]
    Plain,
    /// Regular expression match.
    Regex,
}

/// Which fields of a shot the pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Shot name or owning-clip name.
    Names,
    /// Shot or owning-clip metadata keys and values.
    Metadata,
    /// Tag note text.
    TagNotes,
    /// Any of the above.
    #[default]
    All,
}

impl SearchScope {
    pub fn label(self) -> &'static str {
        match self {
            SearchScope::Names => "Names",
            SearchScope::Metadata => "Metadata",
            SearchScope::TagNotes => "Tag Notes",
            SearchScope::All => "All",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SearchScope::All => SearchScope::Names,
            SearchScope::Names => SearchScope::Metadata,
            SearchScope::Metadata => SearchScope::TagNotes,
            SearchScope::TagNotes => SearchScope::All,
        }
    }
}

/// One search invocation's configuration. Built fresh per search; never
/// mutated while an evaluation is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub pattern: String,
    pub mode: MatchMode,
    pub case_sensitive: bool,
    pub scope: SearchScope,
}

impl Query {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            mode: MatchMode::Plain,
            case_sensitive: true,
            scope: SearchScope::All,
        }
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let query = Query::new("Shot");
        assert_eq!(query.mode, MatchMode::Plain);
        assert!(query.case_sensitive);
        assert_eq!(query.scope, SearchScope::All);
    }

    #[test]
    fn test_scope_cycle_returns_to_start() {
        let mut scope = SearchScope::All;
        for _ in 0..4 {
            scope = scope.next();
        }
        assert_eq!(scope, SearchScope::All);
    }

    #[test]
    fn test_scope_serializes_lowercase() {
        let json = serde_json::to_string(&SearchScope::TagNotes).unwrap();
        assert_eq!(json, "\"tagnotes\"");
    }
}
