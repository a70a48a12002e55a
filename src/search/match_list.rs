use crate::error::FindError;

/// An ordered match set plus a navigation cursor.
///
/// The indices point into the shot records the matches were evaluated over,
/// in collection order. The cursor wraps on advance/retreat and holds the
/// invariant `cursor < len` whenever the list is non-empty; an empty list
/// has no cursor and every navigation call reports it. The list never
/// re-runs a search itself; it is rebuilt wholesale by the next evaluation.
#[derive(Debug, Default)]
pub struct MatchList {
    indices: Vec<usize>,
    cursor: usize,
}

impl MatchList {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// All matched record indices, in collection order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Cursor position within the match list, if any matches exist.
    pub fn cursor(&self) -> Option<usize> {
        (!self.indices.is_empty()).then_some(self.cursor)
    }

    /// Record index of the current match.
    pub fn current(&self) -> Result<usize, FindError> {
        self.indices
            .get(self.cursor)
            .copied()
            .ok_or(FindError::EmptyMatchSet)
    }

    /// Step the cursor forward, wrapping from the last match to the first.
    /// Returns the new current record index.
    pub fn advance(&mut self) -> Result<usize, FindError> {
        if self.indices.is_empty() {
            return Err(FindError::EmptyMatchSet);
        }
        self.cursor = (self.cursor + 1) % self.indices.len();
        self.current()
    }

    /// Step the cursor backward, wrapping from the first match to the last.
    /// Returns the new current record index.
    pub fn retreat(&mut self) -> Result<usize, FindError> {
        if self.indices.is_empty() {
            return Err(FindError::EmptyMatchSet);
        }
        self.cursor = if self.cursor == 0 {
            self.indices.len() - 1
        } else {
            self.cursor - 1
        };
        self.current()
    }

    /// Position the cursor directly, as when a result row is clicked.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), FindError> {
        if index >= self.indices.len() {
            return Err(FindError::IndexOutOfRange {
                index,
                len: self.indices.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_list_has_no_cursor() {
        let list = MatchList::default();
        assert!(list.is_empty());
        assert!(list.cursor().is_none());
        assert!(matches!(list.current(), Err(FindError::EmptyMatchSet)));
    }

    #[test]
    fn test_navigation_on_empty_reports_empty_match_set() {
        let mut list = MatchList::new(Vec::new());
        assert!(matches!(list.advance(), Err(FindError::EmptyMatchSet)));
        assert!(matches!(list.retreat(), Err(FindError::EmptyMatchSet)));
    }

    #[test]
    fn test_advance_wraps_to_front() {
        let mut list = MatchList::new(vec![4, 7, 9]);
        assert_eq!(list.advance().unwrap(), 7);
        assert_eq!(list.advance().unwrap(), 9);
        assert_eq!(list.advance().unwrap(), 4);
        assert_eq!(list.cursor(), Some(0));
    }

    #[test]
    fn test_retreat_wraps_to_back() {
        let mut list = MatchList::new(vec![4, 7, 9]);
        assert_eq!(list.retreat().unwrap(), 9);
        assert_eq!(list.cursor(), Some(2));
        assert_eq!(list.retreat().unwrap(), 7);
        assert_eq!(list.retreat().unwrap(), 4);
    }

    #[test]
    fn test_set_cursor_bounds() {
        let mut list = MatchList::new(vec![4, 7, 9]);
        list.set_cursor(2).unwrap();
        assert_eq!(list.current().unwrap(), 9);

        let err = list.set_cursor(3).unwrap_err();
        assert!(matches!(err, FindError::IndexOutOfRange { index: 3, len: 3 }));
        // A failed set leaves the cursor untouched.
        assert_eq!(list.current().unwrap(), 9);
    }

    #[test]
    fn test_single_match_wraps_onto_itself() {
        let mut list = MatchList::new(vec![5]);
        assert_eq!(list.advance().unwrap(), 5);
        assert_eq!(list.retreat().unwrap(), 5);
        assert_eq!(list.cursor(), Some(0));
    }

    // *For any* non-empty match list, advance moves the cursor forward by
    // one with wraparound, and retreat undoes it.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_advance_wraps_modulo_len(
            len in 1usize..50,
            start in 0usize..50,
        ) {
            let mut list = MatchList::new((0..len).collect());
            let start = start % len;
            list.set_cursor(start).unwrap();

            list.advance().unwrap();
            prop_assert_eq!(list.cursor(), Some((start + 1) % len));
        }

        #[test]
        fn prop_retreat_inverts_advance(
            len in 1usize..50,
            start in 0usize..50,
        ) {
            let mut list = MatchList::new((0..len).collect());
            let start = start % len;
            list.set_cursor(start).unwrap();

            list.advance().unwrap();
            list.retreat().unwrap();
            prop_assert_eq!(list.cursor(), Some(start));
        }
    }
}
