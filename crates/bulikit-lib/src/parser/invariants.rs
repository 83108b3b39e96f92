//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::matcher::Matcher;

impl Matcher<'_> {
    /// Every saved cursor position was restored or discarded.
    #[inline]
    pub(super) fn ensure_balanced(&self) {
        assert_eq!(
            self.cursor.saved_depth(),
            0,
            "broken matcher invariant: unbalanced cursor save/restore"
        );
    }
}
