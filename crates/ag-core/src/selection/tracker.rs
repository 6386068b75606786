//! Per-page selection state, independent of what is currently loaded

use std::collections::BTreeSet;

use ahash::AHashMap;
use tracing::debug;

use crate::paging::{PageNumber, RowPosition};

/// Tracks which row positions are selected on each page.
///
/// Pages are retained indefinitely once touched, so navigating back to an
/// earlier page restores its selection even though the page's records were
/// discarded in between. Memory is bounded by the number of distinct pages,
/// i.e. `ceil(total / PAGE_SIZE)`.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    pages: AHashMap<PageNumber, BTreeSet<RowPosition>>,
}

impl SelectionTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a page's selection set wholesale.
    ///
    /// Used for per-page toggles, select-all and clear-all. An empty set is
    /// stored as-is; it is equivalent to the page never having been touched.
    pub fn set_page_selection(&mut self, page: PageNumber, positions: BTreeSet<RowPosition>) {
        self.pages.insert(page, positions);
    }

    /// The stored selection for `page`, or the empty set if never touched.
    pub fn page_selection(&self, page: PageNumber) -> BTreeSet<RowPosition> {
        self.pages.get(&page).cloned().unwrap_or_default()
    }

    /// Whether any page has a recorded entry (possibly empty).
    pub fn touched_page_count(&self) -> usize {
        self.pages.len()
    }

    /// Select the first `count` rows of the dataset starting at `start_page`.
    ///
    /// Fans the scalar request out into per-page position sets, overwriting
    /// any prior selection on the pages it reaches. Pages past the end of the
    /// dataset may be marked fully selected; projection drops positions that
    /// never resolve to a loaded row, so those entries are inert.
    ///
    /// Each iteration deducts the full page capacity from the remaining
    /// count even when fewer positions were written. A page receiving a
    /// partial selection still consumes a whole page's quota.
    ///
    /// Requests with `count == 0` or `page_capacity == 0` are rejected with
    /// no state change.
    pub fn apply_bulk_selection(
        &mut self,
        start_page: PageNumber,
        count: usize,
        page_capacity: usize,
    ) {
        if count == 0 || page_capacity == 0 {
            return;
        }

        let mut remaining = count as i64;
        let mut page = start_page;
        while remaining > 0 {
            let take = page_capacity.min(remaining as usize);
            self.pages.insert(page, (0..take).collect());
            remaining -= page_capacity as i64;
            page += 1;
        }

        debug!(
            start_page,
            count,
            pages_written = page - start_page,
            "applied bulk selection"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(range: std::ops::Range<usize>) -> BTreeSet<usize> {
        range.collect()
    }

    #[test]
    fn test_untouched_page_is_empty() {
        let tracker = SelectionTracker::new();
        assert!(tracker.page_selection(0).is_empty());
        assert!(tracker.page_selection(9999).is_empty());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut tracker = SelectionTracker::new();
        let set: BTreeSet<usize> = [0, 3, 7].into_iter().collect();

        tracker.set_page_selection(4, set.clone());
        assert_eq!(tracker.page_selection(4), set);

        // Other pages stay untouched
        assert!(tracker.page_selection(3).is_empty());
        assert!(tracker.page_selection(5).is_empty());
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut tracker = SelectionTracker::new();
        let set: BTreeSet<usize> = [1, 2].into_iter().collect();

        tracker.set_page_selection(0, set.clone());
        tracker.set_page_selection(0, set.clone());
        assert_eq!(tracker.page_selection(0), set);
    }

    #[test]
    fn test_set_replaces_wholesale() {
        let mut tracker = SelectionTracker::new();
        tracker.set_page_selection(1, positions(0..12));
        let narrowed: BTreeSet<usize> = [5].into_iter().collect();
        tracker.set_page_selection(1, narrowed.clone());
        assert_eq!(tracker.page_selection(1), narrowed);
    }

    #[test]
    fn test_clear_via_empty_set() {
        let mut tracker = SelectionTracker::new();
        tracker.set_page_selection(2, positions(0..4));
        tracker.set_page_selection(2, BTreeSet::new());
        assert!(tracker.page_selection(2).is_empty());
    }

    #[test]
    fn test_bulk_selection_spans_two_pages() {
        let mut tracker = SelectionTracker::new();
        tracker.apply_bulk_selection(0, 20, 12);

        assert_eq!(tracker.page_selection(0), positions(0..12));
        assert_eq!(tracker.page_selection(1), positions(0..8));
        assert_eq!(tracker.touched_page_count(), 2);
    }

    #[test]
    fn test_bulk_selection_exact_page() {
        let mut tracker = SelectionTracker::new();
        tracker.apply_bulk_selection(2, 12, 12);

        assert_eq!(tracker.page_selection(2), positions(0..12));
        assert_eq!(tracker.touched_page_count(), 1);
        assert!(tracker.page_selection(3).is_empty());
    }

    #[test]
    fn test_bulk_selection_starts_mid_dataset() {
        let mut tracker = SelectionTracker::new();
        tracker.apply_bulk_selection(5, 30, 12);

        assert_eq!(tracker.page_selection(5), positions(0..12));
        assert_eq!(tracker.page_selection(6), positions(0..12));
        assert_eq!(tracker.page_selection(7), positions(0..6));
        assert!(tracker.page_selection(4).is_empty());
        assert!(tracker.page_selection(8).is_empty());
    }

    #[test]
    fn test_bulk_selection_overwrites_prior_selection() {
        let mut tracker = SelectionTracker::new();
        tracker.set_page_selection(0, [11].into_iter().collect());
        tracker.apply_bulk_selection(0, 3, 12);

        assert_eq!(tracker.page_selection(0), positions(0..3));
    }

    #[test]
    fn test_bulk_selection_rejects_zero_count() {
        let mut tracker = SelectionTracker::new();
        tracker.set_page_selection(0, positions(0..2));
        tracker.apply_bulk_selection(0, 0, 12);

        assert_eq!(tracker.page_selection(0), positions(0..2));
        assert_eq!(tracker.touched_page_count(), 1);
    }

    #[test]
    fn test_bulk_selection_rejects_zero_capacity() {
        let mut tracker = SelectionTracker::new();
        tracker.apply_bulk_selection(0, 10, 0);
        assert_eq!(tracker.touched_page_count(), 0);
    }
}
