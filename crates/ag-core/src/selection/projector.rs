//! Projection of tracked positions onto the loaded page

use std::collections::BTreeSet;

use crate::paging::RowPosition;

/// Result of projecting a page's selection set onto its loaded rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Selected positions that resolve to a loaded row, ascending.
    pub row_positions: Vec<RowPosition>,
    /// True when the whole rendered page is selected, i.e. the number of
    /// resolved positions equals the page capacity. Drives the header
    /// checkbox's checked state.
    pub is_full_page: bool,
}

/// Resolve a selection set against the rows actually loaded for the page.
///
/// Positions at or beyond `loaded_rows` are dropped silently; they belong to
/// tracker entries written ahead of the data (bulk selection past the end of
/// the dataset) or to a shorter refetch of the page.
pub fn project(
    positions: &BTreeSet<RowPosition>,
    loaded_rows: usize,
    page_capacity: usize,
) -> Projection {
    let row_positions: Vec<RowPosition> = positions
        .iter()
        .copied()
        .filter(|&pos| pos < loaded_rows)
        .collect();
    let is_full_page = row_positions.len() == page_capacity;

    Projection {
        row_positions,
        is_full_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(positions: &[usize]) -> BTreeSet<usize> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_partial_selection() {
        let projection = project(&set(&[0, 5, 11]), 12, 12);
        assert_eq!(projection.row_positions, vec![0, 5, 11]);
        assert!(!projection.is_full_page);
    }

    #[test]
    fn test_full_page_selection() {
        let positions: BTreeSet<usize> = (0..12).collect();
        let projection = project(&positions, 12, 12);
        assert_eq!(projection.row_positions, (0..12).collect::<Vec<_>>());
        assert!(projection.is_full_page);
    }

    #[test]
    fn test_empty_selection() {
        let projection = project(&BTreeSet::new(), 12, 12);
        assert!(projection.row_positions.is_empty());
        assert!(!projection.is_full_page);
    }

    #[test]
    fn test_out_of_range_positions_dropped() {
        // A bulk selection can mark all 12 positions on a page that only
        // loaded 5 records.
        let positions: BTreeSet<usize> = (0..12).collect();
        let projection = project(&positions, 5, 12);
        assert_eq!(projection.row_positions, vec![0, 1, 2, 3, 4]);
        assert!(!projection.is_full_page);
    }

    #[test]
    fn test_no_rows_loaded() {
        let projection = project(&set(&[0, 1]), 0, 12);
        assert!(projection.row_positions.is_empty());
        assert!(!projection.is_full_page);
    }

    #[test]
    fn test_positions_emitted_in_ascending_order() {
        let projection = project(&set(&[11, 0, 7, 3]), 12, 12);
        assert_eq!(projection.row_positions, vec![0, 3, 7, 11]);
    }
}
