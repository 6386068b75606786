//! Page and row position types

/// Number of rows per page, fixed for the lifetime of the system.
pub const PAGE_SIZE: usize = 12;

/// A 0-based index of a fixed-size window into the full ordered dataset.
pub type PageNumber = usize;

/// A record's offset within its page, in `[0, PAGE_SIZE)`.
///
/// Only meaningful together with a [`PageNumber`]; it is not a global index.
pub type RowPosition = usize;

/// Number of pages needed to hold `total` records at `capacity` rows each.
pub fn page_count(total: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return 0;
    }
    total.div_ceil(capacity)
}
