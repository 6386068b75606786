//! Core selection state for the catalog grid
//!
//! This crate provides the cross-page selection tracker and the projection
//! logic that turns tracked row positions back into visible rows. It is
//! deliberately free of I/O and record types: pages are numbers, rows are
//! positions, and the data layer maps positions to records.

pub mod paging;
pub mod selection;

// Re-export commonly used types
pub use paging::{page_count, PageNumber, RowPosition, PAGE_SIZE};
pub use selection::{project, Projection, SelectionTracker};
