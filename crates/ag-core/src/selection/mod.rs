//! Cross-page selection tracking
//!
//! Selection is keyed by page-relative row position, not by record identity,
//! so that it survives a page being unloaded and refetched. The tracker
//! stores one position set per page ever touched; the projector resolves the
//! current page's set against whatever rows are actually loaded.

mod projector;
mod tracker;

pub use projector::{project, Projection};
pub use tracker::SelectionTracker;
