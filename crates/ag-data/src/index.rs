//! Page-scoped identity index
//!
//! The rendering collaborator reports selection by record identity, while
//! the tracker is keyed by page-relative position. This index bridges the
//! two for the page currently loaded. It is a short-lived cache: each
//! rebuild is tagged with the page it was built for, and lookups against
//! any other page are refused rather than answered from stale entries.

use ahash::AHashMap;
use tracing::warn;

use ag_core::{PageNumber, RowPosition};

use crate::record::{Artwork, ArtworkId};

/// Maps record identifiers to row positions within the loaded page.
#[derive(Debug, Default)]
pub struct IdentityIndex {
    built_for: Option<PageNumber>,
    by_id: AHashMap<ArtworkId, RowPosition>,
}

impl IdentityIndex {
    /// Create an index with no valid build
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the index for a freshly fetched page.
    ///
    /// Clears every previous entry; must run before any selection event for
    /// the new page is reconciled.
    pub fn rebuild(&mut self, page: PageNumber, records: &[Artwork]) {
        self.by_id.clear();
        self.by_id.reserve(records.len());
        for (position, record) in records.iter().enumerate() {
            self.by_id.insert(record.id, position);
        }
        self.built_for = Some(page);
    }

    /// Row position of `id` within `page`.
    ///
    /// `None` when the identifier is absent from the loaded page or when the
    /// index was built for a different page (a selection event racing a page
    /// change); callers skip such entries rather than failing the whole
    /// reconciliation.
    pub fn lookup(&self, page: PageNumber, id: ArtworkId) -> Option<RowPosition> {
        if self.built_for != Some(page) {
            warn!(
                requested_page = page,
                built_for = ?self.built_for,
                "identity lookup against stale index"
            );
            return None;
        }
        self.by_id.get(&id).copied()
    }

    /// Number of identifiers indexed for the current page.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
