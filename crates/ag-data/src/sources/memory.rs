//! In-memory catalog source for tests and offline demos

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::debug;

use ag_core::{PageNumber, PAGE_SIZE};

use crate::record::Artwork;
use crate::sources::{CatalogPage, CatalogSource};
use crate::DataError;

/// Catalog source serving a fixed dataset sliced into pages.
///
/// Failure can be injected to exercise the error paths without a network.
pub struct MemorySource {
    records: Vec<Artwork>,
    page_capacity: usize,
    fail_next: AtomicBool,
}

impl MemorySource {
    /// Create a source over `records` with the standard page size
    pub fn new(records: Vec<Artwork>) -> Self {
        Self::with_capacity(records, PAGE_SIZE)
    }

    /// Create a source with a custom page capacity.
    pub fn with_capacity(records: Vec<Artwork>, page_capacity: usize) -> Self {
        Self {
            records,
            page_capacity,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Generate `count` synthetic artworks with sequential identifiers.
    pub fn seeded(count: usize) -> Self {
        let records = (0..count as u64)
            .map(|i| Artwork {
                id: 1000 + i,
                title: Some(format!("Untitled No. {i}")),
                place_of_origin: Some("Chicago".to_string()),
                artist_display: Some("Unknown artist".to_string()),
                inscriptions: None,
                date_start: Some(1900 + (i % 100) as i64),
                date_end: Some(1900 + (i % 100) as i64),
            })
            .collect();
        Self::new(records)
    }

    /// Make the next `fetch_page` call fail with [`DataError::Unavailable`].
    pub fn fail_next_fetch(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch_page(&self, page: PageNumber) -> Result<CatalogPage, DataError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DataError::Unavailable("injected failure".to_string()));
        }

        let start = page.saturating_mul(self.page_capacity).min(self.records.len());
        let end = (start + self.page_capacity).min(self.records.len());
        let records = self.records[start..end].to_vec();
        debug!(page, records = records.len(), "serving in-memory page");

        Ok(CatalogPage {
            records,
            total: self.records.len(),
        })
    }

    fn page_capacity(&self) -> usize {
        self.page_capacity
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}
