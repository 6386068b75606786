//! Catalog sources

pub mod artic;
pub mod memory;

use async_trait::async_trait;

use ag_core::PageNumber;

use crate::record::Artwork;
use crate::DataError;

pub use artic::ArticSource;
pub use memory::MemorySource;

/// One fetched page of catalog records plus the dataset total.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Records of the requested page, in catalog order.
    pub records: Vec<Artwork>,
    /// Total record count across the whole dataset.
    pub total: usize,
}

/// Trait for paginated catalog sources
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of records. `page` is 0-based at this boundary;
    /// sources translate to whatever their backend expects.
    async fn fetch_page(&self, page: PageNumber) -> Result<CatalogPage, DataError>;

    /// Rows per page this source serves.
    fn page_capacity(&self) -> usize;

    /// Get the source name for diagnostics
    fn source_name(&self) -> &str;
}
