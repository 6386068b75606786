//! Data layer for the catalog grid
//!
//! Record type, catalog sources, the single-page store and the page-scoped
//! identity index. Only one page of records is ever held in memory; the
//! selection state that outlives it belongs to `ag-core`.

pub mod index;
pub mod record;
pub mod sources;
pub mod store;

use thiserror::Error;

// Re-exports
pub use index::IdentityIndex;
pub use record::{Artwork, ArtworkId};
pub use sources::{ArticSource, CatalogPage, CatalogSource, MemorySource};
pub use store::PageStore;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog API returned status {status}")]
    Api { status: u16 },

    #[error("payload decode error: {0}")]
    Decode(String),

    #[error("page {page} out of range (have {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("source unavailable: {0}")]
    Unavailable(String),
}
