//! HTTP source for the Art Institute of Chicago artworks API

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use ag_core::{PageNumber, PAGE_SIZE};

use crate::record::Artwork;
use crate::sources::{CatalogPage, CatalogSource};
use crate::DataError;

const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Wire shape of the artworks listing endpoint.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<Artwork>,
    pagination: ApiPagination,
}

#[derive(Debug, Deserialize)]
struct ApiPagination {
    total: usize,
}

/// Catalog source backed by `GET {base}/artworks?page={n}`.
///
/// The API paginates 1-based; the 0-based page numbers used everywhere else
/// are translated here and nowhere else.
pub struct ArticSource {
    client: reqwest::Client,
    base_url: String,
}

impl ArticSource {
    /// Create a source against the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a source against a custom endpoint (tests, mirrors).
    pub fn with_base_url(base_url: String) -> Self {
        info!(%base_url, "creating artworks catalog source");
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

impl Default for ArticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for ArticSource {
    async fn fetch_page(&self, page: PageNumber) -> Result<CatalogPage, DataError> {
        let url = format!(
            "{}/artworks?page={}&limit={}",
            self.base_url,
            page + 1,
            PAGE_SIZE
        );
        debug!(page, %url, "fetching catalog page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: ApiResponse =
            serde_json::from_slice(&body).map_err(|e| DataError::Decode(e.to_string()))?;

        debug!(
            page,
            records = parsed.data.len(),
            total = parsed.pagination.total,
            "catalog page fetched"
        );
        Ok(CatalogPage {
            records: parsed.data,
            total: parsed.pagination.total,
        })
    }

    fn page_capacity(&self) -> usize {
        PAGE_SIZE
    }

    fn source_name(&self) -> &str {
        "artic-artworks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_parses() {
        let body = r#"{
            "pagination": { "total": 129817, "limit": 12, "current_page": 1 },
            "data": [
                { "id": 1, "title": "First" },
                { "id": 2, "title": "Second", "inscriptions": "signed" }
            ],
            "info": { "license_text": "..." }
        }"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.pagination.total, 129817);
        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[1].inscriptions.as_deref(), Some("signed"));
    }
}
