//! Catalog record type

use serde::{Deserialize, Serialize};

/// Stable unique identifier of a catalog record.
///
/// Unique across the full dataset, not just within a page, and stable
/// across refetches of the same page.
pub type ArtworkId = u64;

/// A single catalog record as served by the artworks API.
///
/// Display fields are optional because the upstream catalog leaves many of
/// them null; unknown payload fields are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Title for display, falling back to the identifier.
    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("artwork #{}", self.id))
    }
}
