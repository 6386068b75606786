//! Single-page record store

use ag_core::PageNumber;

use crate::record::Artwork;

/// The one currently loaded page.
#[derive(Debug, Clone)]
struct LoadedPage {
    page: PageNumber,
    records: Vec<Artwork>,
    total: usize,
}

/// Holds the most recently fetched page of records and the dataset total.
///
/// At most one page exists in memory at a time; installing a new page
/// replaces the previous one wholesale. A failed fetch never reaches
/// [`PageStore::install`], so prior contents survive it untouched.
#[derive(Debug, Default)]
pub struct PageStore {
    current: Option<LoadedPage>,
}

impl PageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held page with freshly fetched records.
    pub fn install(&mut self, page: PageNumber, records: Vec<Artwork>, total: usize) {
        self.current = Some(LoadedPage {
            page,
            records,
            total,
        });
    }

    /// Records of the loaded page, empty before the first fetch.
    pub fn records(&self) -> &[Artwork] {
        self.current.as_ref().map_or(&[], |p| p.records.as_slice())
    }

    /// Page number the held records belong to.
    pub fn page(&self) -> Option<PageNumber> {
        self.current.as_ref().map(|p| p.page)
    }

    /// Total record count reported by the catalog, 0 before the first fetch.
    pub fn total(&self) -> usize {
        self.current.as_ref().map_or(0, |p| p.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: u64) -> Artwork {
        Artwork {
            id,
            title: Some(format!("work {id}")),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    #[test]
    fn test_empty_store() {
        let store = PageStore::new();
        assert!(store.records().is_empty());
        assert_eq!(store.page(), None);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_install_replaces_previous_page() {
        let mut store = PageStore::new();
        store.install(0, vec![artwork(1), artwork(2)], 50);
        store.install(3, vec![artwork(40)], 50);

        assert_eq!(store.page(), Some(3));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id, 40);
        assert_eq!(store.total(), 50);
    }
}
