//! Grid controller implementation

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use ag_core::{page_count, project, PageNumber, Projection, SelectionTracker};
use ag_data::{Artwork, CatalogSource, IdentityIndex, PageStore};

/// Everything the rendering collaborator needs to draw one frame of the grid.
#[derive(Debug, Clone)]
pub struct GridSnapshot {
    /// Records of the current page, in catalog order.
    pub records: Vec<Artwork>,
    /// Total record count, for the pagination control.
    pub total: usize,
    /// Page the grid currently shows.
    pub page: PageNumber,
    /// Whether a fetch is outstanding.
    pub loading: bool,
    /// Selected records visible on the current page, ascending row order.
    pub selected: Vec<Artwork>,
    /// Whether the header select-all checkbox should render checked.
    pub select_all: bool,
}

/// Grid state guarded by one lock; never held across an await.
struct GridState {
    store: PageStore,
    index: IdentityIndex,
    tracker: SelectionTracker,
    current_page: PageNumber,
    loading: bool,
    /// Bumped by every page-change request; a fetch response is installed
    /// only if no newer request superseded it while it was in flight.
    fetch_seq: u64,
    /// Visible selection, recomputed after every mutation.
    visible: Projection,
}

/// The grid view-model: consumes widget events, produces [`GridSnapshot`]s.
pub struct GridController {
    source: Arc<dyn CatalogSource>,
    capacity: usize,
    state: Arc<RwLock<GridState>>,
}

impl GridController {
    /// Create a controller over a catalog source
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let capacity = source.page_capacity();
        info!(source = source.source_name(), capacity, "creating grid controller");
        Self {
            source,
            capacity,
            state: Arc::new(RwLock::new(GridState {
                store: PageStore::new(),
                index: IdentityIndex::new(),
                tracker: SelectionTracker::new(),
                current_page: 0,
                loading: false,
                fetch_seq: 0,
                visible: Projection {
                    row_positions: Vec::new(),
                    is_full_page: false,
                },
            })),
        }
    }

    /// Navigate to `page`, fetching it from the catalog.
    ///
    /// On failure the previous page, its records and the entire selection
    /// state stay intact; only the loading flag is cleared. A response that
    /// arrives after a newer page-change request is discarded, so rapid
    /// paging can never install a page the user has already left.
    pub async fn page_changed(&self, page: PageNumber) {
        let seq = {
            let mut state = self.state.write();
            state.loading = true;
            state.current_page = page;
            state.fetch_seq += 1;
            state.fetch_seq
        };

        match self.source.fetch_page(page).await {
            Ok(fetched) => {
                let state = &mut *self.state.write();
                if state.fetch_seq != seq {
                    warn!(page, "discarding superseded fetch response");
                    return;
                }
                state.store.install(page, fetched.records, fetched.total);
                // Index rebuild precedes any reconciliation for this page
                state.index.rebuild(page, state.store.records());
                state.loading = false;
                Self::reproject(state, self.capacity);
                info!(
                    page,
                    records = state.store.records().len(),
                    total = state.store.total(),
                    "page installed"
                );
            }
            Err(e) => {
                error!(page, error = %e, "catalog fetch failed");
                let mut state = self.state.write();
                if state.fetch_seq == seq {
                    state.loading = false;
                }
            }
        }
    }

    /// Fetch (or refetch) the current page.
    pub async fn refresh(&self) {
        let page = self.state.read().current_page;
        self.page_changed(page).await;
    }

    /// Navigate forward one page, clamped to the dataset's page count.
    pub async fn next_page(&self) {
        let (page, pages) = {
            let state = self.state.read();
            (
                state.current_page,
                page_count(state.store.total(), self.capacity),
            )
        };
        if page + 1 < pages {
            self.page_changed(page + 1).await;
        }
    }

    /// Navigate back one page.
    pub async fn previous_page(&self) {
        let page = self.state.read().current_page;
        if page > 0 {
            self.page_changed(page - 1).await;
        }
    }

    /// Reconcile a widget selection event against the current page.
    ///
    /// The widget reports selection by record identity; the tracker is keyed
    /// by row position so the selection survives a refetch that returns
    /// equal records as distinct values. Records that do not resolve against
    /// the current page (a stale event racing a page change) are skipped
    /// one by one rather than failing the event.
    pub fn selection_changed(&self, selected: &[Artwork]) {
        let state = &mut *self.state.write();
        let page = state.current_page;

        let mut positions = BTreeSet::new();
        for record in selected {
            match state.index.lookup(page, record.id) {
                Some(position) => {
                    positions.insert(position);
                }
                None => {
                    debug!(id = record.id, page, "skipping record absent from current page");
                }
            }
        }

        state.tracker.set_page_selection(page, positions);
        Self::reproject(state, self.capacity);
    }

    /// Select or clear every loaded row of the current page.
    pub fn select_all_toggled(&self, checked: bool) {
        let state = &mut *self.state.write();
        let positions: BTreeSet<usize> = if checked {
            (0..state.store.records().len()).collect()
        } else {
            BTreeSet::new()
        };
        state.tracker.set_page_selection(state.current_page, positions);
        Self::reproject(state, self.capacity);
    }

    /// Handle the free-text "select first N rows" submission.
    ///
    /// Non-numeric or non-positive input is a silent no-op. Valid input fans
    /// out across the tracker starting at the current page; pages beyond the
    /// current one are materialized visually only when navigated to.
    pub fn bulk_select(&self, input: &str) {
        let count = match input.trim().parse::<i64>() {
            Ok(n) if n > 0 => n as usize,
            Ok(n) => {
                debug!(input, n, "ignoring non-positive bulk selection");
                return;
            }
            Err(_) => {
                debug!(input, "ignoring non-numeric bulk selection");
                return;
            }
        };

        let state = &mut *self.state.write();
        state
            .tracker
            .apply_bulk_selection(state.current_page, count, self.capacity);
        Self::reproject(state, self.capacity);
    }

    /// Current outputs for the rendering collaborator.
    pub fn snapshot(&self) -> GridSnapshot {
        let state = self.state.read();
        let records = state.store.records();
        let selected = state
            .visible
            .row_positions
            .iter()
            .filter_map(|&pos| records.get(pos).cloned())
            .collect();

        GridSnapshot {
            records: records.to_vec(),
            total: state.store.total(),
            page: state.current_page,
            loading: state.loading,
            selected,
            select_all: state.visible.is_full_page,
        }
    }

    fn reproject(state: &mut GridState, capacity: usize) {
        let positions = state.tracker.page_selection(state.current_page);
        state.visible = project(&positions, state.store.records().len(), capacity);
    }
}
