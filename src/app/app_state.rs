//! Centralized application state for the list viewer.
//!
//! Focused state components each manage one aspect of the viewer, which
//! keeps invariants local and lets panels borrow them independently.

use crate::cache::{RowCacheKey, RowCountCache};
use crate::state::{DocumentState, LayoutState, ViewportState};
use rlistview::{count_document_rows, ListViewSettings, ListViewStore};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Loaded document and its source
    pub document: DocumentState,

    /// Expansion, selection and drag state
    pub store: ListViewStore,

    /// Scroll position of the list panel
    pub viewport: ViewportState,

    /// Panel split
    pub layout: LayoutState,

    /// Rendering options chosen in the header
    pub settings: ListViewSettings,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Global row count cache
    pub row_cache: RowCountCache,

    /// Set after the first frame that showed the current document
    pub tree_grid_mounted: bool,

    /// Seed for the next virtual document
    pub next_virtual_seed: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(ListViewSettings::default(), LayoutState::new())
    }

    /// Creates a new AppState with settings loaded from storage.
    pub fn with_settings(settings: ListViewSettings, layout: LayoutState) -> Self {
        Self {
            document: DocumentState::new(),
            store: ListViewStore::new(),
            viewport: ViewportState::new(),
            layout,
            settings,
            error_message: None,
            row_cache: RowCountCache::new(),
            tree_grid_mounted: false,
            next_virtual_seed: 42,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets document-related state before a new document is shown.
    pub fn reset_document_state(&mut self) {
        self.document.clear();
        self.store.reset();
        self.viewport.reset();
        self.row_cache.invalidate();
        self.tree_grid_mounted = false;
        self.error_message = None;
    }

    /// Visible rows of the whole tree (cached).
    pub fn global_row_count(&mut self) -> usize {
        let Some(doc) = self.document.document() else {
            return 0;
        };
        let key = RowCacheKey {
            store_version: self.store.version(),
            document_revision: doc.revision(),
            document_generation: self.document.generation(),
        };
        let expansion = self.store.expansion();
        self.row_cache.total_rows(key, || count_document_rows(doc, expansion))
    }
}
