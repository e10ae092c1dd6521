//! Caching of the global row count.

/// Everything the global row count depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowCacheKey {
    /// `ListViewStore::version`
    pub store_version: u64,
    /// `BlockDocumentData::revision`
    pub document_revision: u64,
    /// `DocumentState::generation`
    pub document_generation: u64,
}

/// Cache for the visible row count of the whole tree.
///
/// Counting walks every expanded block, so the result is kept until the
/// expansion state or the document changes.
#[derive(Debug, Default)]
pub struct RowCountCache {
    key: Option<RowCacheKey>,
    total_rows: usize,
}

impl RowCountCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached count for `key`, computing it on a miss.
    ///
    /// # Arguments
    /// * `key` - Versions the count was derived from
    /// * `compute` - Counts the rows; only called when the key changed
    pub fn total_rows(&mut self, key: RowCacheKey, compute: impl FnOnce() -> usize) -> usize {
        if self.key != Some(key) {
            self.total_rows = compute();
            self.key = Some(key);
        }
        self.total_rows
    }

    /// Last computed count, if any.
    pub fn cached(&self) -> Option<usize> {
        self.key.map(|_| self.total_rows)
    }

    /// Drops the cached value.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.total_rows = 0;
    }
}
