/// Type alias for block IDs (stable identifiers assigned by the document)
pub type BlockId = u64;

/// Trait for reading block documents and returning BlockDocumentData
pub trait DocumentReader {
    /// Opens and parses a document, returning the in-memory block arena
    fn read(&self, file_path: &str) -> anyhow::Result<crate::document::BlockDocumentData>;
}

/// Trait for accessing document-level information
pub trait DocumentMetadata {
    /// Returns the document format version
    fn version(&self) -> String;

    /// Returns the header metadata object
    fn header_data(&self) -> &serde_json::Value;

    /// Returns the block count declared in the footer (if present)
    fn declared_blocks(&self) -> Option<usize>;
}

/// Trait for accessing a block hierarchy.
///
/// Documents are immutable for the duration of a render pass; the list view
/// only ever walks them top-down, starting from `root_ids`.
pub trait BlockDocument {
    type Metadata<'a>: DocumentMetadata where Self: 'a;
    type Block<'a>: BlockNode<'a> where Self: 'a;

    /// Returns metadata (header and footer information)
    fn metadata(&self) -> Self::Metadata<'_>;

    /// Returns the IDs of top-level blocks in document order
    fn root_ids(&self) -> Vec<BlockId>;

    /// Gets a block by ID
    fn get_block(&self, id: BlockId) -> Option<Self::Block<'_>>;

    /// Returns the total number of blocks in the document
    fn block_count(&self) -> usize;

    /// Resolves the top-level blocks.
    ///
    /// Yields `None` for any root ID that no longer resolves, leaving it to
    /// the renderer to drop the hole.
    fn root_blocks(&self) -> Vec<Option<Self::Block<'_>>> {
        self.root_ids()
            .into_iter()
            .map(|id| self.get_block(id))
            .collect()
    }
}

/// Trait for accessing a single block.
///
/// The lifetime parameter 'data represents the lifetime of the underlying
/// document storage, so children share the lifetime of their parent.
pub trait BlockNode<'data>: Clone {
    /// Returns the block ID
    fn id(&self) -> BlockId;

    /// Returns the block type name (e.g. `core/paragraph`)
    fn name(&self) -> &str;

    /// Returns the block attributes object
    fn attributes(&self) -> &serde_json::Value;

    /// Returns the parent ID (None for top-level blocks)
    fn parent_id(&self) -> Option<BlockId>;

    /// Returns the number of child slots
    fn num_children(&self) -> usize;

    /// Returns the child at the given slot, or None if the slot is empty
    fn child_at(&self, index: usize) -> Option<Self>;

    /// Returns the inner blocks with empty slots dropped
    fn children(&self) -> Vec<Self> {
        (0..self.num_children())
            .filter_map(|i| self.child_at(i))
            .collect()
    }

    /// Returns true if the block has at least one inner block
    fn has_children(&self) -> bool {
        (0..self.num_children()).any(|i| self.child_at(i).is_some())
    }
}
