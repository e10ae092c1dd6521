pub mod traits;
pub mod document;
pub mod writer;
pub mod generator;
pub mod name_intern;
pub mod list_view;

// Export traits
pub use traits::{
    DocumentReader, DocumentMetadata, BlockDocument, BlockNode, BlockId
};

// Export JSON Lines implementation
pub use document::{
    JsonlDocumentReader, BlockDocumentData, BlockRef, BlockRecord,
    DocumentError, DocumentHeader, DocumentFooter, DocumentInfo, MoveDirection,
    parse_document, parse_document_str, parse_document_from_reader
};

// Export virtual implementation
pub use generator::VirtualDocumentReader;

pub use writer::DocumentWriter;

// Export list view core
pub use list_view::{
    render_branch, render_branch_from, render_document, BranchIter, BranchProps, BranchStart,
    count_document_rows, count_tree_rows, count_visible_rows,
    ListViewContext, ListViewHost, HostIntent, BranchOptions, ListViewSettings,
    ListRow, RowDescriptor, AppenderDescriptor, RowEvent, RowPadding, RenderPriority,
    ListViewStore, ExpansionState, SelectionSet, DragState, WindowBounds, ITEM_HEIGHT
};

// Export name interning utility
pub use name_intern::NameInterner;
