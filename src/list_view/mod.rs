//! Collapsible, windowed list view over a block hierarchy.
//!
//! - `counter` - visible row counting
//! - `branch` - lazy windowed flattening into rows
//! - `row` - row descriptors and their notifiers
//! - `store` - host-side expansion, selection and drag state
//! - `host` - notifier interface between rows and the store

pub mod branch;
pub mod context;
pub mod counter;
pub mod host;
pub mod options;
pub mod row;
pub mod store;
pub mod window;

#[cfg(test)]
mod mock;

pub use branch::{render_branch, render_branch_from, render_document, BranchIter, BranchProps, BranchStart};
pub use context::ListViewContext;
pub use counter::{count_document_rows, count_tree_rows, count_visible_rows};
pub use host::{HostIntent, ListViewHost};
pub use options::{BranchOptions, ListViewSettings};
pub use row::{AppenderDescriptor, ListRow, RenderPriority, RowDescriptor, RowEvent, RowPadding};
pub use store::{DragState, ExpansionState, ListViewStore, SelectionSet};
pub use window::{WindowBounds, ITEM_HEIGHT};
