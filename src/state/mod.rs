//! State management modules for the list viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Document state (loaded document and its source)
//! - Viewport state (scroll position, window measurement)
//! - Layout state (panel split)
//!
//! Expansion, selection and drag state live in `rlistview::ListViewStore`.

mod document_state;
mod viewport;
mod layout_state;

pub use document_state::{DocumentSource, DocumentState};
pub use viewport::ViewportState;
pub use layout_state::LayoutState;
