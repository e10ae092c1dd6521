//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like document loading, error
//! handling, and applying the intents reported by list rows.

use crate::app::AppState;
use crate::io::{file_loader, AsyncLoader, LoadResult};
use crate::state::DocumentSource;
use rlistview::{BlockDocument, BlockId, BlockNode, HostIntent, ListViewHost, MoveDirection};
use std::path::PathBuf;

/// Block type inserted by the appender row.
const APPENDED_BLOCK_NAME: &str = "core/paragraph";

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous file loading.
    ///
    /// Immediately clears the previous document to show the loading indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        if !file_loader::is_supported_document(&path) {
            log::warn!("Opening {} with an unrecognized extension as JSON Lines", path.display());
        }
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Checks for loading completion and applies results to application state.
    ///
    /// Called once per frame in the update loop.
    /// Returns true if a load operation completed (success or error).
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success { data, path } => {
                state.reset_document_state();
                state.document.load(data, DocumentSource::File(path));
                true
            }
            LoadResult::Error(error_msg) => {
                log::error!("Failed to load document: {}", error_msg);
                state.error_message = Some(format!("Error loading document: {}", error_msg));
                state.document.clear();
                true
            }
            LoadResult::None => false,
        }
    }

    /// Generates and shows a virtual document.
    ///
    /// Each call uses the next seed, so repeated clicks give new documents.
    pub fn open_virtual_document(state: &mut AppState, loader: &AsyncLoader) {
        let seed = state.next_virtual_seed;
        match loader.load_virtual_document(seed) {
            Ok(data) => {
                state.reset_document_state();
                state.document.load(data, DocumentSource::Virtual { seed });
                state.next_virtual_seed += 1;
            }
            Err(e) => {
                log::error!("Failed to generate virtual document: {}", e);
                state.error_message = Some(format!("Error generating virtual document: {}", e));
            }
        }
    }

    /// Applies notifier calls collected during the last render pass.
    pub fn apply_intents(state: &mut AppState, intents: Vec<HostIntent>) {
        state.store.apply(intents);
    }

    /// Adds or removes a block from the selection (ctrl-click).
    pub fn toggle_selection(state: &mut AppState, id: BlockId) {
        state.store.toggle_selection(id);
    }

    /// Swaps a block with its neighbour.
    pub fn move_block(state: &mut AppState, id: BlockId, direction: MoveDirection) {
        let Some(doc) = state.document.document_mut() else {
            return;
        };
        match doc.move_block(id, direction) {
            Ok(true) => log::debug!("Moved block {} {:?}", id, direction),
            Ok(false) => {}
            Err(e) => state.error_message = Some(e.to_string()),
        }
    }

    /// Appends a paragraph to `parent_id` and selects it.
    pub fn append_block(state: &mut AppState, parent_id: BlockId) {
        let Some(doc) = state.document.document_mut() else {
            return;
        };
        match doc.append_block(Some(parent_id), APPENDED_BLOCK_NAME, serde_json::json!({})) {
            Ok(id) => {
                log::debug!("Appended block {} to {}", id, parent_id);
                state.store.select_block(id);
            }
            Err(e) => state.error_message = Some(e.to_string()),
        }
    }

    /// Collapses every block that has inner blocks.
    pub fn collapse_all(state: &mut AppState) {
        let Some(doc) = state.document.document() else {
            return;
        };
        let parents: Vec<BlockId> = doc
            .blocks_in_order()
            .iter()
            .filter(|block| block.num_children() > 0)
            .map(|block| block.id())
            .collect();
        state.store.collapse_all(parents);
    }

    /// Returns every block to the expanded default.
    pub fn expand_all(state: &mut AppState) {
        state.store.expand_all();
    }

    /// Drops the selection when the selected blocks no longer exist.
    pub fn prune_selection(state: &mut AppState) {
        let Some(doc) = state.document.document() else {
            return;
        };
        let stale = state
            .store
            .selection()
            .iter()
            .any(|id| doc.get_block(id).is_none());
        if stale {
            state.store.clear_selection();
        }
    }
}
