//! Host-side list view state.
//!
//! This module owns everything the renderer reads but never writes:
//! - Expansion state (absent entry means expanded)
//! - Selection set
//! - Drag state
//!
//! `ListViewStore` bundles them and bumps a version on every effective
//! mutation, so caches keyed on the version stay valid between frames.

use std::collections::{HashMap, HashSet};

use crate::list_view::context::ListViewContext;
use crate::list_view::host::{HostIntent, ListViewHost};
use crate::traits::BlockId;

/// Per-block expanded flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    entries: HashMap<BlockId, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded flag, if the block has one.
    pub fn get(&self, id: BlockId) -> Option<bool> {
        self.entries.get(&id).copied()
    }

    /// Returns the effective flag; blocks without an entry are expanded.
    pub fn is_expanded(&self, id: BlockId) -> bool {
        self.get(id).unwrap_or(true)
    }

    /// Records a flag.
    ///
    /// # Returns
    /// `true` if the recorded entry changed.
    pub fn set(&mut self, id: BlockId, expanded: bool) -> bool {
        self.entries.insert(id, expanded) != Some(expanded)
    }

    pub fn expand(&mut self, id: BlockId) -> bool {
        self.set(id, true)
    }

    pub fn collapse(&mut self, id: BlockId) -> bool {
        self.set(id, false)
    }

    /// Forgets every entry, returning all blocks to the expanded default.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(BlockId, bool)> for ExpansionState {
    fn from_iter<T: IntoIterator<Item = (BlockId, bool)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Currently selected blocks.
///
/// The first selected block is the primary selection shown in the details
/// panel; additional blocks come from ctrl-click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<BlockId>,
    primary: Option<BlockId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.ids.contains(&id)
    }

    pub fn primary(&self) -> Option<BlockId> {
        self.primary
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.ids.iter().copied()
    }

    /// Replaces the selection with a single block.
    ///
    /// # Returns
    /// `true` if the selection changed.
    pub fn select_only(&mut self, id: BlockId) -> bool {
        if self.primary == Some(id) && self.ids.len() == 1 {
            return false;
        }
        self.ids.clear();
        self.ids.insert(id);
        self.primary = Some(id);
        true
    }

    /// Adds or removes one block, keeping the rest of the selection.
    pub fn toggle(&mut self, id: BlockId) {
        if self.ids.remove(&id) {
            if self.primary == Some(id) {
                self.primary = self.ids.iter().min().copied();
            }
        } else {
            self.ids.insert(id);
            if self.primary.is_none() {
                self.primary = Some(id);
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.ids.is_empty();
        self.ids.clear();
        self.primary = None;
        changed
    }
}

impl FromIterator<BlockId> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = BlockId>>(iter: T) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            if !set.contains(id) {
                set.toggle(id);
            }
        }
        set
    }
}

/// The block currently being dragged, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    dragging_id: Option<BlockId>,
}

impl DragState {
    pub fn dragging_id(&self) -> Option<BlockId> {
        self.dragging_id
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_id.is_some()
    }

    pub fn start(&mut self, id: BlockId) -> bool {
        let changed = self.dragging_id != Some(id);
        self.dragging_id = Some(id);
        changed
    }

    /// Ends the drag of `id`. A stale end for another block is ignored.
    pub fn end(&mut self, id: BlockId) -> bool {
        if self.dragging_id == Some(id) {
            self.dragging_id = None;
            true
        } else {
            false
        }
    }
}

/// Versioned owner of expansion, selection and drag state.
#[derive(Debug, Clone, Default)]
pub struct ListViewStore {
    expansion: ExpansionState,
    selection: SelectionSet,
    drag: DragState,
    version: u64,
}

impl ListViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn dragging_id(&self) -> Option<BlockId> {
        self.drag.dragging_id()
    }

    /// Monotonic counter bumped on every effective mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Builds the read-only snapshot a render pass works from.
    pub fn context(&self, is_tree_grid_mounted: bool, use_animation: bool) -> ListViewContext<'_> {
        ListViewContext {
            expanded_state: &self.expansion,
            selected: &self.selection,
            is_tree_grid_mounted,
            use_animation,
        }
    }

    // ===== Mutations =====

    /// Adds or removes a block from a multi-selection.
    pub fn toggle_selection(&mut self, id: BlockId) {
        self.selection.toggle(id);
        log::debug!("Toggled selection of block {}", id);
        self.bump();
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.bump();
        }
    }

    /// Collapses every listed block.
    pub fn collapse_all<I: IntoIterator<Item = BlockId>>(&mut self, ids: I) {
        let mut changed = false;
        for id in ids {
            changed |= self.expansion.collapse(id);
        }
        if changed {
            log::debug!("Collapsed all blocks");
            self.bump();
        }
    }

    /// Drops every recorded expansion entry so all blocks are expanded again.
    pub fn expand_all(&mut self) {
        if !self.expansion.is_empty() {
            self.expansion.clear();
            log::debug!("Expanded all blocks");
            self.bump();
        }
    }

    /// Applies intents collected during a render pass, in order.
    pub fn apply(&mut self, intents: impl IntoIterator<Item = HostIntent>) {
        for intent in intents {
            intent.apply_to(self);
        }
    }

    /// Clears all state, e.g. when a new document is loaded.
    pub fn reset(&mut self) {
        self.expansion.clear();
        self.selection.clear();
        self.drag = DragState::default();
        self.bump();
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

impl ListViewHost for ListViewStore {
    fn select_block(&mut self, id: BlockId) {
        if self.selection.select_only(id) {
            log::debug!("Selected block {}", id);
            self.bump();
        }
    }

    fn expand(&mut self, id: BlockId) {
        if self.expansion.expand(id) {
            log::debug!("Expanded block {}", id);
            self.bump();
        }
    }

    fn collapse(&mut self, id: BlockId) {
        if self.expansion.collapse(id) {
            log::debug!("Collapsed block {}", id);
            self.bump();
        }
    }

    fn drag_start(&mut self, id: BlockId) {
        if self.drag.start(id) {
            log::debug!("Started dragging block {}", id);
            self.bump();
        }
    }

    fn drag_end(&mut self, id: BlockId) {
        if self.drag.end(id) {
            log::debug!("Stopped dragging block {}", id);
            self.bump();
        }
    }
}
