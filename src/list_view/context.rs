use crate::list_view::store::{ExpansionState, SelectionSet};
use crate::traits::BlockId;

/// Read-only snapshot of host state for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct ListViewContext<'s> {
    pub expanded_state: &'s ExpansionState,
    pub selected: &'s SelectionSet,
    /// Set once the list has been shown at least once; suppresses
    /// animation on first mount.
    pub is_tree_grid_mounted: bool,
    pub use_animation: bool,
}

impl<'s> ListViewContext<'s> {
    pub fn new(expanded_state: &'s ExpansionState, selected: &'s SelectionSet) -> Self {
        Self {
            expanded_state,
            selected,
            is_tree_grid_mounted: false,
            use_animation: false,
        }
    }

    pub fn is_selected(&self, id: BlockId) -> bool {
        self.selected.contains(id)
    }
}
