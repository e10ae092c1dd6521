//! Row descriptors produced by the branch renderer.

use crate::list_view::host::ListViewHost;
use crate::traits::BlockId;

/// Scheduling hint for the host.
///
/// Selected rows should update synchronously; everything else may be
/// deferred or batched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPriority {
    Immediate,
    Deferred,
}

/// Vertical space reserved for rows skipped outside the window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RowPadding {
    pub top: f32,
    pub bottom: f32,
}

impl RowPadding {
    pub fn is_empty(&self) -> bool {
        self.top == 0.0 && self.bottom == 0.0
    }
}

/// Input event passed to row notifiers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowEvent {
    propagation_stopped: bool,
}

impl RowEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// One rendered block row.
#[derive(Debug, Clone)]
pub struct RowDescriptor<B> {
    pub block: B,
    pub id: BlockId,
    /// None at the root level.
    pub parent_id: Option<BlockId>,
    /// Nesting level, 1 at the root.
    pub level: usize,
    /// 1-based position among the rows of this branch.
    pub position: usize,
    /// Rows in this branch, including a trailing appender slot.
    pub row_count: usize,
    /// Blocks in this branch, without the appender.
    pub sibling_count: usize,
    /// 0-based index in the flattened visible tree.
    pub global_position: usize,
    /// None for blocks without a nested branch.
    pub is_expanded: Option<bool>,
    pub is_selected: bool,
    pub is_branch_selected: bool,
    pub is_last_of_selected_branch: bool,
    pub is_last_row_at_level: bool,
    /// Ancestor levels whose last row has already been drawn.
    pub terminated_levels: Vec<usize>,
    pub animate_toggle: bool,
    pub show_block_movers: bool,
    pub padding: RowPadding,
    pub render_priority: RenderPriority,
}

impl<B> RowDescriptor<B> {
    /// Reports a click on the row.
    pub fn select<H: ListViewHost + ?Sized>(&self, event: &mut RowEvent, host: &mut H) {
        event.stop_propagation();
        host.select_block(self.id);
    }

    /// Reports a click on the expander.
    ///
    /// Expanded rows ask to collapse, collapsed rows ask to expand, and rows
    /// without a nested branch ignore the call.
    pub fn toggle_expanded<H: ListViewHost + ?Sized>(&self, event: &mut RowEvent, host: &mut H) {
        event.stop_propagation();
        match self.is_expanded {
            Some(true) => host.collapse(self.id),
            Some(false) => host.expand(self.id),
            None => {}
        }
    }

    pub fn drag_start<H: ListViewHost + ?Sized>(&self, host: &mut H) {
        host.drag_start(self.id);
    }

    pub fn drag_end<H: ListViewHost + ?Sized>(&self, host: &mut H) {
        host.drag_end(self.id);
    }

    /// True if this row draws a connector down to a following sibling.
    pub fn has_following_sibling(&self) -> bool {
        !self.is_last_row_at_level
    }

    /// True if the guide line for ancestor `level` should still be drawn.
    pub fn continues_level(&self, level: usize) -> bool {
        !self.terminated_levels.contains(&level)
    }
}

/// Trailing "add block" row under a selected parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppenderDescriptor {
    pub parent_id: BlockId,
    pub level: usize,
    pub position: usize,
    pub row_count: usize,
    pub terminated_levels: Vec<usize>,
}

/// Anything the branch renderer emits.
#[derive(Debug, Clone)]
pub enum ListRow<B> {
    Block(RowDescriptor<B>),
    Appender(AppenderDescriptor),
}

impl<B> ListRow<B> {
    pub fn as_block(&self) -> Option<&RowDescriptor<B>> {
        match self {
            ListRow::Block(row) => Some(row),
            ListRow::Appender(_) => None,
        }
    }

    pub fn as_appender(&self) -> Option<&AppenderDescriptor> {
        match self {
            ListRow::Block(_) => None,
            ListRow::Appender(appender) => Some(appender),
        }
    }

    pub fn level(&self) -> usize {
        match self {
            ListRow::Block(row) => row.level,
            ListRow::Appender(appender) => appender.level,
        }
    }

    pub fn padding(&self) -> RowPadding {
        match self {
            ListRow::Block(row) => row.padding,
            ListRow::Appender(_) => RowPadding::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::host::HostIntent;
    use crate::list_view::store::ListViewStore;

    fn row(id: BlockId, is_expanded: Option<bool>) -> RowDescriptor<()> {
        RowDescriptor {
            block: (),
            id,
            parent_id: None,
            level: 1,
            position: 1,
            row_count: 1,
            sibling_count: 1,
            global_position: 0,
            is_expanded,
            is_selected: false,
            is_branch_selected: false,
            is_last_of_selected_branch: false,
            is_last_row_at_level: true,
            terminated_levels: vec![],
            animate_toggle: false,
            show_block_movers: false,
            padding: RowPadding::default(),
            render_priority: RenderPriority::Deferred,
        }
    }

    #[test]
    fn test_select_stops_propagation() {
        let mut event = RowEvent::new();
        let mut intents: Vec<HostIntent> = Vec::new();

        row(4, None).select(&mut event, &mut intents);

        assert!(event.is_propagation_stopped());
        assert_eq!(intents, vec![HostIntent::SelectBlock(4)]);
    }

    #[test]
    fn test_toggle_flips_expansion() {
        let mut intents: Vec<HostIntent> = Vec::new();
        row(1, Some(true)).toggle_expanded(&mut RowEvent::new(), &mut intents);
        row(2, Some(false)).toggle_expanded(&mut RowEvent::new(), &mut intents);

        assert_eq!(intents, vec![HostIntent::Collapse(1), HostIntent::Expand(2)]);
    }

    #[test]
    fn test_toggle_on_leaf_is_noop() {
        let mut store = ListViewStore::new();
        let before = store.version();
        let mut event = RowEvent::new();

        row(1, None).toggle_expanded(&mut event, &mut store);

        assert!(event.is_propagation_stopped());
        assert_eq!(store.version(), before);
        assert_eq!(store.expansion().get(1), None);
    }

    #[test]
    fn test_drag_notifiers_report_own_id() {
        let mut store = ListViewStore::new();
        let r = row(9, None);

        r.drag_start(&mut store);
        assert_eq!(store.dragging_id(), Some(9));

        r.drag_end(&mut store);
        assert_eq!(store.dragging_id(), None);
    }

    #[test]
    fn test_guide_levels() {
        let mut r = row(1, None);
        r.terminated_levels = vec![1, 3];
        r.is_last_row_at_level = false;

        assert!(!r.continues_level(1));
        assert!(r.continues_level(2));
        assert!(r.has_following_sibling());
    }
}
