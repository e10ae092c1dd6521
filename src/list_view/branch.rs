//! Windowed, lazy flattening of a block tree into list rows.
//!
//! The renderer walks siblings in order while threading a running global
//! row position. Rows inside the window are emitted; rows before it are only
//! counted; once a sibling lands past the window the rest of that sibling
//! sequence is abandoned. Nested branches are expanded with an explicit
//! stack rather than recursion, so the output is a plain iterator that can
//! be dropped at any point.

use std::marker::PhantomData;

use crate::list_view::context::ListViewContext;
use crate::list_view::counter::count_visible_rows;
use crate::list_view::options::BranchOptions;
use crate::list_view::row::{AppenderDescriptor, ListRow, RenderPriority, RowDescriptor, RowPadding};
use crate::list_view::window::WindowBounds;
use crate::traits::{BlockDocument, BlockId, BlockNode};

/// Inputs shared by every branch of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct BranchProps<'s> {
    pub context: ListViewContext<'s>,
    pub options: BranchOptions,
    /// None disables windowing: every row is in view.
    pub window: Option<WindowBounds>,
    /// Visible rows in the whole tree, for trailing padding.
    pub global_row_count: usize,
    pub dragging_id: Option<BlockId>,
}

/// Where a branch sits in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchStart {
    /// None marks the root branch.
    pub parent_id: Option<BlockId>,
    pub level: usize,
    pub terminated_levels: Vec<usize>,
    pub is_branch_selected: bool,
    pub is_last_of_branch: bool,
    pub animate_toggle_open: bool,
    /// Global position of the first sibling.
    pub list_position: usize,
}

impl BranchStart {
    pub fn root() -> Self {
        Self {
            parent_id: None,
            level: 1,
            terminated_levels: Vec::new(),
            is_branch_selected: false,
            is_last_of_branch: false,
            animate_toggle_open: false,
            list_position: 0,
        }
    }
}

impl Default for BranchStart {
    fn default() -> Self {
        Self::root()
    }
}

/// One sibling sequence being walked.
struct BranchFrame<B> {
    blocks: Vec<B>,
    next_index: usize,
    /// Global position of the sibling most recently reached.
    position: usize,
    /// Set when traversal moved past the window.
    stopped: bool,
    has_appender: bool,
    start: BranchStart,
}

impl<B> BranchFrame<B> {
    fn row_count(&self) -> usize {
        self.blocks.len() + usize::from(self.has_appender)
    }

    fn is_exhausted(&self) -> bool {
        self.stopped || self.next_index >= self.blocks.len()
    }
}

/// Iterator over the rows of a branch and all its visible descendants.
///
/// Rows come out in depth-first pre-order. A branch's appender row follows
/// the last row of that branch's subtree.
pub struct BranchIter<'s, 'a, B: BlockNode<'a>> {
    stack: Vec<BranchFrame<B>>,
    props: BranchProps<'s>,
    _phantom: PhantomData<&'a ()>,
}

impl<'s, 'a, B: BlockNode<'a>> BranchIter<'s, 'a, B> {
    fn new<I>(blocks: I, props: BranchProps<'s>, start: BranchStart) -> Self
    where
        I: IntoIterator<Item = Option<B>>,
    {
        let frame = new_frame(&props, blocks, start);
        BranchIter {
            stack: vec![frame],
            props,
            _phantom: PhantomData,
        }
    }

    /// Current nesting depth of the walk (number of open branches).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Appender rows show only under a selected, non-root parent.
fn item_has_appender(props: &BranchProps<'_>, parent_id: Option<BlockId>) -> bool {
    props.options.show_appender && parent_id.is_some_and(|id| props.context.is_selected(id))
}

fn new_frame<'a, B, I>(props: &BranchProps<'_>, blocks: I, start: BranchStart) -> BranchFrame<B>
where
    B: BlockNode<'a>,
    I: IntoIterator<Item = Option<B>>,
{
    // Empty slots are dropped before indexing.
    let blocks: Vec<B> = blocks.into_iter().flatten().collect();
    BranchFrame {
        has_appender: item_has_appender(props, start.parent_id),
        position: start.list_position,
        next_index: 0,
        stopped: false,
        blocks,
        start,
    }
}

fn boundary_padding(window: Option<WindowBounds>, position: usize, global_row_count: usize) -> RowPadding {
    let Some(window) = window else {
        return RowPadding::default();
    };

    let mut padding = RowPadding::default();
    if position == window.start {
        padding.top = window.top_padding();
    }
    if global_row_count > window.end() && position == window.end() {
        padding.bottom = window.bottom_padding(global_row_count);
    }
    padding
}

impl<'s, 'a, B: BlockNode<'a>> Iterator for BranchIter<'s, 'a, B> {
    type Item = ListRow<B>;

    fn next(&mut self) -> Option<Self::Item> {
        let props = &self.props;
        let expanded_state = props.context.expanded_state;

        loop {
            let frame = self.stack.last_mut()?;

            if frame.is_exhausted() {
                // The appender is emitted even when the loop stopped early.
                let row_count = frame.row_count();
                let frame = self.stack.pop()?;
                if let (true, Some(parent_id)) = (frame.has_appender, frame.start.parent_id) {
                    return Some(ListRow::Appender(AppenderDescriptor {
                        parent_id,
                        level: frame.start.level,
                        position: row_count,
                        row_count,
                        terminated_levels: frame.start.terminated_levels,
                    }));
                }
                continue;
            }

            let index = frame.next_index;
            frame.next_index += 1;
            if index > 0 {
                frame.position += count_visible_rows(&frame.blocks[index - 1], expanded_state);
            }
            let global_position = frame.position;

            let in_view = props.window.map_or(true, |w| w.contains(global_position));
            if props.window.is_some_and(|w| w.is_past(global_position)) {
                frame.stopped = true;
                continue;
            }

            let block = frame.blocks[index].clone();
            let id = block.id();
            let level = frame.start.level;
            let sibling_count = frame.blocks.len();
            let row_count = frame.row_count();
            let position = index + 1;

            let is_last_row_at_level = row_count == position;
            let has_nested_blocks = props.options.show_nested_blocks && block.num_children() > 0;
            let has_nested_branch = has_nested_blocks || item_has_appender(props, Some(id));

            let is_selected = props.context.is_selected(id);
            let is_branch_selected = frame.start.is_branch_selected || (is_selected && has_nested_branch);
            let is_last_block = index + 1 == sibling_count;
            let is_last = is_selected || (frame.start.is_last_of_branch && is_last_block);
            let is_last_of_selected_branch =
                frame.start.is_last_of_branch && !has_nested_branch && is_last_block;

            let is_expanded = has_nested_branch.then(|| expanded_state.is_expanded(id));
            let is_dragged = props.dragging_id == Some(id);

            // No animation on first mount, or for blocks never toggled.
            let animate_toggle = props.context.use_animation
                && (frame.start.animate_toggle_open
                    || (is_expanded == Some(true)
                        && props.context.is_tree_grid_mounted
                        && expanded_state.get(id).is_some()));

            let row = (in_view && !is_dragged).then(|| {
                ListRow::Block(RowDescriptor {
                    block: block.clone(),
                    id,
                    parent_id: frame.start.parent_id,
                    level,
                    position,
                    row_count,
                    sibling_count,
                    global_position,
                    is_expanded,
                    is_selected,
                    is_branch_selected,
                    is_last_of_selected_branch,
                    is_last_row_at_level,
                    terminated_levels: frame.start.terminated_levels.clone(),
                    animate_toggle,
                    show_block_movers: props.options.show_block_movers,
                    padding: boundary_padding(props.window, global_position, props.global_row_count),
                    render_priority: if is_selected {
                        RenderPriority::Immediate
                    } else {
                        RenderPriority::Deferred
                    },
                })
            });

            if has_nested_branch && is_expanded == Some(true) && !is_dragged {
                let mut terminated_levels = frame.start.terminated_levels.clone();
                if is_last_row_at_level {
                    terminated_levels.push(level);
                }
                let start = BranchStart {
                    parent_id: Some(id),
                    level: level + 1,
                    terminated_levels,
                    is_branch_selected,
                    is_last_of_branch: is_last,
                    animate_toggle_open: animate_toggle,
                    list_position: global_position + 1,
                };
                let children = (0..block.num_children()).map(|i| block.child_at(i));
                let child_frame = new_frame(props, children, start);
                self.stack.push(child_frame);
            }

            if row.is_some() {
                return row;
            }
        }
    }
}

/// Renders a root branch.
///
/// # Arguments
/// * `blocks` - Top-level blocks in order; `None` entries are dropped
/// * `props` - State snapshot, options and window for this pass
///
/// # Returns
/// A lazy iterator of rows. Calling again with the same inputs yields the
/// same rows.
pub fn render_branch<'s, 'a, B, I>(blocks: I, props: BranchProps<'s>) -> BranchIter<'s, 'a, B>
where
    B: BlockNode<'a>,
    I: IntoIterator<Item = Option<B>>,
{
    render_branch_from(blocks, props, BranchStart::root())
}

/// Renders a branch that starts somewhere inside the tree.
pub fn render_branch_from<'s, 'a, B, I>(
    blocks: I,
    props: BranchProps<'s>,
    start: BranchStart,
) -> BranchIter<'s, 'a, B>
where
    B: BlockNode<'a>,
    I: IntoIterator<Item = Option<B>>,
{
    BranchIter::new(blocks, props, start)
}

/// Renders the top-level blocks of a document.
pub fn render_document<'s, 'd, D: BlockDocument>(
    doc: &'d D,
    props: BranchProps<'s>,
) -> BranchIter<'s, 'd, D::Block<'d>> {
    render_branch(doc.root_blocks(), props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::counter::count_tree_rows;
    use crate::list_view::mock::{branch, branch_with_holes, leaf, leaves, MockBlock};
    use crate::list_view::store::{ExpansionState, SelectionSet};
    use crate::list_view::window::ITEM_HEIGHT;

    fn props<'s>(
        expanded: &'s ExpansionState,
        selected: &'s SelectionSet,
        window: Option<WindowBounds>,
        global_row_count: usize,
    ) -> BranchProps<'s> {
        BranchProps {
            context: ListViewContext::new(expanded, selected),
            options: BranchOptions::default(),
            window,
            global_row_count,
            dragging_id: None,
        }
    }

    fn roots(blocks: &[MockBlock]) -> Vec<Option<&MockBlock>> {
        blocks.iter().map(Some).collect()
    }

    fn block_rows<'a>(rows: Vec<ListRow<&'a MockBlock>>) -> Vec<RowDescriptor<&'a MockBlock>> {
        rows.into_iter()
            .filter_map(|r| match r {
                ListRow::Block(row) => Some(row),
                ListRow::Appender(_) => None,
            })
            .collect()
    }

    fn sample_tree() -> Vec<MockBlock> {
        // 1 -> [2 -> [4, 5], 3], 6, 7 -> [8]
        vec![
            branch(1, vec![branch(2, vec![leaf(4), leaf(5)]), leaf(3)]),
            leaf(6),
            branch(7, vec![leaf(8)]),
        ]
    }

    #[test]
    fn test_full_tree_positions_are_preorder() {
        let tree = sample_tree();
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let total = count_tree_rows(roots(&tree), &expanded);

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, None, total)).collect());

        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        let positions: Vec<usize> = rows.iter().map(|r| r.global_position).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 3, 6, 7, 8]);
        assert_eq!(positions, (0..total).collect::<Vec<_>>());

        let levels: Vec<usize> = rows.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 3, 2, 1, 1, 2]);
        assert!(rows.iter().all(|r| r.padding.is_empty()));
    }

    #[test]
    fn test_collapsed_branch_skips_children_but_counts_one_row() {
        let tree = sample_tree();
        let expanded: ExpansionState = [(2, false)].into_iter().collect();
        let selected = SelectionSet::new();

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, None, 0)).collect());

        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 6, 7, 8]);
        let positions: Vec<usize> = rows.iter().map(|r| r.global_position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(rows[1].is_expanded, Some(false));
        assert_eq!(rows[0].is_expanded, Some(true));
        assert_eq!(rows[2].is_expanded, None);
    }

    #[test]
    fn test_window_on_flat_list() {
        let tree = leaves(0, 10);
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let window = WindowBounds::new(2, 3);

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, Some(window), 10)).collect());

        let positions: Vec<usize> = rows.iter().map(|r| r.global_position).collect();
        assert_eq!(positions, vec![2, 3, 4, 5]);

        assert_eq!(rows[0].padding.top, 2.0 * ITEM_HEIGHT);
        assert_eq!(rows[0].padding.bottom, 0.0);
        assert_eq!(rows[3].padding.bottom, 4.0 * ITEM_HEIGHT);
        assert_eq!(rows[3].padding.top, 0.0);
        assert!(rows[1].padding.is_empty() && rows[2].padding.is_empty());
    }

    #[test]
    fn test_window_past_the_end_renders_nothing() {
        let tree = leaves(0, 4);
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let window = WindowBounds::new(10, 5);

        let rows: Vec<_> = render_branch(roots(&tree), props(&expanded, &selected, Some(window), 4)).collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_early_exit_does_not_enter_collapsed_subtree() {
        let tree = vec![
            branch(1, leaves(100, 50)),
            leaf(2),
            leaf(3),
            leaf(4),
            branch(5, leaves(200, 5)),
        ];
        let expanded: ExpansionState = [(1, false)].into_iter().collect();
        let selected = SelectionSet::new();
        let window = WindowBounds::new(0, 2);
        let total = count_tree_rows(roots(&tree), &expanded);
        assert_eq!(total, 10);
        // Counting reads the expanded branch; only the render pass is measured.
        for block in &tree {
            block.child_reads.set(0);
        }

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, Some(window), total)).collect());

        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(tree[0].child_reads.get(), 0);
        assert_eq!(tree[4].child_reads.get(), 0);
        // Ten rows in total, the window ends at position 2.
        assert_eq!(rows[2].padding.bottom, 7.0 * ITEM_HEIGHT);
    }

    #[test]
    fn test_early_exit_stops_outer_siblings_after_large_branch() {
        let tree = vec![branch(1, leaves(100, 50)), branch(2, leaves(200, 5))];
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let window = WindowBounds::new(0, 2);

        let mut iter = render_branch(roots(&tree), props(&expanded, &selected, Some(window), 57));
        let ids: Vec<BlockId> = iter
            .by_ref()
            .filter_map(|r| r.as_block().map(|row| row.id))
            .collect();

        assert_eq!(ids, vec![1, 100, 101]);
        assert_eq!(iter.depth(), 0);
        assert_eq!(tree[1].child_reads.get(), 0);
    }

    #[test]
    fn test_rows_before_window_are_counted_not_emitted() {
        let tree = sample_tree();
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let window = WindowBounds::new(3, 1);

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, Some(window), 8)).collect());

        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 3]);
        assert_eq!(rows[0].global_position, 3);
        assert_eq!(rows[0].padding.top, 3.0 * ITEM_HEIGHT);
        assert_eq!(rows[1].padding.bottom, 3.0 * ITEM_HEIGHT);
    }

    #[test]
    fn test_empty_slots_are_dropped_before_indexing() {
        let a = leaf(1);
        let b = leaf(2);
        let blocks = vec![None, Some(&a), None, Some(&b)];
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();

        let rows = block_rows(render_branch(blocks, props(&expanded, &selected, None, 2)).collect());

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].global_position), (1, 0));
        assert_eq!((rows[1].position, rows[1].global_position), (2, 1));
        assert_eq!(rows[1].sibling_count, 2);
        assert!(rows[1].is_last_row_at_level);
    }

    #[test]
    fn test_nested_holes_are_dropped() {
        let tree = vec![branch_with_holes(1, vec![None, Some(leaf(2))])];
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, None, 2)).collect());
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[1].position, 1);
        assert_eq!(rows[1].parent_id, Some(1));
    }

    #[test]
    fn test_empty_root_renders_nothing() {
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let rows: Vec<ListRow<&MockBlock>> =
            render_branch(Vec::new(), props(&expanded, &selected, None, 0)).collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_appender_under_selected_parent() {
        let tree = vec![branch(1, vec![leaf(2), leaf(3)]), leaf(4)];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [1].into_iter().collect();

        let rows: Vec<_> = render_branch(roots(&tree), props(&expanded, &selected, None, 4)).collect();

        assert_eq!(rows.len(), 5);
        let appender = rows[3].as_appender().expect("appender after children");
        assert_eq!(appender.parent_id, 1);
        assert_eq!(appender.level, 2);
        assert_eq!(appender.position, 3);
        assert_eq!(appender.row_count, 3);
        assert_eq!(rows[4].as_block().map(|r| r.id), Some(4));

        // Children see the appender slot in their row count.
        let child = rows[2].as_block().unwrap();
        assert_eq!(child.row_count, 3);
        assert_eq!(child.sibling_count, 2);
        assert!(!child.is_last_row_at_level);
    }

    #[test]
    fn test_selected_leaf_gets_nested_appender() {
        let tree = vec![branch(1, vec![leaf(2)])];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [2].into_iter().collect();

        let rows: Vec<_> = render_branch(roots(&tree), props(&expanded, &selected, None, 2)).collect();

        let leaf_row = rows[1].as_block().unwrap();
        assert_eq!(leaf_row.is_expanded, Some(true));
        let appender = rows[2].as_appender().unwrap();
        assert_eq!((appender.parent_id, appender.level, appender.position), (2, 3, 1));
    }

    #[test]
    fn test_no_appender_at_root_or_when_disabled() {
        let tree = vec![branch(1, vec![leaf(2)]), leaf(3)];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [3].into_iter().collect();

        let mut p = props(&expanded, &selected, None, 3);
        let rows: Vec<_> = render_branch(roots(&tree), p).collect();
        // Selected root-level leaf gets its own nested appender, the root branch does not.
        assert_eq!(rows.iter().filter(|r| r.as_appender().is_some()).count(), 1);
        assert_eq!(rows.last().and_then(|r| r.as_appender()).map(|a| a.parent_id), Some(3));

        p.options.show_appender = false;
        let rows: Vec<_> = render_branch(roots(&tree), p).collect();
        assert!(rows.iter().all(|r| r.as_appender().is_none()));
        assert_eq!(rows.last().and_then(|r| r.as_block()).map(|r| r.is_expanded), Some(None));
    }

    #[test]
    fn test_appender_emitted_after_early_exit() {
        let tree = vec![branch(1, leaves(10, 10))];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [1].into_iter().collect();
        let window = WindowBounds::new(0, 2);

        let rows: Vec<_> = render_branch(roots(&tree), props(&expanded, &selected, Some(window), 11)).collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].as_appender().map(|a| a.position), Some(11));
    }

    #[test]
    fn test_dragged_block_and_subtree_are_hidden() {
        let tree = sample_tree();
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let mut p = props(&expanded, &selected, None, 8);
        p.dragging_id = Some(2);

        let rows = block_rows(render_branch(roots(&tree), p).collect());

        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 6, 7, 8]);
        // Positions still account for the dragged subtree.
        assert_eq!(rows[1].global_position, 4);
    }

    #[test]
    fn test_terminated_levels_and_last_rows() {
        let tree = vec![leaf(1), branch(2, vec![leaf(3), branch(4, vec![leaf(5)])])];
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();

        let rows = block_rows(render_branch(roots(&tree), props(&expanded, &selected, None, 5)).collect());

        let last: Vec<bool> = rows.iter().map(|r| r.is_last_row_at_level).collect();
        assert_eq!(last, vec![false, true, false, true, true]);

        assert_eq!(rows[2].terminated_levels, vec![1]);
        assert_eq!(rows[3].terminated_levels, vec![1]);
        assert_eq!(rows[4].terminated_levels, vec![1, 2]);
        assert!(!rows[4].continues_level(2));
    }

    #[test]
    fn test_selected_branch_flags() {
        let tree = vec![branch(1, vec![leaf(2), leaf(3)]), leaf(4)];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [1].into_iter().collect();
        let mut p = props(&expanded, &selected, None, 4);
        p.options.show_appender = false;

        let rows = block_rows(render_branch(roots(&tree), p).collect());

        let branch_selected: Vec<bool> = rows.iter().map(|r| r.is_branch_selected).collect();
        assert_eq!(branch_selected, vec![true, true, true, false]);

        let last_of_selected: Vec<bool> = rows.iter().map(|r| r.is_last_of_selected_branch).collect();
        assert_eq!(last_of_selected, vec![false, false, true, false]);

        assert_eq!(rows[0].render_priority, RenderPriority::Immediate);
        assert_eq!(rows[1].render_priority, RenderPriority::Deferred);
    }

    #[test]
    fn test_selected_leaf_is_not_branch_selected() {
        let tree = vec![leaf(1)];
        let expanded = ExpansionState::new();
        let selected: SelectionSet = [1].into_iter().collect();
        let mut p = props(&expanded, &selected, None, 1);
        p.options.show_appender = false;

        let rows = block_rows(render_branch(roots(&tree), p).collect());
        assert!(rows[0].is_selected);
        assert!(!rows[0].is_branch_selected);
        assert_eq!(rows[0].is_expanded, None);
    }

    #[test]
    fn test_animation_requires_mount_and_recorded_state() {
        let tree = vec![branch(1, vec![branch(2, vec![leaf(3)])]), branch(4, vec![leaf(5)])];
        let expanded: ExpansionState = [(1, true)].into_iter().collect();
        let selected = SelectionSet::new();
        let mut p = props(&expanded, &selected, None, 5);
        p.context.use_animation = true;

        let rows = block_rows(render_branch(roots(&tree), p).collect());
        assert!(rows.iter().all(|r| !r.animate_toggle), "not mounted yet");

        p.context.is_tree_grid_mounted = true;
        let rows = block_rows(render_branch(roots(&tree), p).collect());
        let animated: Vec<(BlockId, bool)> = rows.iter().map(|r| (r.id, r.animate_toggle)).collect();
        // 1 has a recorded entry, its descendants inherit; 4 was never toggled.
        assert_eq!(animated, vec![(1, true), (2, true), (3, true), (4, false), (5, false)]);

        p.context.use_animation = false;
        let rows = block_rows(render_branch(roots(&tree), p).collect());
        assert!(rows.iter().all(|r| !r.animate_toggle));
    }

    #[test]
    fn test_hidden_nested_blocks() {
        let tree = sample_tree();
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let mut p = props(&expanded, &selected, None, 8);
        p.options.show_nested_blocks = false;

        let rows = block_rows(render_branch(roots(&tree), p).collect());
        let ids: Vec<BlockId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 6, 7]);
        assert!(rows.iter().all(|r| r.is_expanded.is_none()));
    }

    #[test]
    fn test_render_is_restartable() {
        let tree = sample_tree();
        let expanded: ExpansionState = [(7, false)].into_iter().collect();
        let selected: SelectionSet = [2].into_iter().collect();
        let window = Some(WindowBounds::new(1, 3));
        let p = props(&expanded, &selected, window, 7);

        let first: Vec<(BlockId, usize)> = block_rows(render_branch(roots(&tree), p).collect())
            .iter()
            .map(|r| (r.id, r.global_position))
            .collect();
        let second: Vec<(BlockId, usize)> = block_rows(render_branch(roots(&tree), p).collect())
            .iter()
            .map(|r| (r.id, r.global_position))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_start() {
        let children = vec![leaf(10), leaf(11)];
        let expanded = ExpansionState::new();
        let selected = SelectionSet::new();
        let start = BranchStart {
            parent_id: Some(1),
            level: 3,
            terminated_levels: vec![1],
            list_position: 20,
            ..BranchStart::root()
        };

        let rows = block_rows(render_branch_from(roots(&children), props(&expanded, &selected, None, 0), start).collect());
        assert_eq!(rows[0].global_position, 20);
        assert_eq!(rows[1].global_position, 21);
        assert_eq!(rows[1].level, 3);
        assert_eq!(rows[1].parent_id, Some(1));
    }
}
