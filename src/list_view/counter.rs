//! Visible row counting.
//!
//! A collapsed block occupies exactly one row no matter how large its
//! subtree is; an expanded one occupies its own row plus the rows of its
//! children. Selection and window state never affect the count.

use crate::list_view::store::ExpansionState;
use crate::traits::{BlockDocument, BlockNode};

/// Counts the rows a block and its visible descendants occupy.
///
/// # Arguments
/// * `block` - Root of the subtree to count
/// * `expanded_state` - Expansion snapshot; absent entries count as expanded
///
/// # Returns
/// At least 1. Empty child slots contribute nothing.
pub fn count_visible_rows<'a, B: BlockNode<'a>>(block: &B, expanded_state: &ExpansionState) -> usize {
    if !expanded_state.is_expanded(block.id()) {
        return 1;
    }

    1 + (0..block.num_children())
        .filter_map(|i| block.child_at(i))
        .map(|child| count_visible_rows(&child, expanded_state))
        .sum::<usize>()
}

/// Counts the rows of a whole sibling sequence, e.g. the document roots.
///
/// This is the global row count used for trailing padding.
pub fn count_tree_rows<'a, B, I>(blocks: I, expanded_state: &ExpansionState) -> usize
where
    B: BlockNode<'a>,
    I: IntoIterator<Item = Option<B>>,
{
    blocks
        .into_iter()
        .flatten()
        .map(|block| count_visible_rows(&block, expanded_state))
        .sum()
}

/// Counts the rows of every top-level block in a document.
pub fn count_document_rows<D: BlockDocument>(doc: &D, expanded_state: &ExpansionState) -> usize {
    count_tree_rows(doc.root_blocks(), expanded_state)
}
