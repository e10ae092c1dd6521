//! Hand-written block trees for list view tests.

use std::cell::Cell;

use crate::traits::{BlockId, BlockNode};

#[derive(Debug)]
pub struct MockBlock {
    pub id: BlockId,
    pub parent_id: Option<BlockId>,
    pub children: Vec<Option<MockBlock>>,
    pub attributes: serde_json::Value,
    /// Number of `child_at` calls made on this block.
    pub child_reads: Cell<usize>,
}

pub fn leaf(id: BlockId) -> MockBlock {
    MockBlock {
        id,
        parent_id: None,
        children: Vec::new(),
        attributes: serde_json::json!({}),
        child_reads: Cell::new(0),
    }
}

pub fn branch(id: BlockId, children: Vec<MockBlock>) -> MockBlock {
    branch_with_holes(id, children.into_iter().map(Some).collect())
}

pub fn branch_with_holes(id: BlockId, children: Vec<Option<MockBlock>>) -> MockBlock {
    let children = children
        .into_iter()
        .map(|child| {
            child.map(|mut c| {
                c.parent_id = Some(id);
                c
            })
        })
        .collect();
    MockBlock {
        children,
        ..leaf(id)
    }
}

/// Leaves `first..first + count` under one parent.
pub fn leaves(first: BlockId, count: u64) -> Vec<MockBlock> {
    (first..first + count).map(leaf).collect()
}

impl<'a> BlockNode<'a> for &'a MockBlock {
    fn id(&self) -> BlockId {
        self.id
    }

    fn name(&self) -> &str {
        if self.children.is_empty() {
            "core/paragraph"
        } else {
            "core/group"
        }
    }

    fn attributes(&self) -> &serde_json::Value {
        &self.attributes
    }

    fn parent_id(&self) -> Option<BlockId> {
        self.parent_id
    }

    fn num_children(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        let block: &'a MockBlock = *self;
        block.child_reads.set(block.child_reads.get() + 1);
        block.children.get(index)?.as_ref()
    }
}
