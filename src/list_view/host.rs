//! Notifier interface between rendered rows and the state owner.

use crate::traits::BlockId;

/// Receives user intent reported by rows.
///
/// Rows never mutate state themselves; they call into a host, which decides
/// what to do with the request.
pub trait ListViewHost {
    fn select_block(&mut self, id: BlockId);
    fn expand(&mut self, id: BlockId);
    fn collapse(&mut self, id: BlockId);
    fn drag_start(&mut self, id: BlockId);
    fn drag_end(&mut self, id: BlockId);
}

/// A recorded notifier call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostIntent {
    SelectBlock(BlockId),
    Expand(BlockId),
    Collapse(BlockId),
    DragStart(BlockId),
    DragEnd(BlockId),
}

impl HostIntent {
    /// Replays this intent against a host.
    pub fn apply_to<H: ListViewHost + ?Sized>(self, host: &mut H) {
        match self {
            HostIntent::SelectBlock(id) => host.select_block(id),
            HostIntent::Expand(id) => host.expand(id),
            HostIntent::Collapse(id) => host.collapse(id),
            HostIntent::DragStart(id) => host.drag_start(id),
            HostIntent::DragEnd(id) => host.drag_end(id),
        }
    }
}

/// Collects intents during a render pass so they can be applied afterwards.
impl ListViewHost for Vec<HostIntent> {
    fn select_block(&mut self, id: BlockId) {
        self.push(HostIntent::SelectBlock(id));
    }

    fn expand(&mut self, id: BlockId) {
        self.push(HostIntent::Expand(id));
    }

    fn collapse(&mut self, id: BlockId) {
        self.push(HostIntent::Collapse(id));
    }

    fn drag_start(&mut self, id: BlockId) {
        self.push(HostIntent::DragStart(id));
    }

    fn drag_end(&mut self, id: BlockId) {
        self.push(HostIntent::DragEnd(id));
    }
}
