//! Window bounds for the virtualized list.
//!
//! The window is the range of global row positions that get materialized.
//! Rows outside it are replaced by padding so the scroll height stays right.

use serde::{Deserialize, Serialize};

/// Height of a single list row, in points.
pub const ITEM_HEIGHT: f32 = 36.0;

/// Global row positions that must be materialized.
///
/// Membership is inclusive at both ends: a row is in view when
/// `start <= position <= start + visible_count`, so the row sitting exactly
/// on the upper bound is still emitted and carries the trailing padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowBounds {
    pub start: usize,
    pub visible_count: usize,
}

impl WindowBounds {
    pub fn new(start: usize, visible_count: usize) -> Self {
        Self { start, visible_count }
    }

    /// Measures the window from a scroll area.
    ///
    /// # Arguments
    /// * `scroll_offset` - Vertical scroll offset in points
    /// * `viewport_height` - Height of the visible area in points
    /// * `row_height` - Height of one row; non-positive values fall back to `ITEM_HEIGHT`
    pub fn from_viewport(scroll_offset: f32, viewport_height: f32, row_height: f32) -> Self {
        let row_height = if row_height > 0.0 { row_height } else { ITEM_HEIGHT };
        let start = (scroll_offset.max(0.0) / row_height).floor() as usize;
        let visible_count = (viewport_height.max(0.0) / row_height).ceil() as usize;
        Self { start, visible_count }
    }

    /// Last in-view position (inclusive).
    pub fn end(&self) -> usize {
        self.start + self.visible_count
    }

    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end()
    }

    /// True once traversal has moved past the window.
    pub fn is_past(&self, position: usize) -> bool {
        !self.contains(position) && position > self.start
    }

    /// Space reserved for the rows skipped above the window.
    pub fn top_padding(&self) -> f32 {
        ITEM_HEIGHT * self.start as f32
    }

    /// Space reserved for the rows skipped below the window, or 0 when the
    /// tree ends inside it.
    pub fn bottom_padding(&self, global_row_count: usize) -> f32 {
        if global_row_count > self.end() {
            ITEM_HEIGHT * (global_row_count - self.end() - 1) as f32
        } else {
            0.0
        }
    }
}
