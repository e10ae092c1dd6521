//! UI layout state management.

use serde::{Deserialize, Serialize};

const MIN_SPLIT_RATIO: f32 = 0.2;
const MAX_SPLIT_RATIO: f32 = 0.9;

/// State related to UI layout and sizing.
///
/// Persisted between sessions as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Share of the window width given to the list panel (0.0 to 1.0)
    split_ratio: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self { split_ratio: 0.6 }
    }

    // ===== Layout Queries =====

    pub fn split_ratio(&self) -> f32 {
        self.split_ratio.clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO)
    }

    /// Default width of the details panel for a window of `total_width`.
    pub fn details_width(&self, total_width: f32) -> f32 {
        total_width * (1.0 - self.split_ratio())
    }

    // ===== Layout Mutations =====

    /// Records the list panel width after the user resized the details panel.
    pub fn update_from_widths(&mut self, list_width: f32, total_width: f32) {
        if total_width > 0.0 {
            self.split_ratio = (list_width / total_width).clamp(MIN_SPLIT_RATIO, MAX_SPLIT_RATIO);
        }
    }
}
