use serde::{Deserialize, Serialize};

/// Per-branch rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchOptions {
    /// Offer a trailing "add block" row under the selected parent.
    pub show_appender: bool,
    /// Show the move up/down buttons on each row.
    pub show_block_movers: bool,
    /// Render inner blocks at all.
    pub show_nested_blocks: bool,
}

impl Default for BranchOptions {
    fn default() -> Self {
        Self {
            show_appender: true,
            show_block_movers: true,
            show_nested_blocks: true,
        }
    }
}

/// User-facing list view settings, persisted by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListViewSettings {
    pub options: BranchOptions,
    /// Materialize only the rows inside the scroll window.
    pub windowing: bool,
    /// Animate expand/collapse transitions.
    pub use_animation: bool,
}

impl Default for ListViewSettings {
    fn default() -> Self {
        Self {
            options: BranchOptions::default(),
            windowing: true,
            use_animation: true,
        }
    }
}
