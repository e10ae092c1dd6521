//! Scroll position and window measurement for the list panel.

use rlistview::{WindowBounds, ITEM_HEIGHT};

/// State related to the visible part of the list.
///
/// Responsibilities:
/// - Tracking vertical scroll position and viewport height
/// - Measuring the row window the renderer should materialize
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    scroll_y: f32,
    viewport_height: f32,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the scroll position, e.g. when a new document is loaded.
    pub fn reset(&mut self) {
        self.scroll_y = 0.0;
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Records the scroll area's geometry after a frame.
    pub fn record(&mut self, scroll_y: f32, viewport_height: f32) {
        self.scroll_y = scroll_y.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
    }

    /// Measures the window for the next render pass.
    ///
    /// # Returns
    /// `None` when windowing is switched off, so every row is materialized.
    pub fn window(&self, windowing: bool) -> Option<WindowBounds> {
        windowing.then(|| WindowBounds::from_viewport(self.scroll_y, self.viewport_height, ITEM_HEIGHT))
    }
}
