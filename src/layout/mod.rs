//! Grid geometry: the column store, viewport, and drop-target breakpoints.
//!
//! This module handles:
//! - Holding the full column order and deriving the visible-column view
//! - Managing horizontal scroll state and its bounds
//! - Building breakpoints and resolving the nearest one to a pointer

mod breakpoints;
mod grid_layout;
mod viewport;

pub use breakpoints::{compute_breakpoints, content_x, nearest_breakpoint, Breakpoint};
pub use grid_layout::GridLayout;
pub use viewport::Viewport;

/// Grid state shared between the reorder controller and a rendering layer.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub layout: GridLayout,
    pub viewport: Viewport,
}

impl GridState {
    pub fn new(layout: GridLayout, viewport: Viewport) -> Self {
        Self { layout, viewport }
    }

    /// Largest valid horizontal scroll position
    pub fn max_scroll_left(&self) -> f64 {
        self.viewport.max_scroll_left(&self.layout)
    }

    /// Scroll horizontally, clamped to the content, returning the applied delta.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        self.viewport.scroll_by(delta, &self.layout)
    }
}
