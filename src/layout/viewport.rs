//! Viewport state management for horizontal scrolling.

use super::GridLayout;

/// Viewport state - the visible area of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates
    pub scroll_left: f64,
    /// Left edge of the grid in client coordinates
    pub left: f64,
    /// Grid width in pixels
    pub width: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 800.0)
    }
}

impl Viewport {
    /// Create an unscrolled viewport with the given client bounds
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            scroll_left: 0.0,
            left,
            width,
        }
    }

    /// Largest valid scroll position for the given layout.
    ///
    /// The sticky column does not scroll, so it eats into the space available
    /// for the scrollable columns.
    pub fn max_scroll_left(&self, layout: &GridLayout) -> f64 {
        (layout.sticky_width() + layout.total_width() - self.width).max(0.0)
    }

    /// Clamp scroll position to `[0, max_scroll_left]`.
    pub fn clamp_scroll(&mut self, layout: &GridLayout) {
        let max_left = self.max_scroll_left(layout);
        self.scroll_left = self.scroll_left.min(max_left).max(0.0);
    }

    /// Scroll by a delta and return the delta actually applied.
    pub fn scroll_by(&mut self, delta: f64, layout: &GridLayout) -> f64 {
        let before = self.scroll_left;
        self.scroll_left += delta;
        self.clamp_scroll(layout);
        self.scroll_left - before
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f64, layout: &GridLayout) {
        self.scroll_left = x;
        self.clamp_scroll(layout);
    }

    /// Update the client bounds (e.g. after a resize)
    pub fn resize(&mut self, left: f64, width: f64) {
        self.left = left;
        self.width = width;
    }
}
