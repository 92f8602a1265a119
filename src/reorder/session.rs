//! Per-gesture drag state.

use serde::Serialize;

use crate::layout::{content_x, nearest_breakpoint, Breakpoint};

/// Mutable state for one drag gesture.
///
/// `source_column` is `Some` exactly while a drag is in progress; otherwise
/// the session equals [`ReorderSession::default`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSession {
    pub source_column: Option<String>,
    pub target_column: Option<String>,
    pub breakpoints: Vec<Breakpoint>,
    /// Grid left edge (client space), captured at drag start
    pub grid_left: f64,
    /// Grid width, captured at drag start
    pub width: f64,
    /// Most recent pointer x (client space)
    pub latest_x: f64,
    /// Signed auto-scroll step per tick
    pub increment: f64,
}

impl ReorderSession {
    /// Start a session for `column`. The target stays unresolved until the
    /// first pointer position arrives.
    pub fn begin(column: &str, breakpoints: Vec<Breakpoint>, grid_left: f64, width: f64) -> Self {
        Self {
            source_column: Some(column.to_string()),
            target_column: None,
            breakpoints,
            grid_left,
            width,
            latest_x: 0.0,
            increment: 0.0,
        }
    }

    pub fn is_reordering(&self) -> bool {
        self.source_column.is_some()
    }

    /// Re-resolve the drop target for the current pointer and scroll position.
    ///
    /// Returns `true` if the target changed.
    pub fn resolve_target(&mut self, scroll_left: f64) -> bool {
        let mouse_x = content_x(self.latest_x, self.grid_left, scroll_left);
        let target = nearest_breakpoint(&self.breakpoints, mouse_x).and_then(|b| b.column.clone());
        if target == self.target_column {
            return false;
        }
        tracing::trace!(target = ?target, mouse_x, "reorder target changed");
        self.target_column = target;
        true
    }
}
