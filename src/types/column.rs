use serde::{Deserialize, Serialize};

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f64 = 200.0;

fn default_width() -> f64 {
    DEFAULT_COLUMN_WIDTH
}

fn default_visible() -> bool {
    true
}

/// A grid column as seen by the reorder controller.
///
/// `name` is the identity of a column and must be unique across the full
/// column sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    /// Rendered width in pixels
    #[serde(default = "default_width")]
    pub width: f64,
    /// Left edge in content space. Recomputed by `GridLayout::visible_columns`.
    #[serde(default)]
    pub left: f64,
    /// Whether this is the designated primary-display column
    #[serde(default)]
    pub primary_display: bool,
    /// Persisted order index
    #[serde(default)]
    pub order: usize,
    /// Hidden columns keep their place in the full order but are not displayed
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Column {
    /// Create a visible column with the given width.
    pub fn new(name: impl Into<String>, width: f64) -> Self {
        Self {
            name: name.into(),
            width,
            left: 0.0,
            primary_display: false,
            order: 0,
            visible: true,
        }
    }

    /// Mark this column as the primary-display column.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary_display = true;
        self
    }

    /// Mark this column as hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Right edge in content space
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}
