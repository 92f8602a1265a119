//! Structured error types for grid-reorder.

/// All errors that can occur while reordering columns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// The named column is not part of the column set the operation runs over.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Two columns share the same name.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A drag was started with no drop candidates.
    #[error("No breakpoints available for reordering")]
    NoBreakpoints,

    /// The schema sink failed to persist pending mutations.
    #[error("Failed to save schema mutations: {0}")]
    Persistence(String),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReorderError>;

impl From<serde_json::Error> for ReorderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ReorderError> for wasm_bindgen::JsValue {
    fn from(e: ReorderError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
