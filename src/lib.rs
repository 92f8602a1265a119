//! grid-reorder - drag-to-reorder columns for scrollable data grids
//!
//! A headless interaction controller for column reordering:
//! - Nearest-breakpoint drop target resolution as the pointer moves
//! - Edge auto-scroll driven by a repeating timer
//! - Dense order commits pushed as a single batch of schema mutations
//! - Browser bindings via WebAssembly (DOM listeners, `setInterval`, Promises)
//!
//! # Usage (Rust)
//!
//! ```rust,ignore
//! let grid = Rc::new(RefCell::new(GridState::new(layout, Viewport::new(0.0, 840.0))));
//! let controller = ReorderController::new(grid, host, ReorderConfig::default());
//! controller.start_reordering("name", &PointerEvent::mouse(120.0, 10.0))?;
//! // pointer moves arrive through the host's event source
//! controller.stop_reordering().await?;
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridReorder } from 'grid-reorder';
//! await init();
//! const reorder = new GridReorder(columns, rect.left, rect.width, addSchemaMutations, saveSchemaMutations);
//! header.addEventListener('mousedown', e => reorder.startReordering(column.name, e));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod reorder;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

use wasm_bindgen::prelude::*;

pub use config::ReorderConfig;
pub use error::{ReorderError, Result};
pub use layout::{GridLayout, GridState, Viewport};
pub use reorder::{ReorderController, ReorderHost, ReorderSession};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use web::GridReorder;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
