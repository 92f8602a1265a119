//! Browser bindings (wasm32 only).
//!
//! `GridReorder` wraps a [`ReorderController`](crate::reorder::ReorderController)
//! with DOM listeners on `document`, a `setInterval` auto-scroll timer and JS
//! callbacks for the schema sink. No manual listener wiring is needed from
//! JavaScript beyond calling `startReordering` from a header's mousedown or
//! touchstart handler.

mod bindings;
mod dom;

pub use bindings::GridReorder;
