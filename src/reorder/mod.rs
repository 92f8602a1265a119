//! Column reordering: drag sessions, edge auto-scroll, and order commits.
//!
//! Control flow for one gesture:
//! - `start_reordering` builds breakpoints, snapshots the grid bounds and
//!   subscribes to pointer move / end / cancel
//! - every move re-resolves the drop target and starts or stops auto-scroll;
//!   every auto-scroll tick scrolls the grid and re-resolves too
//! - end or cancel releases the timer and listeners, resets the session and
//!   commits the new order when the target differs from the source

mod auto_scroll;
mod commit;
mod controller;
mod host;
mod session;

pub use auto_scroll::{edge_increment, AutoScrollDriver};
pub use commit::{reorder_columns, CommitEngine};
pub use controller::{ChangeCallback, ReorderController};
pub use host::{
    EventSource, IntervalTimer, ListenerId, PointerHandler, ReorderHost, SchemaSink, TimerHandle,
};
pub use session::ReorderSession;
