//! Data types shared by the layout, reorder, and web modules.

mod column;
mod event;
mod mutation;

pub use column::*;
pub use event::*;
pub use mutation::*;
