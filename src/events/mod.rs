pub mod pointer;
pub mod resize;

pub use pointer::wire_pointermove;
pub use resize::{wire_capability_resize, wire_viewport_resize};
