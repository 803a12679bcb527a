//! Boundary filtering of marked intervals.
//!
//! Pure decision logic: given a parsed annotation and filter settings,
//! decide whether the example is kept (and what it becomes) or discarded.

mod evaluate;
mod window;

pub use evaluate::{Verdict, evaluate};
pub use window::BoundaryWindow;
