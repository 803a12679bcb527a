//! Praat TextGrid reading and writing.
//!
//! Covers the subset of the format needed to inspect, prune and rename
//! tiers: the text formats on input, the long text format on output.

mod parser;
mod types;
mod writer;

pub use parser::read_textgrid;
pub use types::{Interval, IntervalTier, Point, PointTier, TextGrid, Tier};
pub use writer::{write_long_format, write_textgrid};
