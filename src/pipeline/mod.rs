//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{RunOptions, RunSummary, collect_annotation_files, filter_directory};
pub use processor::{Example, ProcessResult, process_example};
