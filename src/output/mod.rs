//! Terminal output helpers.

pub mod progress;
