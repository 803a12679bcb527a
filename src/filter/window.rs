//! Boundary window test for marked intervals.

use crate::config::FilterConfig;
use crate::textgrid::Interval;

/// Context required on both sides of a marked interval, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryWindow {
    /// Minimum start time.
    pub left: f64,
    /// Minimum distance between the interval end and the file end.
    pub right: f64,
}

impl BoundaryWindow {
    /// Build the window from filter settings.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            left: config.left_window_secs(),
            right: config.right_window_secs(),
        }
    }

    /// Whether `interval` leaves enough context inside a file of `file_length` seconds.
    ///
    /// Both comparisons are strict: an interval touching a threshold exactly
    /// is admitted.
    pub fn admits(&self, interval: &Interval, file_length: f64) -> bool {
        let too_early = interval.xmin < self.left;
        let too_late = interval.xmax > file_length - self.right;
        !(too_early || too_late)
    }
}
