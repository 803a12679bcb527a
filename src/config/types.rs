//! Configuration type definitions.

use crate::constants::{
    CANONICAL_TIER_NAME, DEFAULT_LEFT_WINDOW_MS, DEFAULT_RIGHT_WINDOW_MS, MS_PER_SECOND,
    PRE_ASPIRATION_MARK, extensions,
};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Example filter settings.
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Parameters of the example filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Marked intervals must start at least this many ms after the file start.
    pub left_window_ms: u32,

    /// Marked intervals must end at least this many ms before the file end.
    pub right_window_ms: u32,

    /// Label of the intervals under inspection.
    pub marker: String,

    /// Name given to the inspected tier when an example is kept.
    pub tier_name: String,

    /// Annotation file extension, without the dot.
    pub annotation_extension: String,

    /// Audio file extension, without the dot.
    pub audio_extension: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            left_window_ms: DEFAULT_LEFT_WINDOW_MS,
            right_window_ms: DEFAULT_RIGHT_WINDOW_MS,
            marker: PRE_ASPIRATION_MARK.to_string(),
            tier_name: CANONICAL_TIER_NAME.to_string(),
            annotation_extension: extensions::ANNOTATION.to_string(),
            audio_extension: extensions::AUDIO.to_string(),
        }
    }
}

impl FilterConfig {
    /// Left window in seconds.
    pub fn left_window_secs(&self) -> f64 {
        f64::from(self.left_window_ms) / MS_PER_SECOND
    }

    /// Right window in seconds.
    pub fn right_window_secs(&self) -> f64 {
        f64::from(self.right_window_ms) / MS_PER_SECOND
    }
}
