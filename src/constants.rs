//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "pafilter";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the configuration subcommand, which shadows a directory of the same name.
pub const CONFIG_COMMAND: &str = "config";

/// Default minimum distance (ms) between the file start and a marked interval.
pub const DEFAULT_LEFT_WINDOW_MS: u32 = 50;

/// Default minimum distance (ms) between a marked interval and the file end.
pub const DEFAULT_RIGHT_WINDOW_MS: u32 = 60;

/// Milliseconds per second, for window conversion.
pub const MS_PER_SECOND: f64 = 1000.0;

/// Label of pre-aspiration intervals in the inspected tier.
pub const PRE_ASPIRATION_MARK: &str = "pre";

/// Name given to the inspected tier once an example is kept.
pub const CANONICAL_TIER_NAME: &str = "bell";

/// File extensions of the two halves of an example (without leading dot).
pub mod extensions {
    /// Praat annotation file extension.
    pub const ANNOTATION: &str = "TextGrid";
    /// Audio recording extension.
    pub const AUDIO: &str = "wav";
    /// Suffix appended to annotation paths while a rewrite is in flight.
    pub const PENDING_WRITE: &str = "pafilter.tmp";
}

/// Praat TextGrid text format keywords.
pub mod textgrid {
    /// Value of the `File type` header.
    pub const FILE_TYPE: &str = "ooTextFile";
    /// Value of the `Object class` header.
    pub const OBJECT_CLASS: &str = "TextGrid";
    /// Class name of interval tiers.
    pub const INTERVAL_TIER: &str = "IntervalTier";
    /// Class name of point tiers.
    pub const TEXT_TIER: &str = "TextTier";
    /// Flag value indicating that tiers follow.
    pub const EXISTS: &str = "<exists>";
    /// Flag value indicating that the grid has no tiers.
    pub const ABSENT: &str = "<absent>";
}
