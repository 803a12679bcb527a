//! Error types for pafilter.

use std::path::PathBuf;

/// Result type alias for pafilter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for pafilter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command line usage error.
    #[error("usage error: {message}")]
    Usage {
        /// Description of the misuse.
        message: String,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {source}")]
    ConfigWrite {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to list the input directory.
    #[error("failed to read directory '{path}': {source}")]
    DirectoryRead {
        /// Path to the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read an annotation file.
    #[error("failed to read annotation file '{path}': {source}")]
    AnnotationRead {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Annotation content is not a valid TextGrid.
    #[error("invalid TextGrid: {message}")]
    InvalidTextGrid {
        /// Description of the format error.
        message: String,
    },

    /// Failed to parse an annotation file.
    #[error("failed to parse annotation file '{path}': {message}")]
    TextGridParse {
        /// Path to the annotation file.
        path: PathBuf,
        /// Description of the format error.
        message: String,
    },

    /// Failed to write an annotation file.
    #[error("failed to write annotation file '{path}': {source}")]
    AnnotationWrite {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete an annotation file.
    #[error("failed to delete annotation file '{path}': {source}")]
    AnnotationRemove {
        /// Path to the annotation file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete an audio file.
    #[error("failed to delete audio file '{path}': {source}")]
    AudioRemove {
        /// Path to the audio file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
