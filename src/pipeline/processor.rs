//! Single example processing.

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::filter::{Verdict, evaluate};
use crate::textgrid::{read_textgrid, write_textgrid};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An annotation file and its sibling audio recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Path to the annotation file.
    pub annotation: PathBuf,
    /// Path to the audio file sharing the annotation's base name.
    pub audio: PathBuf,
}

impl Example {
    /// Pair an annotation file with its audio file.
    ///
    /// The audio path replaces everything after the last dot of the
    /// annotation file name with `audio_extension`.
    pub fn from_annotation(annotation: &Path, audio_extension: &str) -> Self {
        Self {
            annotation: annotation.to_path_buf(),
            audio: annotation.with_extension(audio_extension),
        }
    }

    /// File name of the annotation, for messages.
    pub fn name(&self) -> String {
        self.annotation.file_name().map_or_else(
            || self.annotation.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}

/// What happened to an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// Annotation rewritten with the inspected tier renamed.
    Kept {
        /// Marked intervals removed from the annotation.
        removed: usize,
    },
    /// Annotation and audio deleted.
    Deleted {
        /// Marked intervals that failed the window test.
        removed: usize,
    },
}

impl ProcessResult {
    /// Number of marked intervals removed.
    pub const fn removed(self) -> usize {
        match self {
            Self::Kept { removed } | Self::Deleted { removed } => removed,
        }
    }
}

/// Filter one example: evaluate its annotation, then commit the decision.
///
/// With `dry_run` the decision is narrated but nothing on disk changes.
pub fn process_example(
    example: &Example,
    config: &FilterConfig,
    dry_run: bool,
) -> Result<ProcessResult> {
    info!("Parsing \"{}\"..", example.annotation.display());
    let grid = read_textgrid(&example.annotation)?;

    let verdict = evaluate(&grid, config).map_err(|e| match e {
        Error::InvalidTextGrid { message } => Error::TextGridParse {
            path: example.annotation.clone(),
            message,
        },
        other => other,
    })?;

    let name = example.name();
    for interval in verdict.removed() {
        info!(
            "{name} - removing {} interval due to illegal range: ({}, {})",
            config.marker, interval.xmin, interval.xmax
        );
    }

    match verdict {
        Verdict::Discard { removed, .. } => {
            if dry_run {
                info!(
                    "Would delete {name} since it has no {} intervals in the expected range",
                    config.marker
                );
            } else {
                info!(
                    "Deleting {name} since it has no {} intervals in the expected range",
                    config.marker
                );
                delete_example(example)?;
            }
            Ok(ProcessResult::Deleted {
                removed: removed.len(),
            })
        }
        Verdict::Keep {
            grid,
            candidates,
            removed,
        } => {
            debug!(
                "Keeping {name}: {} of {candidates} {} interval(s) in range, tier renamed to '{}'",
                candidates - removed.len(),
                config.marker,
                config.tier_name
            );
            if !dry_run {
                write_textgrid(&example.annotation, &grid)?;
            }
            Ok(ProcessResult::Kept {
                removed: removed.len(),
            })
        }
    }
}

/// Delete both halves of an example, annotation first.
///
/// A missing audio file is an error.
fn delete_example(example: &Example) -> Result<()> {
    std::fs::remove_file(&example.annotation).map_err(|e| Error::AnnotationRemove {
        path: example.annotation.clone(),
        source: e,
    })?;

    std::fs::remove_file(&example.audio).map_err(|e| Error::AudioRemove {
        path: example.audio.clone(),
        source: e,
    })
}
