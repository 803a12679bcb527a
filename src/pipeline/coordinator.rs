//! Pipeline coordination for a directory of examples.

use crate::config::FilterConfig;
use crate::error::{Error, Result};
use crate::output::progress;
use std::path::{Path, PathBuf};

use super::{Example, ProcessResult, process_example};

/// Options for a directory run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report decisions without deleting or rewriting anything.
    pub dry_run: bool,
    /// Show a file progress bar.
    pub progress: bool,
}

/// Totals for a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Annotation files examined.
    pub scanned: usize,
    /// Examples kept and rewritten.
    pub kept: usize,
    /// Examples deleted.
    pub deleted: usize,
    /// Marked intervals removed across all examples.
    pub intervals_removed: usize,
}

impl RunSummary {
    fn record(&mut self, result: ProcessResult) {
        self.scanned += 1;
        self.intervals_removed += result.removed();
        match result {
            ProcessResult::Kept { .. } => self.kept += 1,
            ProcessResult::Deleted { .. } => self.deleted += 1,
        }
    }
}

/// Filter every example in `dir`.
///
/// Files are processed in lexicographic path order. The first error aborts
/// the run; examples already processed stay processed.
pub fn filter_directory(
    dir: &Path,
    config: &FilterConfig,
    options: &RunOptions,
) -> Result<RunSummary> {
    let files = collect_annotation_files(dir, &config.annotation_extension)?;
    let file_progress = progress::create_file_progress(files.len(), options.progress);

    let mut summary = RunSummary::default();
    for file in &files {
        let example = Example::from_annotation(file, &config.audio_extension);
        match process_example(&example, config, options.dry_run) {
            Ok(result) => summary.record(result),
            Err(e) => {
                progress::finish_progress(file_progress, "Failed");
                return Err(e);
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Done");
    Ok(summary)
}

/// List annotation files directly inside `dir`, sorted by path.
///
/// Subdirectories are not descended into.
pub fn collect_annotation_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let read_err = |source: std::io::Error| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && is_annotation_file(&path, extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Check if a path names an annotation file.
///
/// The extension comparison is case-sensitive.
fn is_annotation_file(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
        && path.file_stem().is_some_and(|stem| !stem.is_empty())
}
