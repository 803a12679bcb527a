//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter pre-aspiration examples whose marked intervals lack boundary context.
#[derive(Debug, Parser)]
#[command(name = "pafilter")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing TextGrid/WAV example pairs.
    #[arg(required = true)]
    pub dir: Option<PathBuf>,

    /// Alternate configuration file.
    #[arg(long, global = true, env = "PAFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Options for filtering.
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// Without an action, a directory named `config` in the working
    /// directory is filtered instead.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display effective configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the filter run.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Minimum gap in ms between the file start and a marked interval.
    #[arg(long, env = "PAFILTER_LEFT_WINDOW_MS")]
    pub left_window_ms: Option<u32>,

    /// Minimum gap in ms between a marked interval and the file end.
    #[arg(long, env = "PAFILTER_RIGHT_WINDOW_MS")]
    pub right_window_ms: Option<u32>,

    /// Report decisions without deleting or rewriting files.
    #[arg(long)]
    pub dry_run: bool,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Only print warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
