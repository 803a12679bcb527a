//! Pafilter - pre-aspiration example filter.
//!
//! Scans a directory of Praat TextGrid/WAV example pairs, drops marked
//! intervals that sit too close to the recording boundaries and deletes
//! examples left without any usable interval.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod textgrid;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, FilterArgs};
use constants::CONFIG_COMMAND;
use config::{Config, config_file_path, load_config_file, save_config, validate_config};
use pipeline::{RunOptions, filter_directory};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for pafilter CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.filter.verbose, cli.filter.quiet);

    let dir = match cli.command {
        Some(Command::Config {
            action: Some(action),
        }) => return handle_config(action, cli.config.as_deref()),
        Some(Command::Config { action: None }) => bare_config_directory(Path::new(""))?,
        // clap requires the directory whenever no subcommand is given
        None => cli.dir.ok_or_else(|| Error::Usage {
            message: "expected exactly one input directory".to_string(),
        })?,
    };

    let config = resolve_config(cli.config.as_deref(), &cli.filter)?;
    let options = RunOptions {
        dry_run: cli.filter.dry_run,
        progress: !cli.filter.quiet && !cli.filter.no_progress,
    };

    filter_examples(&dir, &config, &options)
}

/// Filter all examples in `dir` and log a summary.
fn filter_examples(dir: &Path, config: &Config, options: &RunOptions) -> Result<()> {
    let start = Instant::now();

    if options.dry_run {
        warn!("Dry run: no files will be deleted or rewritten");
    }

    let summary = filter_directory(dir, &config.filter, options)?;

    if summary.scanned == 0 {
        warn!(
            "No .{} files found in {}",
            config.filter.annotation_extension,
            dir.display()
        );
        return Ok(());
    }

    info!(
        "Done: {} example(s) scanned, {} kept, {} deleted, {} {} interval(s) removed in {:.2}s",
        summary.scanned,
        summary.kept,
        summary.deleted,
        summary.intervals_removed,
        config.filter.marker,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Resolve `pafilter config` without an action to the `config` directory under `base`.
fn bare_config_directory(base: &Path) -> Result<PathBuf> {
    let dir = base.join(CONFIG_COMMAND);
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(Error::Usage {
            message: format!(
                "'{CONFIG_COMMAND}' needs an action (init, show or path); \
                 to filter a directory of that name it must exist in the working directory"
            ),
        })
    }
}

/// Load the config file and apply command line overrides.
fn resolve_config(path: Option<&Path>, args: &FilterArgs) -> Result<Config> {
    let mut config = load_config_at(path)?;

    if let Some(ms) = args.left_window_ms {
        config.filter.left_window_ms = ms;
    }
    if let Some(ms) = args.right_window_ms {
        config.filter.right_window_ms = ms;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from an explicit path or the platform default.
fn load_config_at(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => config::load_default_config(),
    }
}

fn config_path_or_default(path: Option<&Path>) -> Result<PathBuf> {
    path.map_or_else(config_file_path, |p| Ok(p.to_path_buf()))
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).with_target(false).init();
}

#[allow(clippy::print_stdout)]
fn handle_config(action: ConfigAction, config_path: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_path_or_default(config_path)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config_at(config_path)?;
            validate_config(&config)?;
            let text = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{text}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_path_or_default(config_path)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
