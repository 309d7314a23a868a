//! Command-line argument definitions using clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::collect::CollectOptions;
use crate::config::{Config, DEFAULT_CONFIG_FILE};

/// Fixture media CLI.
#[derive(Parser, Debug)]
#[command(
    name = "fixture-media",
    version,
    about = "Copy media files referenced by data fixtures into the media root",
    long_about = "Scans JSON and YAML fixtures for media paths and copies the referenced files\n\
                  from each fixture root's media/ directory into the configured media root."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy media referenced by fixtures into the media root.
    #[command(name = "collectmedia")]
    CollectMedia(CollectMediaArgs),
}

/// Arguments of the `collectmedia` subcommand.
#[derive(ClapArgs, Debug, Default)]
pub struct CollectMediaArgs {
    /// Do NOT prompt the user for input of any kind.
    #[arg(long = "no-input", visible_alias = "noinput")]
    pub no_input: bool,

    /// Report what would be copied without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Hide per-file messages.
    #[arg(long, short)]
    pub quiet: bool,

    /// Destination media root (overrides `media.root`).
    #[arg(short = 'm', long = "media-root", env = "FIXTURE_MEDIA_ROOT")]
    pub media_root: Option<PathBuf>,

    /// Additional fixture directory. Can be repeated.
    #[arg(short = 'f', long = "fixture-dir")]
    pub fixture_dirs: Vec<PathBuf>,

    /// Application directory contributing its fixtures/ subdirectory. Can be repeated.
    #[arg(short = 'a', long = "app")]
    pub apps: Vec<PathBuf>,

    /// Only match references carrying the media:// prefix.
    #[arg(long)]
    pub require_prefix: bool,
}

impl CollectMediaArgs {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// Directories given on the command line are added after the configured ones.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(root) = &self.media_root {
            config.media.root = Some(root.clone());
        }

        config.fixtures.apps.extend(self.apps.iter().cloned());
        config.fixtures.dirs.extend(self.fixture_dirs.iter().cloned());

        // Boolean flags (only override if set to non-default)
        if self.require_prefix {
            config.media.require_prefix = true;
        }
    }

    /// Collector options selected by the flags.
    pub fn options(&self) -> CollectOptions {
        CollectOptions {
            interactive: !self.no_input,
            dry_run: self.dry_run,
            quiet: self.quiet,
        }
    }
}
