//! Fixture Media - copy media files referenced by data fixtures.
//!
//! Fixtures (JSON or YAML files used to preload records) often point at
//! uploaded files such as `"images/cover.png"` or `media://docs/guide.pdf`.
//! This library finds those references and copies the files from each
//! fixture root's `media/` directory into a live media root.
//!
//! # Features
//!
//! - Fixture discovery across application and configured directories
//! - Permissive or `media://`-prefixed reference matching
//! - Overwrite confirmation, dry runs and run statistics
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use fixture_media::{collect_media, CollectOptions, Config, ConsoleReport, PromptConfirm};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("fixture-media.toml"))?;
//!     let stats = collect_media(
//!         &config,
//!         CollectOptions::default(),
//!         &mut PromptConfirm::stdio(),
//!         &mut ConsoleReport::default(),
//!     )?;
//!     println!("copied {} file(s)", stats.files_copied);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use collect::{
    CollectOptions, CollectStats, Confirm, ConsoleReport, MediaCollector, Notice, PromptConfirm,
    Report,
};
pub use config::{Config, ReferenceMode};
pub use discovery::{find_fixtures, search_roots, Fixture, RootScan, SearchRoot};
pub use error::{Error, Result};
pub use media::{MediaReference, ReferencePattern};

/// Validate `config` and copy the media of every discovered fixture.
pub fn collect_media(
    config: &Config,
    options: CollectOptions,
    confirm: &mut dyn Confirm,
    report: &mut dyn Report,
) -> Result<CollectStats> {
    config::validate_config(config)?;

    let collector = MediaCollector::new(
        config.media_root()?.to_path_buf(),
        config.reference_mode(),
        options,
    );
    collector.run(&search_roots(config), confirm, report)
}
