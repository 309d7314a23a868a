//! Fixture Media - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use fixture_media::{
    cli::{Args, CollectMediaArgs, Command},
    collect::{ConsoleReport, PromptConfirm},
    collect_media,
    config::Config,
    error::{exit_codes, Error, Result},
    output::{
        print_collect_stats, print_config_summary, print_error, print_info, print_summary,
        print_warning,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Aborted => ExitCode::from(exit_codes::ABORT as u8),
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Copy { .. } | Error::Io(_) => ExitCode::from(exit_codes::COPY_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            args.config.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    match args.command {
        Command::CollectMedia(collect) => run_collect_media(config, &collect),
    }
}

/// Handle the `collectmedia` subcommand.
fn run_collect_media(mut config: Config, args: &CollectMediaArgs) -> Result<()> {
    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    let options = args.options();
    if !options.quiet {
        print_config_summary(&config);
    }

    let stats = collect_media(
        &config,
        options,
        &mut PromptConfirm::stdio(),
        &mut ConsoleReport::new(options.quiet),
    )?;

    if options.quiet {
        print_summary(&stats);
    } else {
        print_collect_stats(&stats, options.dry_run);
    }

    Ok(())
}
