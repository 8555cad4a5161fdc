//! BeatCut CLI
//!
//! A command-line tool that aligns the visual cuts of a source video with
//! the rhythmic grid of a music track, producing a frame-quantized cut list
//! for an external renderer.
//!
//! # Usage
//!
//! ```bash
//! beatcut schedule --scenes scenes.json --beat beat.json --fps 30 -o cutlist.json
//! beatcut inspect --scenes scenes.json --beat beat.json
//! beatcut verify --cutlist cutlist.json --scenes scenes.json --beat beat.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use beatcut::cli::{commands, Cli, Commands};
use beatcut::config::Config;

/// Main entry point for the BeatCut CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())?;

    // CLI flag wins over the config file; RUST_LOG wins over both
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting BeatCut");

    match cli.command {
        Commands::Schedule(args) => {
            info!("Executing schedule command");
            commands::schedule(args, &config)?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args)?;
        }
        Commands::Verify(args) => {
            info!("Executing verify command");
            commands::verify(args)?;
        }
    }

    info!("BeatCut completed successfully");
    Ok(())
}
