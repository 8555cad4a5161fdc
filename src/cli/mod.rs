//! CLI module for BeatCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// BeatCut - beat-synchronized music video cut scheduling
///
/// Aligns the visual cuts of a source video with the rhythmic grid of a
/// music track: every cut in the produced edit falls on a beat and the
/// total runtime matches the audio.
#[derive(Parser)]
#[command(name = "beatcut")]
#[command(about = "BeatCut - schedule music video cuts on the beat")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Produce a frame-quantized cut list from analysis files
    Schedule(args::ScheduleArgs),
    /// Summarize analysis inputs and available cut material
    Inspect(args::InspectArgs),
    /// Verify a produced cut list against its analysis inputs
    Verify(args::VerifyArgs),
}
