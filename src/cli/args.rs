//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the schedule command
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Scene analysis file (JSON with ascending cut timestamps)
    #[arg(long)]
    pub scenes: PathBuf,

    /// Beat analysis file (JSON with tempo, first beat, audio length)
    #[arg(long)]
    pub beat: PathBuf,

    /// Energy analysis file; selects the adaptive strategy when given
    #[arg(long)]
    pub energy: Option<PathBuf>,

    /// Clip arrangement strategy (delay, pseudochrono, random)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Target frame rate for quantization
    #[arg(long)]
    pub fps: Option<f64>,

    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Scene analysis file
    #[arg(long)]
    pub scenes: PathBuf,

    /// Beat analysis file
    #[arg(long)]
    pub beat: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Cut list document to verify
    #[arg(long)]
    pub cutlist: PathBuf,

    /// Scene analysis file the cut list was produced from
    #[arg(long)]
    pub scenes: PathBuf,

    /// Beat analysis file the cut list was produced from
    #[arg(long)]
    pub beat: PathBuf,

    /// Frame rate to check alignment against (default: from the document)
    #[arg(long)]
    pub fps: Option<f64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
