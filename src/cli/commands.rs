//! Command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis;
use crate::cli::args::{InspectArgs, ScheduleArgs, VerifyArgs};
use crate::config::Config;
use crate::output::verifier::{CutListVerifier, VerificationReport};
use crate::output::{self, CutListDocument};
use crate::planner::quantize::TimestampQuantizer;
use crate::planner::{CutPlanner, Strategy};

/// Execute the schedule command
pub fn schedule(args: ScheduleArgs, config: &Config) -> Result<()> {
    info!("Starting schedule operation");
    info!("Scenes: {}", args.scenes.display());
    info!("Beat: {}", args.beat.display());

    let scene_cuts = analysis::load_scene_cuts(&args.scenes)
        .context("Failed to load scene analysis")?;
    let beat = analysis::load_beat_analysis(&args.beat)
        .context("Failed to load beat analysis")?;
    let grid = beat.beat_grid().context("Invalid beat analysis")?;

    // An energy curve selects the adaptive strategy; otherwise the explicit
    // flag wins over the configured default.
    let strategy = if let Some(energy_path) = &args.energy {
        if args.strategy.is_some() {
            warn!("Both --energy and --strategy given; the energy curve selects the adaptive strategy");
        }
        let curve = analysis::load_energy_curve(energy_path, beat.audio_length)
            .context("Failed to load energy analysis")?;
        Strategy::AdaptiveEnergy(curve)
    } else {
        let name = args
            .strategy
            .as_deref()
            .unwrap_or(&config.schedule.strategy);
        Strategy::parse(name).context("Invalid strategy")?
    };

    let fps = args.fps.unwrap_or(config.schedule.frame_rate);

    let planner = CutPlanner::new();
    let cut_list = planner
        .plan(&scene_cuts, &grid, beat.audio_length, &strategy, args.seed)
        .context("Failed to plan cut list")?;

    let quantizer = TimestampQuantizer::new(fps).context("Invalid frame rate")?;
    let quantized = quantizer.quantize(&cut_list);

    let document = CutListDocument::new(&quantized, fps, strategy.name(), beat.audio_length);

    match &args.output {
        Some(path) => {
            output::write_document(&document, path).context("Failed to write cut list")?;
        }
        None => {
            println!("{}", document.to_json()?);
        }
    }

    info!("Schedule operation completed successfully");
    Ok(())
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    info!("Starting inspect operation");

    let scene_cuts = analysis::load_scene_cuts(&args.scenes)
        .context("Failed to load scene analysis")?;
    let beat = analysis::load_beat_analysis(&args.beat)
        .context("Failed to load beat analysis")?;
    let grid = beat.beat_grid().context("Invalid beat analysis")?;

    let bar = grid.bar_duration();
    let scenes = scene_cuts.scenes_from_first_beat(grid.first_beat());
    let bars_available: u32 = scenes.iter().map(|s| s.bars_available(bar)).sum();
    let budget = beat.audio_length - grid.first_beat();
    let bars_needed = if budget > 0.0 { (budget / bar) as u32 } else { 0 };

    let report = InspectReport {
        tempo: beat.tempo,
        first_beat: beat.first_beat,
        audio_length: beat.audio_length,
        bar_duration: bar,
        scene_count: scene_cuts.scene_count(),
        usable_scene_count: scenes.len(),
        bars_available,
        bars_needed,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_inspect_report(&report);
    }

    if bars_available < bars_needed {
        warn!(
            "Source video supplies {} bars but the audio needs {}; the cut list will run short",
            bars_available, bars_needed
        );
    }

    info!("Inspect operation completed successfully");
    Ok(())
}

/// Execute the verify command
pub fn verify(args: VerifyArgs) -> Result<()> {
    info!("Starting verify operation");
    info!("Cut list: {}", args.cutlist.display());

    let document = output::read_document(&args.cutlist).context("Failed to read cut list")?;
    let scene_cuts = analysis::load_scene_cuts(&args.scenes)
        .context("Failed to load scene analysis")?;
    let beat = analysis::load_beat_analysis(&args.beat)
        .context("Failed to load beat analysis")?;
    let grid = beat.beat_grid().context("Invalid beat analysis")?;

    let fps = args.fps.unwrap_or(document.frame_rate);
    let verifier = CutListVerifier::new(fps).context("Invalid frame rate")?;
    let report = verifier.verify(&document, &scene_cuts, &grid, beat.audio_length);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_verification_report(&report);
    }

    if report.success {
        info!("Verify operation completed successfully");
        Ok(())
    } else {
        Err(anyhow::anyhow!("Cut list verification failed"))
    }
}

/// Analysis summary produced by the inspect command
#[derive(Debug, Serialize)]
struct InspectReport {
    tempo: f64,
    first_beat: f64,
    audio_length: f64,
    bar_duration: f64,
    scene_count: usize,
    usable_scene_count: usize,
    bars_available: u32,
    bars_needed: u32,
}

/// Display the inspect report in human-readable format
fn display_inspect_report(report: &InspectReport) {
    println!("Analysis Summary");
    println!("================");
    println!("Tempo: {:.2} bpm", report.tempo);
    println!("First beat: {:.3}s", report.first_beat);
    println!("Audio length: {:.3}s", report.audio_length);
    println!("Bar duration: {:.3}s", report.bar_duration);
    println!();
    println!(
        "Scenes: {} total, {} usable after the first beat",
        report.scene_count, report.usable_scene_count
    );
    println!(
        "Bars: {} available, {} needed for the audio length",
        report.bars_available, report.bars_needed
    );
}

/// Display the verification report in human-readable format
fn display_verification_report(report: &VerificationReport) {
    println!("Verification Results");
    println!("===================");
    println!("Success: {}", if report.success { "yes" } else { "no" });
    println!();

    println!("Checks:");
    for check in &report.checks {
        let status = if check.success { "ok" } else { "FAIL" };
        println!("  [{}] {}: {}", status, check.name, check.details);
    }
}
