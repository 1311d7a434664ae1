use std::path::PathBuf;

use anyhow::{Context, Result};
use boid_client::{build_flock, load_settings, open_sink, Runner};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boid flocking simulation", long_about = None)]
struct Args {
    /// JSON settings file; missing fields use the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Simulated time between frames in milliseconds
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f64,

    /// Override the number of boids
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Override the world width
    #[arg(long)]
    width: Option<f32>,

    /// Override the world height
    #[arg(long)]
    height: Option<f32>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable cluster pulses
    #[arg(long)]
    no_cluster: bool,

    /// Write snapshots as JSON lines to this file ('-' for stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only write every Nth frame
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(count) = args.count {
        settings.boid_count = count;
    }
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    if args.no_cluster {
        settings.cluster.enabled = false;
    }
    if args.every == 0 {
        anyhow::bail!("--every must be at least 1");
    }

    log::info!("Boid simulation starting...");
    log::info!(
        "{} boids in {}x{} world, {} frames",
        settings.boid_count,
        settings.width,
        settings.height,
        args.frames
    );

    let flock = build_flock(&settings).context("Failed to initialize simulation")?;
    let mut runner = Runner::new(flock, args.frame_ms)?;

    let mut sink = open_sink(args.output.as_deref())?;

    let summary = runner
        .run(args.frames, args.every, sink.as_deref_mut())
        .context("Simulation error")?;

    log::info!(
        "Finished {} frames ({:.1}s simulated), {} cluster pulses",
        summary.frames,
        summary.simulated_ms / 1000.0,
        summary.pulses
    );
    if args.output.is_none() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
