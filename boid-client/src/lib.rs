//! Headless frame driver for the boid simulation.
//!
//! Plays the part a browser's animation loop plays for the wasm build:
//! feeds the flock a timestamp per frame and hands each resulting snapshot
//! to a sink.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use boid_core::{BoidConfig, Bounds, ClusterConfig, Flock};
use boid_shared::{FrameSnapshot, RunSummary, SimulationSettings};

/// Reads settings from a JSON file, or returns the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<SimulationSettings> {
    let Some(path) = path else {
        return Ok(SimulationSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

pub fn build_config(settings: &SimulationSettings) -> BoidConfig {
    BoidConfig {
        max_speed: settings.max_speed,
        min_speed: settings.min_speed,
        separation_distance: settings.separation_distance,
        alignment_distance: settings.alignment_distance,
        cohesion_distance: settings.cohesion_distance,
        separation_weight: settings.separation_weight,
        alignment_weight: settings.alignment_weight,
        cohesion_weight: settings.cohesion_weight,
        cluster: ClusterConfig {
            enabled: settings.cluster.enabled,
            interval_min_ms: settings.cluster.interval_min_ms,
            interval_max_ms: settings.cluster.interval_max_ms,
            duration_ms: settings.cluster.duration_ms,
            cohesion_multiplier: settings.cluster.cohesion_multiplier,
        },
    }
}

pub fn build_flock(settings: &SimulationSettings) -> Result<Flock> {
    let bounds = Bounds::new(settings.width, settings.height).context("Invalid world size")?;
    let config = build_config(settings);
    let flock = match settings.seed {
        Some(seed) => Flock::from_seed(settings.boid_count, bounds, config, seed),
        None => Flock::from_entropy(settings.boid_count, bounds, config),
    }
    .context("Invalid simulation settings")?;
    Ok(flock)
}

/// Opens the snapshot sink: a buffered file, stdout for `-`, or nothing.
pub fn open_sink(path: Option<&Path>) -> Result<Option<Box<dyn Write>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if path.as_os_str() == "-" {
        return Ok(Some(Box::new(BufWriter::new(io::stdout().lock()))));
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(Some(Box::new(BufWriter::new(file))))
}

pub fn frame_snapshot(flock: &Flock, time_ms: f64) -> FrameSnapshot {
    FrameSnapshot::new(
        flock.ticks(),
        time_ms,
        flock.cluster_active(),
        flock.snapshot(),
    )
}

/// Drives a flock at a fixed simulated frame interval.
pub struct Runner {
    flock: Flock,
    frame_ms: f64,
    now_ms: f64,
}

impl Runner {
    pub fn new(flock: Flock, frame_ms: f64) -> Result<Self> {
        if !(frame_ms.is_finite() && frame_ms > 0.0) {
            anyhow::bail!("Frame interval must be positive, got {}", frame_ms);
        }
        Ok(Self {
            flock,
            frame_ms,
            now_ms: 0.0,
        })
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Advances `frames` ticks. When `sink` is given, every `every`-th frame
    /// is written to it as one JSON line.
    pub fn run<W: Write + ?Sized>(
        &mut self,
        frames: u64,
        every: u64,
        mut sink: Option<&mut W>,
    ) -> Result<RunSummary> {
        let every = every.max(1);
        let mut was_active = self.flock.cluster_active();

        for _ in 0..frames {
            self.flock.tick(self.now_ms);

            let active = self.flock.cluster_active();
            if active != was_active {
                log::info!(
                    "Cluster pulse {} at {:.0}ms (frame {})",
                    if active { "started" } else { "ended" },
                    self.now_ms,
                    self.flock.ticks()
                );
                was_active = active;
            }

            if let Some(out) = sink.as_deref_mut() {
                if self.flock.ticks() % every == 0 {
                    let snapshot = frame_snapshot(&self.flock, self.now_ms);
                    serde_json::to_writer(&mut *out, &snapshot)
                        .context("Failed to encode snapshot")?;
                    out.write_all(b"\n").context("Failed to write snapshot")?;
                }
            }

            self.now_ms += self.frame_ms;
        }

        if let Some(out) = sink {
            out.flush().context("Failed to flush snapshots")?;
        }

        Ok(RunSummary {
            frames: self.flock.ticks(),
            boid_count: self.flock.len(),
            pulses: self.flock.scheduler().pulses(),
            simulated_ms: self.now_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> SimulationSettings {
        SimulationSettings {
            boid_count: count,
            seed: Some(1),
            ..SimulationSettings::default()
        }
    }

    #[test]
    fn test_build_config_matches_core_defaults() {
        assert_eq!(
            build_config(&SimulationSettings::default()),
            BoidConfig::default()
        );
    }

    #[test]
    fn test_build_flock_rejects_bad_world() {
        let settings = SimulationSettings {
            width: -5.0,
            ..seeded(3)
        };
        let err = build_flock(&settings).unwrap_err();
        assert!(format!("{:#}", err).contains("width"));
    }

    #[test]
    fn test_run_without_sink() {
        let flock = build_flock(&seeded(2)).unwrap();
        let mut runner = Runner::new(flock, 16.0).unwrap();
        let summary = runner.run(5, 1, None::<&mut dyn Write>).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(runner.flock().ticks(), 5);
    }

    #[test]
    fn test_open_sink_without_path() {
        assert!(open_sink(None).unwrap().is_none());
    }

    #[test]
    fn test_runner_rejects_zero_interval() {
        let flock = build_flock(&seeded(3)).unwrap();
        assert!(Runner::new(flock, 0.0).is_err());
    }

    #[test]
    fn test_run_writes_sampled_frames() {
        let flock = build_flock(&seeded(4)).unwrap();
        let mut runner = Runner::new(flock, 10.0).unwrap();
        let mut buffer = Vec::new();

        let summary = runner.run(9, 3, Some(&mut buffer)).unwrap();

        assert_eq!(summary.frames, 9);
        assert_eq!(summary.boid_count, 4);
        assert_eq!(summary.simulated_ms, 90.0);

        let lines: Vec<FrameSnapshot> = String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        let frames: Vec<u64> = lines.iter().map(|f| f.frame).collect();
        assert_eq!(frames, vec![3, 6, 9]);
        assert_eq!(lines[0].time_ms, 20.0);
        assert!(lines.iter().all(|f| f.boids.len() == 4));
    }
}
