//! Cluster pulses: short windows in which cohesion is amplified.
//!
//! The scheduler is polled with the current timestamp instead of owning a
//! timer. One wait is always pending; when it elapses a pulse starts and
//! the next wait is armed straight away, so the pulse length never delays
//! the following pulse. Ending a pulse is left to [`ClusterState::expire`].

use rand::Rng;

use crate::config::ClusterConfig;

/// Whether a pulse is running and when it ends (milliseconds, same clock as `now`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClusterState {
    pub active: bool,
    pub end_time: f64,
}

impl ClusterState {
    pub fn activate(&mut self, now: f64, duration_ms: f64) {
        self.active = true;
        self.end_time = now + duration_ms;
    }

    /// Deactivates the pulse once `now` has passed its end. Returns true on
    /// the transition.
    pub fn expire(&mut self, now: f64) -> bool {
        if self.active && now > self.end_time {
            self.active = false;
            return true;
        }
        false
    }
}

/// Pending-wait bookkeeping for the next pulse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClusterScheduler {
    next_pulse_at: Option<f64>,
    pulses: u64,
}

impl ClusterScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time at which the next pulse fires, once armed.
    pub fn next_pulse_at(&self) -> Option<f64> {
        self.next_pulse_at
    }

    /// Number of pulses started so far.
    pub fn pulses(&self) -> u64 {
        self.pulses
    }

    /// Advances the scheduler to `now`. The first call only arms the wait.
    /// Returns true when a pulse started during this call.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        config: &ClusterConfig,
        state: &mut ClusterState,
        rng: &mut R,
    ) -> bool {
        if !config.enabled {
            return false;
        }

        match self.next_pulse_at {
            None => {
                self.arm(now, config, rng);
                false
            }
            Some(due) if now >= due => {
                self.fire(now, config, state);
                self.arm(now, config, rng);
                true
            }
            Some(_) => false,
        }
    }

    /// Starts a pulse immediately, leaving the pending wait untouched.
    pub fn trigger(&mut self, now: f64, config: &ClusterConfig, state: &mut ClusterState) {
        self.fire(now, config, state);
    }

    fn fire(&mut self, now: f64, config: &ClusterConfig, state: &mut ClusterState) {
        state.activate(now, config.duration_ms);
        self.pulses += 1;
    }

    fn arm<R: Rng + ?Sized>(&mut self, now: f64, config: &ClusterConfig, rng: &mut R) {
        let wait = if config.interval_max_ms > config.interval_min_ms {
            rng.gen_range(config.interval_min_ms..=config.interval_max_ms)
        } else {
            config.interval_min_ms
        };
        self.next_pulse_at = Some(now + wait);
    }
}
