//! Statistics tracking for the simulation.

use crate::predator::Predator;
use crate::prey::Prey;
use serde::{Deserialize, Serialize};

/// Statistics snapshot for a simulation tick
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Tick counter
    pub tick: u64,
    /// Simulation time
    pub time: f64,
    /// Prey still in the world
    pub prey_remaining: usize,
    /// Number of predators
    pub predator_count: usize,
    /// Captures resolved this tick
    pub captures_this_tick: usize,
    /// Captures across the whole run
    pub captures_total: u64,
    /// Predators currently engaged on a pursuit target
    pub active_pursuits: usize,
    /// Mean prey speed
    pub prey_speed_mean: f64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats from current simulation state
    pub fn update(
        &mut self,
        tick: u64,
        time: f64,
        prey: &[Prey],
        predators: &[Predator],
        captures_this_tick: usize,
    ) {
        self.tick = tick;
        self.time = time;
        self.prey_remaining = prey.len();
        self.predator_count = predators.len();
        self.captures_this_tick = captures_this_tick;
        self.captures_total = predators.iter().map(|p| p.capture_count()).sum();
        self.active_pursuits = predators.iter().filter(|p| p.drive.is_engaged()).count();
        self.prey_speed_mean = if prey.is_empty() {
            0.0
        } else {
            prey.iter().map(|p| p.vehicle.speed()).sum::<f64>() / prey.len() as f64
        };
    }

    /// One-line progress summary
    pub fn summary(&self) -> String {
        format!(
            "tick {:>6} | prey {:>4} | captures {:>4} (+{}) | pursuits {}",
            self.tick,
            self.prey_remaining,
            self.captures_total,
            self.captures_this_tick,
            self.active_pursuits,
        )
    }
}

/// Rolling history of stats snapshots
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsHistory {
    pub snapshots: Vec<Stats>,
    interval: u64,
}

impl StatsHistory {
    pub fn new(interval: u64) -> Self {
        Self {
            snapshots: Vec::new(),
            interval: interval.max(1),
        }
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    pub fn record(&mut self, stats: Stats) {
        self.snapshots.push(stats);
    }

    /// (tick, prey remaining) series
    pub fn prey_series(&self) -> Vec<(u64, usize)> {
        self.snapshots.iter().map(|s| (s.tick, s.prey_remaining)).collect()
    }

    /// (tick, total captures) series
    pub fn capture_series(&self) -> Vec<(u64, u64)> {
        self.snapshots.iter().map(|s| (s.tick, s.captures_total)).collect()
    }

    /// Save history to a JSON file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.snapshots)?;
        std::fs::write(path, json)
    }
}
