//! # SAVANNA
//!
//! Predator-prey pursuit simulation with vision-cone hunting.
//!
//! Each tick, every predator scans the shared prey collection for prey
//! inside its kill zone (a distance- and angle-bounded cone in front of it),
//! chases eligible prey with a sprint/cruise speed policy, and resolves
//! captures by bounding-circle overlap. Captured prey are removed from the
//! world; prey that slip out of the cone are released from pursuit but live
//! on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use savanna::{Config, World};
//!
//! // Create world with default config
//! let config = Config::default();
//! let mut world = World::new(config);
//!
//! // Run simulation
//! world.run(1000);
//!
//! // Check results
//! println!("Prey remaining: {}", world.prey_remaining());
//! println!("Captures: {}", world.captures_total());
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use savanna::Config;
//!
//! let mut config = Config::default();
//! config.prey.count = 200;
//! config.world.view_distance = 75.0;
//! // Corrected hunting semantics instead of historical parity:
//! config.hunting.approximate_bearing = false;
//! config.hunting.timed_sprint = true;
//! ```

pub mod config;
pub mod hunting;
pub mod predator;
pub mod prey;
pub mod stats;
pub mod steering;
pub mod vec2;
pub mod vehicle;
pub mod world;

// Re-export main types
pub use config::Config;
pub use predator::Predator;
pub use prey::Prey;
pub use vec2::Vec2;
pub use world::World;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(ticks: u64, prey_count: usize) -> BenchmarkResult {
    use std::time::Instant;

    let mut config = Config::default();
    config.prey.count = prey_count;

    let mut world = World::new(config);

    let start = Instant::now();
    world.run(ticks);
    let elapsed = start.elapsed();

    BenchmarkResult {
        ticks,
        initial_prey: prey_count,
        prey_remaining: world.prey_remaining(),
        captures: world.captures_total(),
        elapsed_secs: elapsed.as_secs_f64(),
        ticks_per_second: ticks as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub ticks: u64,
    pub initial_prey: usize,
    pub prey_remaining: usize,
    pub captures: u64,
    pub elapsed_secs: f64,
    pub ticks_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Ticks: {}", self.ticks)?;
        writeln!(f, "Prey: {} -> {}", self.initial_prey, self.prey_remaining)?;
        writeln!(f, "Captures: {}", self.captures)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} ticks/s", self.ticks_per_second)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_quick_simulation() {
        let config = Config::default();
        let mut world = World::new(config);

        world.run(100);

        assert_eq!(world.tick, 100);
    }

    #[test]
    fn test_benchmark() {
        let result = benchmark(100, 50);

        assert_eq!(result.ticks, 100);
        assert!(result.ticks_per_second > 0.0);
    }
}
