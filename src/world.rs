//! World simulation engine - main tick loop.

use crate::config::Config;
use crate::predator::Predator;
use crate::prey::{Prey, PreyId};
use crate::stats::{Stats, StatsHistory};
use crate::steering;
use crate::vec2::Vec2;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// The simulation world
pub struct World {
    /// Shared prey collection, ordered; removal is applied here and only
    /// here, so every holder of an id sees the same population.
    pub prey: Vec<Prey>,
    pub predators: Vec<Predator>,

    // State
    pub time: f64,
    pub tick: u64,

    // Configuration
    pub config: Config,

    // Statistics
    pub stats: Stats,
    pub stats_history: StatsHistory,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,

    captures_this_tick: usize,
}

impl World {
    /// Create a new world with the given configuration
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut prey = Vec::with_capacity(config.prey.count);
        for id in 0..config.prey.count as PreyId {
            let position = Vec2::new(
                rng.gen_range(0.0..config.world.width),
                rng.gen_range(0.0..config.world.height),
            );
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed = rng.gen_range(0.2..=1.0) * config.prey.max_speed;
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;

            let mut p = Prey::new(id, position, velocity, &config.prey);
            p.wander_angle = angle;
            prey.push(p);
        }

        let mut predators = Vec::with_capacity(config.predator.count);
        for _ in 0..config.predator.count {
            let position = Vec2::new(
                rng.gen_range(0.0..config.world.width),
                rng.gen_range(0.0..config.world.height),
            );
            let angle = rng.gen_range(0.0..std::f64::consts::TAU);
            let speed = rng.gen_range(0.2..=0.6) * config.predator.max_speed;
            let velocity = Vec2::new(angle.cos(), angle.sin()) * speed;

            predators.push(Predator::new(
                position,
                velocity,
                &config.predator,
                config.world.view_distance,
            ));
        }

        Self {
            prey,
            predators,
            time: 0.0,
            tick: 0,
            stats: Stats::new(),
            stats_history: StatsHistory::new(config.logging.stats_interval),
            config,
            rng,
            seed,
            captures_this_tick: 0,
        }
    }

    /// Main simulation step
    pub fn step(&mut self) {
        self.captures_this_tick = 0;
        let dt = self.config.world.time_step;

        // Phase 1: Advance prey wander angles (sequential, seeded RNG)
        let jitter = self.config.prey.wander_jitter;
        for p in &mut self.prey {
            p.wander_angle += self.rng.gen_range(-jitter..=jitter);
        }

        // Phase 2: Parallel steering-force computation (pure)
        let forces = self.compute_prey_forces();

        // Phase 3: Apply forces and integrate prey (sequential)
        let (width, height) = (self.config.world.width, self.config.world.height);
        for (p, force) in self.prey.iter_mut().zip(forces) {
            p.vehicle.apply_force(force);
            p.vehicle.integrate(dt);
            p.vehicle.wrap_around(width, height);
        }

        // Phase 4: Predators hunt, strictly sequential. Each predator's
        // captures are removed from the shared collection before the next
        // predator runs, so a prey is captured at most once per tick.
        self.run_predators(dt);

        // Phase 5: Update statistics
        self.time += dt;
        self.tick += 1;
        self.update_stats();
    }

    /// Compute steering forces for all prey in parallel
    fn compute_prey_forces(&self) -> Vec<Vec2> {
        let predator_positions: Vec<Vec2> = self
            .predators
            .iter()
            .map(|p| p.vehicle.position)
            .collect();

        self.prey
            .par_iter()
            .map(|p| p.steer(&predator_positions, &self.config.prey))
            .collect()
    }

    /// Per-predator pursuit kinematics, hunting pass and capture removal
    fn run_predators(&mut self, dt: f64) {
        let (width, height) = (self.config.world.width, self.config.world.height);
        let now = self.time;

        for i in 0..self.predators.len() {
            let predator = &mut self.predators[i];

            // A pursuit target must reference live prey at the start of the
            // pass; targets captured by an earlier predator are cleared.
            if let Some(target_id) = predator.drive.target() {
                if !self.prey.iter().any(|p| p.id == target_id) {
                    predator.drive.disengage();
                }
            }

            // Steer toward the engaged target, then integrate.
            if let Some(target_id) = predator.drive.target() {
                if let Some(target) = self.prey.iter().find(|p| p.id == target_id) {
                    let force = steering::pursuit(
                        &predator.vehicle,
                        target.vehicle.position,
                        target.vehicle.velocity,
                        self.config.predator.max_force,
                    );
                    predator.vehicle.apply_force(force);
                }
            }
            predator.vehicle.integrate(dt);
            predator.vehicle.wrap_around(width, height);

            let report = predator.hunt(&self.prey, now, &self.config.hunting);

            if !report.captured.is_empty() {
                let before = self.prey.len();
                self.prey.retain(|p| !report.captured.contains(&p.id));
                debug_assert_eq!(
                    before - self.prey.len(),
                    report.captured.len(),
                    "capture set did not match removed prey"
                );
                self.captures_this_tick += report.captured.len();
                log::debug!(
                    "predator {} captured {:?} at tick {}",
                    i,
                    report.captured,
                    self.tick
                );
            }
        }

        // Drives engaged on prey captured this tick (by any predator) would
        // dangle into the next tick; clear them while the removals are fresh.
        for predator in &mut self.predators {
            if let Some(target_id) = predator.drive.target() {
                if !self.prey.iter().any(|p| p.id == target_id) {
                    predator.drive.disengage();
                }
            }
        }

        if self.prey.is_empty() && self.captures_this_tick > 0 {
            log::info!("last prey captured at tick {}", self.tick);
        }
    }

    /// Update statistics
    fn update_stats(&mut self) {
        self.stats.update(
            self.tick,
            self.time,
            &self.prey,
            &self.predators,
            self.captures_this_tick,
        );

        if self.tick % self.stats_history.interval() == 0 {
            self.stats_history.record(self.stats.clone());
        }
    }

    /// Run simulation for specified number of ticks
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step();
        }
    }

    /// Run simulation with callback for progress updates
    pub fn run_with_callback<F>(&mut self, ticks: u64, mut callback: F)
    where
        F: FnMut(&World, u64),
    {
        for i in 0..ticks {
            self.step();
            callback(self, i);
        }
    }

    /// Prey still alive in the world
    pub fn prey_remaining(&self) -> usize {
        self.prey.len()
    }

    /// Captures across all predators
    pub fn captures_total(&self) -> u64 {
        self.predators.iter().map(|p| p.capture_count()).sum()
    }

    /// Check if every prey has been captured
    pub fn is_prey_extinct(&self) -> bool {
        self.prey.is_empty()
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
