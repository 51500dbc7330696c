//! Configuration system for the savanna simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    pub predator: PredatorConfig,
    pub prey: PreyConfig,
    #[serde(default)]
    pub hunting: HuntingConfig,
    pub logging: LoggingConfig,
}

/// World/environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// World width in world units
    pub width: f64,
    /// World height in world units
    pub height: f64,
    /// Simulation time advanced per tick
    pub time_step: f64,
    /// View distance: the kill-zone radius handed to each predator at
    /// construction, constant for the predator's lifetime
    pub view_distance: f64,
}

/// Predator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredatorConfig {
    /// Number of predators at start
    pub count: usize,
    /// Maximum speed in world units per time unit
    pub max_speed: f64,
    /// Maximum steering force per tick
    pub max_force: f64,
    /// Bounding-circle radius used for capture tests
    pub bounding_radius: f64,
}

/// Prey configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreyConfig {
    /// Number of prey at start
    pub count: usize,
    /// Maximum speed in world units per time unit
    pub max_speed: f64,
    /// Maximum steering force per tick
    pub max_force: f64,
    /// Bounding-circle radius used for capture tests
    pub bounding_radius: f64,
    /// Random change applied to the wander angle each tick (radians)
    pub wander_jitter: f64,
    /// Magnitude of the wander steering force
    pub wander_strength: f64,
    /// Distance at which prey start fleeing a predator
    pub flee_distance: f64,
    /// Weight of the flee force relative to wander
    pub flee_weight: f64,
}

/// Hunting behavior switches.
///
/// The defaults preserve the historical hunting semantics; the corrected
/// alternatives are selectable per field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuntingConfig {
    /// Use the acos-derived prey bearing in the vision-cone test. When
    /// false, the true angle between heading and prey offset is used.
    pub approximate_bearing: bool,
    /// Sprint only when the previous chase happened within `sprint_window`.
    /// When false, the predator sprints on every eligible pursuit tick.
    pub timed_sprint: bool,
    /// Recent-chase window for timed sprinting, in simulation time units
    pub sprint_window: f64,
}

/// Logging and stats configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Ticks between stats snapshots
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            predator: PredatorConfig::default(),
            prey: PreyConfig::default(),
            hunting: HuntingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            time_step: 0.05,
            view_distance: 50.0,
        }
    }
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self {
            count: 1,
            max_speed: 120.0,
            max_force: 15.0,
            bounding_radius: 5.0,
        }
    }
}

impl Default for PreyConfig {
    fn default() -> Self {
        Self {
            count: 60,
            max_speed: 70.0,
            max_force: 10.0,
            bounding_radius: 2.0,
            wander_jitter: 0.3,
            wander_strength: 6.0,
            flee_distance: 80.0,
            flee_weight: 2.0,
        }
    }
}

impl Default for HuntingConfig {
    fn default() -> Self {
        Self {
            approximate_bearing: true,
            timed_sprint: false,
            sprint_window: 250.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 50,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            return Err("world dimensions must be positive".to_string());
        }
        if self.world.time_step <= 0.0 {
            return Err("time_step must be positive".to_string());
        }
        if self.world.view_distance <= 0.0 {
            return Err("view_distance must be positive".to_string());
        }
        if self.prey.count == 0 {
            return Err("prey count must be > 0".to_string());
        }
        if self.predator.count == 0 {
            return Err("predator count must be > 0".to_string());
        }
        if self.predator.bounding_radius <= 0.0 || self.prey.bounding_radius <= 0.0 {
            return Err("bounding radii must be positive".to_string());
        }
        if self.predator.max_speed <= 0.0 || self.prey.max_speed <= 0.0 {
            return Err("max speeds must be positive".to_string());
        }
        if self.hunting.sprint_window <= 0.0 {
            return Err("sprint_window must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.world.view_distance, loaded.world.view_distance);
        assert_eq!(config.hunting.timed_sprint, loaded.hunting.timed_sprint);
    }

    #[test]
    fn test_hunting_defaults_preserve_parity() {
        let config = HuntingConfig::default();
        assert!(config.approximate_bearing);
        assert!(!config.timed_sprint);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.world.view_distance = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.prey.count = 0;
        assert!(config.validate().is_err());
    }
}
