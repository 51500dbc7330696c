//! Prey agents: wandering grazers that flee nearby predators.

use crate::config::PreyConfig;
use crate::steering;
use crate::vec2::Vec2;
use crate::vehicle::Vehicle;

/// Unique prey identifier. Prey identity is by id, never by position.
pub type PreyId = u64;

/// A hunted agent, owned by the world's shared prey collection.
#[derive(Debug, Clone)]
pub struct Prey {
    pub id: PreyId,
    pub vehicle: Vehicle,
    /// Current wander angle in radians, jittered by the world each tick.
    pub wander_angle: f64,
}

impl Prey {
    pub fn new(id: PreyId, position: Vec2, velocity: Vec2, config: &PreyConfig) -> Self {
        Self {
            id,
            vehicle: Vehicle::new(position, velocity, config.bounding_radius, config.max_speed),
            wander_angle: 0.0,
        }
    }

    /// Compute this tick's steering force: wander plus flight from the
    /// nearest predator. Pure with respect to the prey, so the world can
    /// evaluate all prey in parallel.
    pub fn steer(&self, predator_positions: &[Vec2], config: &PreyConfig) -> Vec2 {
        let wander =
            steering::wander_direction(self.wander_angle) * config.wander_strength;

        let nearest = predator_positions
            .iter()
            .copied()
            .min_by(|a, b| {
                self.vehicle
                    .position
                    .distance(*a)
                    .total_cmp(&self.vehicle.position.distance(*b))
            });

        let flight = match nearest {
            Some(threat) => {
                steering::flee(&self.vehicle, threat, config.flee_distance, config.max_force)
                    * config.flee_weight
            }
            None => Vec2::ZERO,
        };

        wander + flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prey_flees_nearest_predator() {
        let config = PreyConfig::default();
        let prey = Prey::new(1, Vec2::new(100.0, 100.0), Vec2::ZERO, &config);

        // Predator closing in from the east; force should push west.
        let threat = Vec2::new(100.0 + config.flee_distance * 0.5, 100.0);
        let force = prey.steer(&[threat], &config);
        assert!(force.x < 0.0);
    }

    #[test]
    fn test_prey_wanders_without_predators() {
        let config = PreyConfig::default();
        let mut prey = Prey::new(1, Vec2::new(50.0, 50.0), Vec2::ZERO, &config);
        prey.wander_angle = 0.0;

        let force = prey.steer(&[], &config);
        assert!((force.x - config.wander_strength).abs() < 1e-12);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_distant_predator_ignored() {
        let config = PreyConfig::default();
        let mut prey = Prey::new(1, Vec2::new(50.0, 50.0), Vec2::ZERO, &config);
        prey.wander_angle = std::f64::consts::FRAC_PI_2;

        let far = Vec2::new(50.0 + config.flee_distance * 10.0, 50.0);
        let force = prey.steer(&[far], &config);
        // Only the wander component remains.
        assert!(force.x.abs() < 1e-9);
        assert!(force.y > 0.0);
    }
}
