//! Steering behaviors and the predator's pursuit drive.
//!
//! Forces are desired-velocity deltas in the classic steering style: compute
//! a desired velocity, subtract the current one, clamp to a maximum force.

use crate::prey::PreyId;
use crate::vec2::Vec2;
use crate::vehicle::Vehicle;

/// Steer toward a fixed point at full speed.
pub fn seek(vehicle: &Vehicle, target: Vec2, max_force: f64) -> Vec2 {
    let desired = (target - vehicle.position).normalize() * vehicle.max_speed;
    (desired - vehicle.velocity).limit(max_force)
}

/// Steer away from a threat when it is within `panic_distance`.
pub fn flee(vehicle: &Vehicle, threat: Vec2, panic_distance: f64, max_force: f64) -> Vec2 {
    if vehicle.position.distance(threat) > panic_distance {
        return Vec2::ZERO;
    }
    let desired = (vehicle.position - threat).normalize() * vehicle.max_speed;
    (desired - vehicle.velocity).limit(max_force)
}

/// Steer toward where a moving target will be, not where it is.
///
/// The look-ahead time is proportional to the gap and inversely proportional
/// to the closing speed, so a nearby slow target is intercepted directly.
pub fn pursuit(vehicle: &Vehicle, evader_pos: Vec2, evader_vel: Vec2, max_force: f64) -> Vec2 {
    let to_evader = evader_pos - vehicle.position;
    let closing_speed = vehicle.max_speed + evader_vel.length();
    let look_ahead = if closing_speed > 0.0 {
        to_evader.length() / closing_speed
    } else {
        0.0
    };
    seek(vehicle, evader_pos + evader_vel * look_ahead, max_force)
}

/// Unit direction for a wander angle in radians.
pub fn wander_direction(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// The pursuit-seeking capability of a predator.
///
/// Holds at most one target id; the world resolves the id against the live
/// prey collection each tick and clears it when the prey is gone.
#[derive(Debug, Clone, Default)]
pub struct PursuitDrive {
    target: Option<PreyId>,
}

impl PursuitDrive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engage(&mut self, prey: PreyId) {
        self.target = Some(prey);
    }

    pub fn disengage(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<PreyId> {
        self.target
    }

    pub fn is_engaged(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(pos: Vec2, vel: Vec2) -> Vehicle {
        Vehicle::new(pos, vel, 1.0, 10.0)
    }

    #[test]
    fn test_seek_points_at_target() {
        let v = body_at(Vec2::ZERO, Vec2::ZERO);
        let force = seek(&v, Vec2::new(100.0, 0.0), 5.0);
        assert!(force.x > 0.0);
        assert_eq!(force.y, 0.0);
        assert!(force.length() <= 5.0 + 1e-12);
    }

    #[test]
    fn test_flee_outside_panic_distance_is_zero() {
        let v = body_at(Vec2::ZERO, Vec2::ZERO);
        assert_eq!(flee(&v, Vec2::new(200.0, 0.0), 50.0, 5.0), Vec2::ZERO);
        assert!(flee(&v, Vec2::new(10.0, 0.0), 50.0, 5.0).x < 0.0);
    }

    #[test]
    fn test_pursuit_leads_moving_target() {
        let v = body_at(Vec2::ZERO, Vec2::ZERO);
        // Evader ahead, moving up: the pursuit force gains a y component
        // that plain seek would not have.
        let pure_seek = seek(&v, Vec2::new(50.0, 0.0), 5.0);
        let lead = pursuit(&v, Vec2::new(50.0, 0.0), Vec2::new(0.0, 8.0), 5.0);
        assert_eq!(pure_seek.y, 0.0);
        assert!(lead.y > 0.0);
    }

    #[test]
    fn test_drive_engage_disengage() {
        let mut drive = PursuitDrive::new();
        assert!(!drive.is_engaged());
        drive.engage(7);
        assert_eq!(drive.target(), Some(7));
        drive.disengage();
        assert_eq!(drive.target(), None);
    }
}
