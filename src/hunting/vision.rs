//! Vision-cone filter: which prey sit inside a predator's kill zone.
//!
//! The kill zone is a circle of `radius` around the predator intersected
//! with a cone of `peripheral_degrees` centered on its heading. A prey is a
//! candidate when it is within the radius (inclusive) and its bearing offset
//! is strictly less than half the peripheral angle.

use crate::config::HuntingConfig;
use crate::prey::{Prey, PreyId};
use crate::vec2::Vec2;

/// Geometry of a predator's kill zone.
#[derive(Debug, Clone, Copy)]
pub struct VisionCone {
    /// Kill-zone radius, fixed at predator construction.
    pub radius: f64,
    /// Full cone angle in degrees; half is used per side.
    pub peripheral_degrees: f64,
    /// When true, the prey bearing reuses the acos-derived angle between
    /// heading and offset instead of the offset's own atan2 bearing. See
    /// [`bearing_offset_degrees`].
    pub approximate_bearing: bool,
}

impl VisionCone {
    pub fn new(radius: f64, peripheral_degrees: f64, config: &HuntingConfig) -> Self {
        Self {
            radius,
            peripheral_degrees,
            approximate_bearing: config.approximate_bearing,
        }
    }

    /// Distance-and-angle eligibility test for a single target position.
    pub fn contains(&self, position: Vec2, heading: Vec2, target: Vec2) -> bool {
        if position.distance(target) > self.radius {
            return false;
        }
        let offset = target - position;
        if offset.is_zero() {
            // Coincident positions: in range by distance, angle undefined.
            // Conservatively eligible.
            return true;
        }
        match bearing_offset_degrees(heading, offset, self.approximate_bearing) {
            Some(d_theta) => d_theta < self.peripheral_degrees / 2.0,
            None => false,
        }
    }

    /// Scan the shared prey collection and return the ids inside the kill
    /// zone. Pure; input order is preserved.
    pub fn candidates(&self, position: Vec2, heading: Vec2, prey: &[Prey]) -> Vec<PreyId> {
        prey.iter()
            .filter(|p| self.contains(position, heading, p.vehicle.position))
            .map(|p| p.id)
            .collect()
    }
}

/// Angular offset in degrees between a heading and a target offset vector.
///
/// Approximate mode reproduces the historical formula: the "prey bearing" is
/// `acos(heading . offset)` in degrees, compared against the heading's atan2
/// angle. That reused acos angle is not a true bearing, so the result is not
/// rotation invariant; it is kept selectable for behavioral parity.
/// Exact mode returns the true angle between the two vectors.
///
/// Returns `None` when either vector has zero length.
fn bearing_offset_degrees(heading: Vec2, offset: Vec2, approximate: bool) -> Option<f64> {
    let h = heading.normalize();
    let to_target = offset.normalize();
    if h.is_zero() || to_target.is_zero() {
        return None;
    }

    let dot = h.dot(to_target).clamp(-1.0, 1.0);
    let angle_between = dot.acos().to_degrees();

    if approximate {
        let heading_theta = h.y.atan2(h.x).to_degrees();
        Some((angle_between - heading_theta).abs())
    } else {
        Some(angle_between)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreyConfig;

    fn cone(approximate: bool) -> VisionCone {
        VisionCone {
            radius: 50.0,
            peripheral_degrees: 36.0,
            approximate_bearing: approximate,
        }
    }

    fn prey_at(id: PreyId, x: f64, y: f64) -> Prey {
        Prey::new(id, Vec2::new(x, y), Vec2::ZERO, &PreyConfig::default())
    }

    #[test]
    fn test_prey_dead_ahead_is_eligible() {
        let c = cone(true);
        assert!(c.contains(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(30.0, 0.0)));
    }

    #[test]
    fn test_prey_at_right_angle_is_ineligible() {
        let c = cone(true);
        assert!(!c.contains(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let c = cone(true);
        assert!(c.contains(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(50.0, 0.0)));
        assert!(!c.contains(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(50.001, 0.0)));
    }

    #[test]
    fn test_coincident_positions_are_eligible() {
        let c = cone(true);
        assert!(c.contains(Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0), Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_zero_heading_excludes_without_nan() {
        let c = cone(true);
        assert!(!c.contains(Vec2::ZERO, Vec2::ZERO, Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_candidates_preserve_order() {
        let c = cone(true);
        let prey = vec![
            prey_at(1, 10.0, 0.0),
            prey_at(2, 0.0, 40.0), // off-axis, excluded
            prey_at(3, 20.0, 0.0),
        ];
        let ids = c.candidates(Vec2::ZERO, Vec2::new(1.0, 0.0), &prey);
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_approximate_bearing_breaks_rotation_invariance() {
        // Prey 10 degrees off-axis. With the heading along +x both modes
        // agree; rotate the whole scene 90 degrees and the approximate
        // formula subtracts the new heading angle, flipping the verdict.
        // This is the documented deviation, not a defect.
        let deg = 10.0f64.to_radians();
        let ahead = Vec2::new(deg.cos(), deg.sin()) * 30.0;

        assert!(cone(true).contains(Vec2::ZERO, Vec2::new(1.0, 0.0), ahead));
        assert!(cone(false).contains(Vec2::ZERO, Vec2::new(1.0, 0.0), ahead));

        let rotated = Vec2::new(-ahead.y, ahead.x);
        assert!(!cone(true).contains(Vec2::ZERO, Vec2::new(0.0, 1.0), rotated));
        assert!(cone(false).contains(Vec2::ZERO, Vec2::new(0.0, 1.0), rotated));
    }

    #[test]
    fn test_exact_mode_is_rotation_invariant_behind_cone() {
        // Directly behind: 180 degrees off in exact mode, always excluded.
        let c = cone(false);
        assert!(!c.contains(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(-30.0, 0.0)));
    }
}
