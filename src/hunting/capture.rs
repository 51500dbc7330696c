//! Capture resolution: bounding-circle overlap between predator and prey.

use crate::vehicle::Vehicle;

/// True when the prey's bounding circle touches the predator's.
///
/// The test is `distance - prey_radius <= predator_radius`: the gap left
/// after discounting the prey's own radius must fit inside the predator's.
pub fn overlaps(predator: &Vehicle, prey: &Vehicle) -> bool {
    predator.position.distance(prey.position) - prey.bounding_radius
        <= predator.bounding_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;

    fn body(x: f64, radius: f64) -> Vehicle {
        Vehicle::new(Vec2::new(x, 0.0), Vec2::ZERO, radius, 100.0)
    }

    #[test]
    fn test_overlap_at_close_range() {
        // Gap 6, prey radius 2, predator radius 5: 6 - 2 = 4 <= 5.
        let predator = body(0.0, 5.0);
        let prey = body(6.0, 2.0);
        assert!(overlaps(&predator, &prey));
    }

    #[test]
    fn test_no_overlap_beyond_reach() {
        // Gap 8, prey radius 2, predator radius 5: 8 - 2 = 6 > 5.
        let predator = body(0.0, 5.0);
        let prey = body(8.0, 2.0);
        assert!(!overlaps(&predator, &prey));
    }

    #[test]
    fn test_exact_touch_captures() {
        // Gap 7, prey radius 2, predator radius 5: 7 - 2 = 5 <= 5.
        let predator = body(0.0, 5.0);
        let prey = body(7.0, 2.0);
        assert!(overlaps(&predator, &prey));
    }
}
