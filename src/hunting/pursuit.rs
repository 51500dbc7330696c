//! Sprint/cruise speed policy applied while actively pursuing prey.

use crate::config::HuntingConfig;
use crate::vec2::Vec2;

/// Velocity multiplier while sprinting after prey.
pub const SPRINT_MULTIPLIER: f64 = 4.0;

/// Velocity for an eligible pursuit evaluation.
///
/// Exactly two outcomes exist: the cruise vector unchanged, or the sprint
/// vector `(cruise.y * 4, cruise.x * 4)`. The component swap in the sprint
/// vector is intentional and must not be "corrected" to `(x, y)`.
pub fn chase_velocity(
    cruise: Vec2,
    now: f64,
    last_chase: Option<f64>,
    config: &HuntingConfig,
) -> Vec2 {
    if sprint_active(now, last_chase, config) {
        Vec2::new(
            cruise.y * SPRINT_MULTIPLIER,
            cruise.x * SPRINT_MULTIPLIER,
        )
    } else {
        cruise
    }
}

/// Whether the sprint boost applies at `now`.
///
/// The historical trigger compared the clock against itself plus a constant
/// and so always fired; `timed_sprint = false` keeps that parity behavior.
/// With `timed_sprint = true` the boost only fires when the previous chase
/// happened less than `sprint_window` time units ago.
fn sprint_active(now: f64, last_chase: Option<f64>, config: &HuntingConfig) -> bool {
    if !config.timed_sprint {
        return true;
    }
    match last_chase {
        Some(t) => now - t < config.sprint_window,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity() -> HuntingConfig {
        HuntingConfig::default()
    }

    fn timed() -> HuntingConfig {
        HuntingConfig {
            timed_sprint: true,
            ..HuntingConfig::default()
        }
    }

    #[test]
    fn test_sprint_swaps_and_scales() {
        let cruise = Vec2::new(3.0, -2.0);
        let v = chase_velocity(cruise, 0.0, None, &parity());
        assert_eq!(v, Vec2::new(-8.0, 12.0));
    }

    #[test]
    fn test_parity_mode_always_sprints() {
        let cruise = Vec2::new(1.0, 0.0);
        let v = chase_velocity(cruise, 10_000.0, None, &parity());
        assert_eq!(v, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_timed_sprint_requires_recent_chase() {
        let cruise = Vec2::new(1.0, 2.0);
        let config = timed();

        // No prior chase: cruise.
        assert_eq!(chase_velocity(cruise, 100.0, None, &config), cruise);

        // Chase 10 units ago: sprint.
        let sprint = chase_velocity(cruise, 100.0, Some(90.0), &config);
        assert_eq!(sprint, Vec2::new(8.0, 4.0));

        // Chase longer than the window ago: back to cruise.
        let stale = chase_velocity(cruise, 100.0 + config.sprint_window, Some(90.0), &config);
        assert_eq!(stale, cruise);
    }

    #[test]
    fn test_outcome_is_bimodal() {
        // Any combination of inputs yields exactly cruise or exactly sprint.
        let cruise = Vec2::new(5.0, 7.0);
        let sprint = Vec2::new(28.0, 20.0);
        for config in [parity(), timed()] {
            for last in [None, Some(0.0), Some(99.0), Some(100.0)] {
                let v = chase_velocity(cruise, 100.0, last, &config);
                assert!(v == cruise || v == sprint, "unexpected velocity {v:?}");
            }
        }
    }
}
