//! Predator agents: vision-cone hunting, pursuit and capture bookkeeping.

use crate::config::{HuntingConfig, PredatorConfig};
use crate::hunting::{capture, pursuit, VisionCone};
use crate::prey::{Prey, PreyId};
use crate::steering::PursuitDrive;
use crate::vec2::Vec2;
use crate::vehicle::Vehicle;

/// Full width of the kill-zone cone in degrees; half is used per side.
pub const PERIPHERAL_VISION: f64 = 36.0;

/// Routing of one tick's kill-zone candidates. Every candidate lands in
/// exactly one of the three lists.
#[derive(Debug, Clone, Default)]
pub struct HuntReport {
    /// Prey captured this tick; the world removes these from the shared
    /// collection.
    pub captured: Vec<PreyId>,
    /// Candidates no longer eligible at pursuit time, plus a previously
    /// engaged target that left the kill zone; pursuit is disengaged and the
    /// prey stays in the world.
    pub out_of_zone: Vec<PreyId>,
    /// Candidates still eligible and still uncaught.
    pub chasing: Vec<PreyId>,
}

/// The hunting agent.
#[derive(Debug, Clone)]
pub struct Predator {
    pub vehicle: Vehicle,
    /// Kill-zone radius, set from the world's view distance at construction
    /// and constant for the agent's lifetime.
    kill_zone_radius: f64,
    /// First non-zero velocity observed after construction. Once latched it
    /// is never overwritten; it is the reference the sprint vector scales.
    cruise_velocity: Option<Vec2>,
    /// Simulation time of the most recent active-pursuit evaluation.
    last_chase_time: Option<f64>,
    capture_count: u64,
    pub drive: PursuitDrive,
}

impl Predator {
    pub fn new(position: Vec2, velocity: Vec2, config: &PredatorConfig, view_distance: f64) -> Self {
        Self {
            vehicle: Vehicle::new(position, velocity, config.bounding_radius, config.max_speed),
            kill_zone_radius: view_distance,
            cruise_velocity: None,
            last_chase_time: None,
            capture_count: 0,
            drive: PursuitDrive::new(),
        }
    }

    pub fn kill_zone_radius(&self) -> f64 {
        self.kill_zone_radius
    }

    pub fn capture_count(&self) -> u64 {
        self.capture_count
    }

    pub fn cruise_velocity(&self) -> Option<Vec2> {
        self.cruise_velocity
    }

    pub fn last_chase_time(&self) -> Option<f64> {
        self.last_chase_time
    }

    fn vision_cone(&self, config: &HuntingConfig) -> VisionCone {
        VisionCone::new(self.kill_zone_radius, PERIPHERAL_VISION, config)
    }

    fn latch_cruise_velocity(&mut self) {
        if self.cruise_velocity.is_none() && !self.vehicle.velocity.is_zero() {
            self.cruise_velocity = Some(self.vehicle.velocity);
        }
    }

    /// One full hunting pass: scan the shared prey collection for kill-zone
    /// candidates, then chase them. The caller removes `captured` from the
    /// collection; nothing else deletes prey.
    pub fn hunt(&mut self, prey: &[Prey], now: f64, config: &HuntingConfig) -> HuntReport {
        self.latch_cruise_velocity();

        let cone = self.vision_cone(config);
        let candidates = cone.candidates(self.vehicle.position, self.vehicle.heading, prey);

        let mut report = self.chase(&candidates, prey, now, config);

        // An engaged target that fell out of the candidate set has left the
        // kill zone: pursuit ends, the prey lives on.
        if let Some(target_id) = self.drive.target() {
            if !candidates.contains(&target_id) {
                self.drive.disengage();
                report.out_of_zone.push(target_id);
            }
        }

        report
    }

    /// Pursuit controller plus capture resolver over an already-filtered
    /// candidate set. Eligibility is re-tested against current positions, so
    /// candidates filtered before upstream movement can fall out here.
    pub fn chase(
        &mut self,
        candidates: &[PreyId],
        prey: &[Prey],
        now: f64,
        config: &HuntingConfig,
    ) -> HuntReport {
        #[cfg(debug_assertions)]
        {
            let mut seen = std::collections::HashSet::new();
            debug_assert!(
                candidates.iter().all(|id| seen.insert(*id)),
                "duplicate prey id in kill-zone candidate set"
            );
        }

        let cone = self.vision_cone(config);
        let mut report = HuntReport::default();

        for &id in candidates {
            let Some(target) = prey.iter().find(|p| p.id == id) else {
                // Candidate vanished between filtering and pursuit; treat as
                // out of zone so no candidate is silently dropped.
                self.drive.disengage();
                report.out_of_zone.push(id);
                continue;
            };

            if cone.contains(
                self.vehicle.position,
                self.vehicle.heading,
                target.vehicle.position,
            ) {
                let cruise = self.cruise_velocity.unwrap_or(Vec2::ZERO);
                // Raw velocity write; the max-speed clamp happens at the
                // next integration, as the kinematics layer owns it.
                self.vehicle.velocity =
                    pursuit::chase_velocity(cruise, now, self.last_chase_time, config);

                self.drive.engage(id);
                self.last_chase_time = Some(now);

                if capture::overlaps(&self.vehicle, &target.vehicle) {
                    self.capture_count += 1;
                    report.captured.push(id);
                } else {
                    report.chasing.push(id);
                }
            } else {
                self.drive.disengage();
                report.out_of_zone.push(id);
            }
        }

        report
    }

    /// Endpoints of the two kill-zone cone edges, at heading angle plus and
    /// minus half the peripheral vision. Read-only geometry for renderers.
    pub fn kill_zone_arms(&self) -> (Vec2, Vec2) {
        let heading_angle = self.vehicle.heading.y.atan2(self.vehicle.heading.x);
        let half = (PERIPHERAL_VISION / 2.0).to_radians();
        let arm = |angle: f64| {
            self.vehicle.position
                + Vec2::new(angle.cos(), angle.sin()) * self.kill_zone_radius
        };
        (arm(heading_angle + half), arm(heading_angle - half))
    }
}
