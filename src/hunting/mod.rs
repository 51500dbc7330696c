//! Hunting systems for predator agents.
//!
//! This module contains:
//! - Vision-cone filtering (kill-zone candidate scan)
//! - Sprint/cruise speed policy during pursuit
//! - Capture resolution (bounding-circle overlap)

pub mod capture;
pub mod pursuit;
pub mod vision;

pub use capture::overlaps;
pub use pursuit::{chase_velocity, SPRINT_MULTIPLIER};
pub use vision::VisionCone;
