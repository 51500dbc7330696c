//! Steerable kinematic body shared by predators and prey.

use crate::vec2::Vec2;

/// A point-mass body with a heading and a bounding circle.
///
/// Both agent kinds embed a `Vehicle` rather than extending a common base:
/// the hunting logic layers its own state on top of this.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Unit vector of the last non-zero travel direction.
    pub heading: Vec2,
    /// Radius of the bounding circle used for collision tests.
    pub bounding_radius: f64,
    /// Speed cap applied during integration.
    pub max_speed: f64,
}

impl Vehicle {
    pub fn new(position: Vec2, velocity: Vec2, bounding_radius: f64, max_speed: f64) -> Self {
        let heading = if velocity.is_zero() {
            Vec2::new(1.0, 0.0)
        } else {
            velocity.normalize()
        };
        Self {
            position,
            velocity,
            heading,
            bounding_radius,
            max_speed,
        }
    }

    /// Accumulate a steering force into the velocity, respecting `max_speed`.
    pub fn apply_force(&mut self, force: Vec2) {
        self.velocity = (self.velocity + force).limit(self.max_speed);
    }

    /// Advance position by one time step and refresh the heading.
    ///
    /// The heading keeps its previous value while the body is stationary, so
    /// a vision cone stays aimed where the agent last travelled.
    pub fn integrate(&mut self, dt: f64) {
        self.velocity = self.velocity.limit(self.max_speed);
        self.position += self.velocity * dt;
        if self.velocity.length_sq() > f64::EPSILON {
            self.heading = self.velocity.normalize();
        }
    }

    /// Toroidal world edges: leaving one side re-enters on the opposite side.
    pub fn wrap_around(&mut self, width: f64, height: f64) {
        if self.position.x < 0.0 {
            self.position.x += width;
        } else if self.position.x >= width {
            self.position.x -= width;
        }
        if self.position.y < 0.0 {
            self.position.y += height;
        } else if self.position.y >= height {
            self.position.y -= height;
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_moves_and_sets_heading() {
        let mut v = Vehicle::new(Vec2::ZERO, Vec2::new(0.0, 2.0), 1.0, 10.0);
        v.integrate(1.0);
        assert_eq!(v.position, Vec2::new(0.0, 2.0));
        assert_eq!(v.heading, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_heading_persists_when_stationary() {
        let mut v = Vehicle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, 10.0);
        v.integrate(1.0);
        v.velocity = Vec2::ZERO;
        v.integrate(1.0);
        assert_eq!(v.heading, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_max_speed_clamp() {
        let mut v = Vehicle::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0, 10.0);
        v.integrate(1.0);
        assert!((v.speed() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_around() {
        let mut v = Vehicle::new(Vec2::new(-5.0, 105.0), Vec2::ZERO, 1.0, 10.0);
        v.wrap_around(100.0, 100.0);
        assert_eq!(v.position, Vec2::new(95.0, 5.0));
    }
}
