//! Orbit camera controls
//!
//! Rotates the camera around its target on a sphere in response to pointer
//! drags. With damping enabled, each drag adds to a pending rotation that is
//! released gradually over the following frames, giving the camera inertia.

use crate::foundation::math::{Vec3, constants};
use super::Camera;

/// Keeps the camera off the poles where the up vector degenerates
const POLAR_EPSILON: f32 = 1e-4;

/// Azimuth/polar rotation pending application
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct SphericalDelta {
    theta: f32,
    phi: f32,
}

/// Damped orbit controller for a [`Camera`]
#[derive(Debug, Clone)]
pub struct OrbitControls {
    enable_damping: bool,
    damping_factor: f32,
    pending: SphericalDelta,
}

impl OrbitControls {
    /// Create controls; `damping_factor` is the fraction of pending rotation applied per update
    pub fn new(enable_damping: bool, damping_factor: f32) -> Self {
        Self {
            enable_damping,
            damping_factor: damping_factor.clamp(f32::EPSILON, 1.0),
            pending: SphericalDelta::default(),
        }
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` pixels on a viewport `viewport_height` tall
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: u32) {
        let height = viewport_height.max(1) as f32;
        self.pending.theta -= constants::TAU * dx / height;
        self.pending.phi -= constants::TAU * dy / height;
        log::trace!("Orbit drag queued: theta={:.4} phi={:.4}", self.pending.theta, self.pending.phi);
    }

    /// True while rotation remains to be applied
    pub fn is_moving(&self) -> bool {
        self.pending.theta.abs() > 1e-6 || self.pending.phi.abs() > 1e-6
    }

    /// Apply pending rotation to the camera; call once per frame
    pub fn update(&mut self, camera: &mut Camera) {
        if !self.is_moving() {
            self.pending = SphericalDelta::default();
            return;
        }

        let fraction = if self.enable_damping { self.damping_factor } else { 1.0 };
        let offset = camera.position - camera.target;
        let radius = offset.magnitude();
        if radius <= f32::EPSILON {
            return;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        theta += self.pending.theta * fraction;
        phi = (phi + self.pending.phi * fraction).clamp(POLAR_EPSILON, constants::PI - POLAR_EPSILON);

        let sin_phi = phi.sin();
        let rotated = Vec3::new(radius * sin_phi * theta.sin(), radius * phi.cos(), radius * sin_phi * theta.cos());
        camera.position = camera.target + rotated;

        if self.enable_damping {
            self.pending.theta *= 1.0 - self.damping_factor;
            self.pending.phi *= 1.0 - self.damping_factor;
        } else {
            self.pending = SphericalDelta::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::perspective(Vec3::new(0.0, 5.0, 12.0), 45.0, 1.0, 0.1, 1000.0)
    }

    #[test]
    fn test_drag_preserves_distance_to_target() {
        let mut camera = camera();
        let radius = camera.distance_to_target();
        let mut controls = OrbitControls::new(true, 0.05);
        controls.drag(120.0, -40.0, 600);
        for _ in 0..500 {
            controls.update(&mut camera);
        }
        assert_relative_eq!(camera.distance_to_target(), radius, epsilon = 1e-3);
    }

    #[test]
    fn test_damping_converges() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(true, 0.05);
        controls.drag(300.0, 0.0, 600);
        assert!(controls.is_moving());
        for _ in 0..1000 {
            controls.update(&mut camera);
        }
        assert!(!controls.is_moving());
    }

    #[test]
    fn test_undamped_applies_immediately() {
        let mut camera = camera();
        let before = camera.position;
        let mut controls = OrbitControls::new(false, 0.05);
        controls.drag(150.0, 0.0, 600);
        controls.update(&mut camera);
        assert!(!controls.is_moving());
        assert!((camera.position - before).magnitude() > 1.0);
        // Horizontal drags keep height
        assert_relative_eq!(camera.position.y, before.y, epsilon = 1e-4);
    }

    #[test]
    fn test_vertical_drag_never_crosses_pole() {
        let mut camera = camera();
        let mut controls = OrbitControls::new(false, 0.05);
        let radius = camera.distance_to_target();
        controls.drag(0.0, 100_000.0, 600);
        controls.update(&mut camera);
        assert!(camera.position.iter().all(|c| c.is_finite()));
        assert!(camera.position.y > 0.0);
        assert_relative_eq!(camera.distance_to_target(), radius, epsilon = 1e-3);
    }
}
