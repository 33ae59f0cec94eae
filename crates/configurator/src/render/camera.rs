//! # 3D Camera
//!
//! Perspective camera used to frame the product. Matrices are computed on
//! demand from position, target and projection parameters.

use crate::foundation::math::{Vec3, Mat4, Mat4Ext, utils};

/// Perspective camera
///
/// Uses a right-handed Y-up coordinate system. The camera looks from
/// `position` toward `target`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Point the camera at `target`
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs when the change is noticeable to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Distance from the camera to its target
    pub fn distance_to_target(&self) -> f32 {
        (self.position - self.target).magnitude()
    }

    /// World-to-camera transformation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Camera-to-clip transformation
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = Camera::perspective(Vec3::new(0.0, 5.0, 12.0), 45.0, 16.0 / 9.0, 0.1, 1000.0);
        let clip = camera.view_projection_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_set_aspect_ratio_always_applies() {
        let mut camera = Camera::perspective(Vec3::new(0.0, 0.0, 5.0), 45.0, 1.0, 0.1, 100.0);
        camera.set_aspect_ratio(1.005);
        assert_relative_eq!(camera.aspect, 1.005);
        camera.set_aspect_ratio(2.0);
        assert_relative_eq!(camera.aspect, 2.0);
    }

    #[test]
    fn test_wider_aspect_narrows_horizontal_scale() {
        let mut camera = Camera::perspective(Vec3::new(0.0, 0.0, 5.0), 45.0, 1.0, 0.1, 100.0);
        let square = camera.projection_matrix()[(0, 0)];
        camera.set_aspect_ratio(2.0);
        assert_relative_eq!(camera.projection_matrix()[(0, 0)], square / 2.0, epsilon = 1e-5);
    }
}
