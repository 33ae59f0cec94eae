//! Per-frame update and redraw
//!
//! Each frame the product turns a little further about the Y axis, running
//! tweens advance by the frame delta, the orbit controls release any pending
//! camera motion, and the scene is drawn.

use std::f64::consts::TAU;

use crate::animation::Animator;
use crate::foundation::math::{Quat, Vec3};
use crate::render::{RenderError, RenderSurface};
use crate::scene::{NodeId, Stage};

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Yaw added this frame
    pub rotation_delta: f32,
    /// Accumulated product yaw in radians
    pub yaw: f64,
    /// Tweens still running after this frame
    pub active_animations: usize,
}

/// Drives the continuous rotation and redraw
#[derive(Debug, Clone)]
pub struct RenderLoop {
    turntable: NodeId,
    rotation_step: f32,
    // Unwrapped total; only the angle within one turn reaches the f32 quaternion
    yaw: f64,
    frames: u64,
}

impl RenderLoop {
    /// Rotate `turntable` by `rotation_step` radians every frame
    pub fn new(turntable: NodeId, rotation_step: f32) -> Self {
        Self { turntable, rotation_step, yaw: 0.0, frames: 0 }
    }

    /// Accumulated yaw in radians
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Yaw reduced to one turn, as written to the turntable
    pub fn applied_angle(&self) -> f32 {
        self.yaw.rem_euclid(TAU) as f32
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame
    ///
    /// The rotation is applied even if rendering fails, so a transient
    /// surface error never rewinds the turntable.
    pub fn frame<S: RenderSurface + ?Sized>(
        &mut self,
        dt: f32,
        stage: &mut Stage,
        animator: &mut Animator,
        surface: &mut S,
    ) -> Result<FrameReport, RenderError> {
        self.frames += 1;
        self.yaw += f64::from(self.rotation_step);
        if let Some(transform) = stage.scene.graph.transform_mut(self.turntable) {
            transform.rotation = Quat::from_axis_angle(&Vec3::y_axis(), self.applied_angle());
        }

        animator.update(dt, &mut stage.scene.graph);
        stage.controls.update(&mut stage.camera);
        surface.render(&stage.scene, &stage.camera)?;

        log::trace!("Frame {} rendered (yaw {:.4})", self.frames, self.yaw);
        Ok(FrameReport {
            frame: self.frames,
            rotation_delta: self.rotation_step,
            yaw: self.yaw,
            active_animations: animator.active_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfiguratorConfig;
    use crate::foundation::math::Transform;
    use crate::host::MemoryHost;
    use crate::render::HeadlessSurface;
    use crate::scene::SceneBootstrapper;

    fn stage() -> (Stage, HeadlessSurface, NodeId) {
        let config = ConfiguratorConfig::default();
        let host = MemoryHost::new().with_container("product-viewer", 800, 600);
        let mut surface = HeadlessSurface::new();
        let mut stage = SceneBootstrapper::new(&config).build(&host, &mut surface).unwrap();
        let root = stage.scene.graph.root();
        let turntable = stage.scene.graph.add_group(root, "turntable", Transform::identity());
        (stage, surface, turntable)
    }

    #[test]
    fn test_yaw_strictly_increases_every_frame() {
        let (mut stage, mut surface, turntable) = stage();
        let mut animator = Animator::new();
        let mut render_loop = RenderLoop::new(turntable, 0.005);

        let mut previous = render_loop.yaw();
        for _ in 0..2000 {
            let report = render_loop.frame(1.0 / 60.0, &mut stage, &mut animator, &mut surface).unwrap();
            assert!(report.rotation_delta > 0.0);
            assert!(report.yaw > previous);
            previous = report.yaw;
        }
        assert_eq!(surface.frames_rendered(), 2000);
        // Past a full turn without wrapping back
        assert!(render_loop.yaw() > TAU);
    }

    #[test]
    fn test_turntable_rotation_follows_yaw() {
        let (mut stage, mut surface, turntable) = stage();
        let mut animator = Animator::new();
        let mut render_loop = RenderLoop::new(turntable, 0.25);
        render_loop.frame(0.0, &mut stage, &mut animator, &mut surface).unwrap();
        render_loop.frame(0.0, &mut stage, &mut animator, &mut surface).unwrap();

        let rotation = stage.scene.graph.transform(turntable).unwrap().rotation;
        approx::assert_relative_eq!(rotation.angle(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_turntable_keeps_moving_after_long_sessions() {
        let (mut stage, mut surface, turntable) = stage();
        let mut animator = Animator::new();
        let mut render_loop = RenderLoop::new(turntable, 0.005);
        // Roughly 150 days at 60 Hz
        render_loop.yaw = 65536.0;

        let mut previous = Quat::identity();
        for frame in 0..200 {
            let report = render_loop.frame(1.0 / 60.0, &mut stage, &mut animator, &mut surface).unwrap();
            let rotation = stage.scene.graph.transform(turntable).unwrap().rotation;
            if frame > 0 {
                approx::assert_relative_eq!(rotation.angle_to(&previous), 0.005, epsilon = 1e-3);
            }
            assert!(report.yaw > 65536.0);
            previous = rotation;
        }
    }

    #[test]
    fn test_applied_angle_wraps_but_yaw_does_not() {
        let (mut stage, mut surface, turntable) = stage();
        let mut animator = Animator::new();
        let mut render_loop = RenderLoop::new(turntable, 1.0);
        for _ in 0..7 {
            render_loop.frame(0.0, &mut stage, &mut animator, &mut surface).unwrap();
        }
        approx::assert_relative_eq!(render_loop.yaw(), 7.0);
        approx::assert_relative_eq!(render_loop.applied_angle(), (7.0 - TAU) as f32, epsilon = 1e-6);
    }

    #[test]
    fn test_detached_surface_still_advances_rotation() {
        let (mut stage, _, turntable) = stage();
        let mut detached = HeadlessSurface::new();
        let mut animator = Animator::new();
        let mut render_loop = RenderLoop::new(turntable, 0.005);
        assert_eq!(
            render_loop.frame(0.016, &mut stage, &mut animator, &mut detached),
            Err(RenderError::NotAttached)
        );
        assert!(render_loop.yaw() > 0.0);
    }
}
