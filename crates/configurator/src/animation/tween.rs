//! Linear tweens over three-component values

use crate::foundation::math::{utils, Vec3};

/// Time-bounded linear interpolation from one value to another
///
/// Each tween owns its progress cursor; advancing one never affects another.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    /// Create a tween; a non-positive duration completes on the first step
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        Self { from, to, duration: duration.max(0.0), elapsed: 0.0 }
    }

    /// Target value
    pub fn end(&self) -> &Vec3 {
        &self.to
    }

    /// Progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Value at the current progress
    pub fn value(&self) -> Vec3 {
        let t = self.progress();
        // Land exactly on the target instead of within rounding of it
        if t >= 1.0 {
            self.to
        } else {
            utils::lerp_vec3(&self.from, &self.to, t)
        }
    }

    /// Move the cursor forward by `dt` seconds and return the new value
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        self.value()
    }

    /// Whether the tween has reached its target
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}
