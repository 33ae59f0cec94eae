//! Property animation
//!
//! [`Tween`] interpolates a value over a fixed duration; [`Animator`] owns
//! the running tweens, keyed per node property, and writes their values into
//! the scene graph as time advances.

pub mod animator;
pub mod tween;

pub use animator::{AnimatedProperty, AnimationHandle, Animator};
pub use tween::Tween;
