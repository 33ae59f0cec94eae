//! Per-property animation scheduling
//!
//! At most one tween runs per `(node, property)` pair. Starting a new one on
//! a busy pair cancels the old tween and continues from wherever the property
//! currently is, so the most recent request always wins and there is never a
//! jump.

use std::collections::HashMap;

use crate::foundation::math::Vec3;
use crate::render::Color;
use crate::scene::{NodeId, SceneGraph};
use super::Tween;

/// Animatable property of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Material base color (mesh nodes only)
    MaterialColor,
    /// Local position
    Position,
    /// Local scale
    Scale,
}

impl AnimatedProperty {
    fn read(self, graph: &SceneGraph, node: NodeId) -> Option<Vec3> {
        match self {
            Self::MaterialColor => graph.material(node).map(|m| m.color.to_vec3()),
            Self::Position => graph.transform(node).map(|t| t.position),
            Self::Scale => graph.transform(node).map(|t| t.scale),
        }
    }

    fn write(self, graph: &mut SceneGraph, node: NodeId, value: Vec3) -> bool {
        let slot = match self {
            Self::MaterialColor => {
                let Some(material) = graph.material_mut(node) else { return false };
                material.color = Color::from_vec3(&value);
                return true;
            }
            Self::Position => graph.transform_mut(node).map(|t| &mut t.position),
            Self::Scale => graph.transform_mut(node).map(|t| &mut t.scale),
        };
        match slot {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

/// Identifies one started animation
///
/// A handle stays valid until its tween finishes, is cancelled, or is
/// replaced by a newer request on the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle {
    /// Animated node
    pub node: NodeId,
    /// Animated property
    pub property: AnimatedProperty,
    generation: u64,
}

#[derive(Debug)]
struct Track {
    tween: Tween,
    generation: u64,
}

/// Drives every in-flight tween
#[derive(Debug, Default)]
pub struct Animator {
    tracks: HashMap<(NodeId, AnimatedProperty), Track>,
    next_generation: u64,
}

impl Animator {
    /// Create an idle animator
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate `property` of `node` from its current value to `target` over `duration` seconds
    ///
    /// Any tween already running on the same property is cancelled first.
    /// Returns `None` if the node does not exist or lacks the property.
    pub fn animate(
        &mut self,
        graph: &SceneGraph,
        node: NodeId,
        property: AnimatedProperty,
        target: Vec3,
        duration: f32,
    ) -> Option<AnimationHandle> {
        let Some(current) = property.read(graph, node) else {
            log::warn!("Cannot animate {:?} of node {:?}: property not present", property, node);
            return None;
        };

        if let Some(previous) = self.cancel(node, property) {
            log::debug!(
                "Replacing in-flight {:?} tween on {:?} at {:.0}% (was heading to {:?})",
                property,
                node,
                previous.progress() * 100.0,
                previous.end(),
            );
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.tracks.insert((node, property), Track { tween: Tween::new(current, target, duration), generation });
        Some(AnimationHandle { node, property, generation })
    }

    /// Stop the tween on a property, leaving the property where it is
    pub fn cancel(&mut self, node: NodeId, property: AnimatedProperty) -> Option<Tween> {
        self.tracks.remove(&(node, property)).map(|track| track.tween)
    }

    /// Whether the animation behind `handle` is still running
    pub fn is_active(&self, handle: &AnimationHandle) -> bool {
        self.tracks
            .get(&(handle.node, handle.property))
            .is_some_and(|track| track.generation == handle.generation)
    }

    /// Whether any tween runs on a property
    pub fn is_animating(&self, node: NodeId, property: AnimatedProperty) -> bool {
        self.tracks.contains_key(&(node, property))
    }

    /// Number of running tweens
    pub fn active_count(&self) -> usize {
        self.tracks.len()
    }

    /// Advance all tweens by `dt` seconds, write their values, and drop finished ones
    pub fn update(&mut self, dt: f32, graph: &mut SceneGraph) {
        self.tracks.retain(|(node, property), track| {
            let value = track.tween.advance(dt);
            if !property.write(graph, *node, value) {
                log::warn!("Dropping {:?} tween: node {:?} no longer present", property, node);
                return false;
            }
            !track.tween.is_finished()
        });
    }
}
