//! Mesh geometry descriptors
//!
//! The rendering library owns vertex generation; the configurator describes
//! geometry parametrically and lets the surface tessellate it.

use bitflags::bitflags;

/// Parametric geometry understood by every render surface
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis aligned box centered on the origin
    Box {
        /// Extent along X
        width: f32,
        /// Extent along Y
        height: f32,
        /// Extent along Z
        depth: f32,
    },
    /// Y-aligned cylinder centered on the origin
    Cylinder {
        /// Radius of the top cap
        radius_top: f32,
        /// Radius of the bottom cap
        radius_bottom: f32,
        /// Extent along Y
        height: f32,
        /// Number of segments around the circumference
        radial_segments: u32,
    },
    /// Flat ring in the XY plane
    Ring {
        /// Radius of the hole
        inner_radius: f32,
        /// Outer radius
        outer_radius: f32,
        /// Number of segments around the circumference
        theta_segments: u32,
    },
}

impl Geometry {
    /// Convenience constructor for a box
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box { width, height, depth }
    }

    /// Triangle count the surface will produce for this geometry
    pub fn triangle_count(&self) -> u32 {
        match *self {
            Self::Box { .. } => 12,
            // Side quads plus two capped fans
            Self::Cylinder { radial_segments, .. } => radial_segments * 4,
            Self::Ring { theta_segments, .. } => theta_segments * 2,
        }
    }
}

bitflags! {
    /// Shadow participation of a mesh
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ShadowFlags: u8 {
        /// Mesh occludes light for other meshes
        const CAST = 0b01;
        /// Mesh is darkened by occluders
        const RECEIVE = 0b10;
    }
}
