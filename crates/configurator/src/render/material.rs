//! Surface materials for product meshes
//!
//! Materials are plain data handed to the render surface. The configurator
//! only ever mutates `color`, through the animation system.

use super::Color;

/// Which faces of a mesh are shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceSide {
    /// Front faces only (back-face culling)
    #[default]
    Front,
    /// Both faces, for flat open geometry such as rings
    Double,
}

/// Standard physically based material parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color
    pub color: Color,
    /// Surface roughness in `[0, 1]`
    pub roughness: f32,
    /// Metalness in `[0, 1]`
    pub metalness: f32,
    /// Face culling mode
    pub side: FaceSide,
}

impl Material {
    /// Create a standard material with the renderer's default surface response
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            roughness: 1.0,
            metalness: 0.0,
            side: FaceSide::Front,
        }
    }

    /// Set the roughness
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set the face culling mode
    pub fn with_side(mut self, side: FaceSide) -> Self {
        self.side = side;
        self
    }
}
