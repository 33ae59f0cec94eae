//! # Rendering
//!
//! Backend-agnostic rendering types: colors, materials, geometry
//! descriptors, the perspective camera with its orbit controls, lighting,
//! and the `RenderSurface` boundary to the rendering library.

pub mod backend;
pub mod camera;
pub mod color;
pub mod controls;
pub mod lighting;
pub mod material;
pub mod mesh;

pub use backend::{RenderSurface, HeadlessSurface, FrameStats, SurfaceResult};
pub use camera::Camera;
pub use color::{Color, ParseColorError};
pub use controls::OrbitControls;
pub use lighting::{Light, LightKind, LightingEnvironment, ShadowSettings};
pub use material::{Material, FaceSide};
pub use mesh::{Geometry, ShadowFlags};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The graphics context or canvas could not be created
    #[error("Render surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// An operation needed an attached surface
    #[error("Render surface is not attached to a container")]
    NotAttached,

    /// A viewport dimension was zero
    #[error("Invalid viewport size {width}x{height}")]
    InvalidViewport {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}
