//! Render surface abstraction
//!
//! `RenderSurface` is the boundary to the rendering library: it owns the
//! output canvas and turns a scene plus camera into pixels. The configurator
//! never talks to a graphics API directly.
//!
//! `HeadlessSurface` implements the trait without a graphics context. It
//! resolves the draw list exactly as a GPU surface would and keeps the last
//! frame for inspection, which is what tests and the headless demo rely on.

use crate::scene::{DrawItem, Scene};
use super::{Camera, RenderError};

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, RenderError>;

/// Output surface provided by the rendering library
pub trait RenderSurface {
    /// Create the drawing context and attach the canvas to `container_id`
    ///
    /// Fails with [`RenderError::SurfaceUnavailable`] when no graphics
    /// context can be created.
    fn attach(&mut self, container_id: &str) -> SurfaceResult<()>;

    /// Resize the drawing buffer to exactly `width` x `height` pixels
    fn set_size(&mut self, width: u32, height: u32) -> SurfaceResult<()>;

    /// Current drawing buffer size in pixels
    fn size(&self) -> (u32, u32);

    /// Draw one frame of `scene` as seen by `camera`
    fn render(&mut self, scene: &Scene, camera: &Camera) -> SurfaceResult<()>;
}

/// Summary of the most recently rendered frame
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    /// Index of the frame, starting at 1
    pub frame_index: u64,
    /// Meshes submitted for drawing
    pub draw_calls: usize,
    /// Meshes skipped because they were scaled to nothing
    pub culled: usize,
    /// Triangles submitted
    pub triangles: u64,
    /// Lights contributing to the frame
    pub lights: usize,
    /// Shadow maps rendered before the main pass
    pub shadow_passes: usize,
}

/// Render surface without a graphics context
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    available: bool,
    container: Option<String>,
    width: u32,
    height: u32,
    stats: FrameStats,
    last_frame: Vec<DrawItem>,
}

impl HeadlessSurface {
    /// Create a surface that attaches successfully
    pub fn new() -> Self {
        Self { available: true, ..Default::default() }
    }

    /// Create a surface that behaves like a machine without a graphics context
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Container the surface is attached to
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Statistics of the last rendered frame
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Number of frames rendered so far
    pub fn frames_rendered(&self) -> u64 {
        self.stats.frame_index
    }

    /// Draw items of the last rendered frame
    pub fn last_frame(&self) -> &[DrawItem] {
        &self.last_frame
    }
}

impl RenderSurface for HeadlessSurface {
    fn attach(&mut self, container_id: &str) -> SurfaceResult<()> {
        if !self.available {
            return Err(RenderError::SurfaceUnavailable(
                "no graphics context available for headless surface".to_string(),
            ));
        }
        log::debug!("Headless surface attached to '{}'", container_id);
        self.container = Some(container_id.to_string());
        Ok(())
    }

    fn set_size(&mut self, width: u32, height: u32) -> SurfaceResult<()> {
        if self.container.is_none() {
            return Err(RenderError::NotAttached);
        }
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> SurfaceResult<()> {
        if self.container.is_none() {
            return Err(RenderError::NotAttached);
        }

        let items = scene.draw_list();
        let (visible, culled): (Vec<DrawItem>, Vec<DrawItem>) =
            items.into_iter().partition(DrawItem::is_visible);

        self.stats = FrameStats {
            frame_index: self.stats.frame_index + 1,
            draw_calls: visible.len(),
            culled: culled.len(),
            triangles: visible.iter().map(|item| u64::from(item.geometry.triangle_count())).sum(),
            lights: scene.lighting.ambient_lights().count() + scene.lighting.directional_lights().count(),
            shadow_passes: scene.lighting.directional_lights().filter(|light| light.casts_shadows()).count(),
        };
        log::trace!(
            "Headless frame {}: {} draws, {} culled, aspect {:.3}",
            self.stats.frame_index, self.stats.draw_calls, self.stats.culled, camera.aspect
        );
        self.last_frame = visible;
        Ok(())
    }
}
