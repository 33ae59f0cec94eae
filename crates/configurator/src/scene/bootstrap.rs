//! Scene bootstrapping
//!
//! Builds the empty world once at startup: background, light rig, camera
//! framing the product, and an output surface attached to the container and
//! sized to it.

use crate::config::ConfiguratorConfig;
use crate::configurator::ConfiguratorError;
use crate::foundation::math::Vec3;
use crate::host::ViewerHost;
use crate::render::{Camera, Color, Light, OrbitControls, RenderError, RenderSurface};
use super::Scene;

/// The world the product is placed into
#[derive(Debug)]
pub struct Stage {
    /// Scene graph, background and lights
    pub scene: Scene,
    /// Viewing camera
    pub camera: Camera,
    /// Orbit controls driving the camera
    pub controls: OrbitControls,
    container_id: String,
}

impl Stage {
    /// Id of the container the surface is attached to
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Match the camera aspect and surface size to the container's current size
    ///
    /// Returns the applied size. A container that vanished or collapsed to a
    /// zero dimension is reported as an error and nothing is changed.
    pub fn sync_viewport<H, S>(&mut self, host: &H, surface: &mut S) -> Result<(u32, u32), ConfiguratorError>
    where
        H: ViewerHost + ?Sized,
        S: RenderSurface + ?Sized,
    {
        let (width, height) = host
            .element_size(&self.container_id)
            .ok_or_else(|| ConfiguratorError::MissingElement(self.container_id.clone()))?;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidViewport { width, height }.into());
        }

        self.camera.set_aspect_ratio(width as f32 / height as f32);
        surface.set_size(width, height)?;
        log::debug!("Viewport synchronized to {}x{}", width, height);
        Ok((width, height))
    }
}

/// Builds a [`Stage`] from configuration
#[derive(Debug, Clone)]
pub struct SceneBootstrapper<'a> {
    config: &'a ConfiguratorConfig,
}

impl<'a> SceneBootstrapper<'a> {
    /// Create a bootstrapper for `config`
    pub fn new(config: &'a ConfiguratorConfig) -> Self {
        Self { config }
    }

    /// Build the world and attach `surface` to the configured container
    ///
    /// # Errors
    /// * [`ConfiguratorError::MissingElement`] if the container is absent
    /// * [`ConfiguratorError::Render`] if the surface cannot be attached or
    ///   the container has no area
    pub fn build<H, S>(&self, host: &H, surface: &mut S) -> Result<Stage, ConfiguratorError>
    where
        H: ViewerHost + ?Sized,
        S: RenderSurface + ?Sized,
    {
        let container_id = self.config.viewer.container_id.clone();
        if !host.contains(&container_id) {
            return Err(ConfiguratorError::MissingElement(container_id));
        }

        log::info!("Creating scene...");
        let mut scene = Scene::new(self.config.scene.background);
        let lighting = &self.config.lighting;
        scene.lighting.add_light(Light::ambient(Color::WHITE, lighting.ambient_intensity));
        scene.lighting.add_light(
            Light::directional(Vec3::from(lighting.directional_position), Color::WHITE, lighting.directional_intensity)
                .with_shadows(lighting.shadow_map_size),
        );

        log::info!("Creating camera...");
        let camera_config = &self.config.camera;
        let mut camera = Camera::perspective(
            Vec3::from(camera_config.position),
            camera_config.fov_degrees,
            1.0,
            camera_config.near,
            camera_config.far,
        );
        camera.set_target(Vec3::from(camera_config.target));

        log::info!("Attaching render surface to '{}'...", container_id);
        surface.attach(&container_id)?;

        let controls = OrbitControls::new(self.config.controls.enable_damping, self.config.controls.damping_factor);
        let mut stage = Stage { scene, camera, controls, container_id };
        let (width, height) = stage.sync_viewport(host, surface)?;
        log::info!("Scene ready ({}x{})", width, height);
        Ok(stage)
    }
}
