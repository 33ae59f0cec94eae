//! The configurator controller
//!
//! [`Configurator`] owns every piece of viewer state: the page host, the
//! render surface, the stage, the assembled product, the selection binder,
//! the animator and the render loop. UI events come in through
//! [`Configurator::handle_event`]; the host calls [`Configurator::frame`] once
//! per display refresh.

use thiserror::Error;

use crate::animation::Animator;
use crate::config::{ConfigError, ConfiguratorConfig};
use crate::host::ViewerHost;
use crate::presentation::{PresentationBinder, PresentationTargets};
use crate::product::{Product, ProductAssembler};
use crate::render::{Camera, Color, RenderError, RenderSurface};
use crate::render_loop::{FrameReport, RenderLoop};
use crate::scene::{Scene, SceneBootstrapper, Stage};
use crate::selection::{SelectionAction, SelectionState};

/// Configurator errors
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// A required page element is absent
    #[error("Required element '{0}' not found")]
    MissingElement(String),

    /// A swatch carried a value that is not a color
    #[error("Invalid color value '{0}'")]
    InvalidColor(String),

    /// Render surface failure
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration failure
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Input delivered by the page
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A color swatch was clicked; carries its raw color attribute
    ColorSelected(String),
    /// The logo checkbox changed
    LogoToggled(bool),
    /// The cushion checkbox changed
    CushionToggled(bool),
    /// The viewport was resized
    Resized,
    /// The pointer dragged across the viewport by `(dx, dy)` pixels
    PointerDrag {
        /// Horizontal movement in pixels
        dx: f32,
        /// Vertical movement in pixels
        dy: f32,
    },
}

/// Interactive product viewer
pub struct Configurator<H: ViewerHost, S: RenderSurface> {
    host: H,
    surface: S,
    stage: Stage,
    product: Product,
    binder: PresentationBinder,
    animator: Animator,
    render_loop: RenderLoop,
}

impl<H: ViewerHost, S: RenderSurface> Configurator<H, S> {
    /// Build the viewer inside `host`, drawing through `surface`
    ///
    /// # Errors
    /// * [`ConfiguratorError::Config`] if `config` fails validation
    /// * [`ConfiguratorError::MissingElement`] if the container, summary or a
    ///   toggle element is absent
    /// * [`ConfiguratorError::Render`] if the surface cannot be attached
    pub fn new(config: &ConfiguratorConfig, mut host: H, mut surface: S) -> Result<Self, ConfiguratorError> {
        log::info!("Initializing product configurator...");
        config.validate()?;
        Self::check_required_elements(config, &host)?;

        let mut stage = SceneBootstrapper::new(config).build(&host, &mut surface)?;
        let scene_root = stage.scene.graph.root();
        let product = ProductAssembler::new(config.scene.default_color).assemble(&mut stage.scene.graph, scene_root);
        let render_loop = RenderLoop::new(product.root, config.animation.rotation_step);
        let binder = PresentationBinder::new(config);

        Self::mark_swatch(&mut host, config.scene.default_color);
        binder.refresh_summary(&mut host);

        log::info!("Product configurator ready: {}", binder.state().summary());
        Ok(Self {
            host,
            surface,
            stage,
            product,
            binder,
            animator: Animator::new(),
            render_loop,
        })
    }

    fn check_required_elements(config: &ConfiguratorConfig, host: &H) -> Result<(), ConfiguratorError> {
        let viewer = &config.viewer;
        [
            &viewer.container_id,
            &viewer.summary_id,
            &viewer.logo_toggle_id,
            &viewer.cushion_toggle_id,
        ]
        .into_iter()
        .find(|id| !host.contains(id))
        .map_or(Ok(()), |id| Err(ConfiguratorError::MissingElement(id.clone())))
    }

    // Highlights the first swatch carrying `color`, whatever its spelling
    fn mark_swatch(host: &mut H, color: Color) {
        let matching = host
            .swatches()
            .into_iter()
            .find(|swatch| swatch.value.parse::<Color>().is_ok_and(|c| c.to_hex() == color.to_hex()));
        if let Some(swatch) = matching {
            host.set_active_swatch(&swatch.value);
        }
    }

    /// Handle one UI event
    ///
    /// Malformed swatch values are rejected with
    /// [`ConfiguratorError::InvalidColor`] and leave the selection unchanged.
    pub fn handle_event(&mut self, event: UiEvent) -> Result<(), ConfiguratorError> {
        match event {
            UiEvent::ColorSelected(value) => {
                let color: Color = value.parse().map_err(|_| {
                    log::warn!("Ignoring swatch with invalid color value '{}'", value);
                    ConfiguratorError::InvalidColor(value.clone())
                })?;
                self.host.set_active_swatch(&value);
                self.dispatch(SelectionAction::SelectColor(color));
            }
            UiEvent::LogoToggled(visible) => {
                self.dispatch(SelectionAction::ToggleLogo(visible));
            }
            UiEvent::CushionToggled(visible) => {
                self.dispatch(SelectionAction::ToggleCushion(visible));
            }
            UiEvent::Resized => {
                self.stage.sync_viewport(&self.host, &mut self.surface)?;
            }
            UiEvent::PointerDrag { dx, dy } => {
                let (_, height) = self.surface.size();
                self.stage.controls.drag(dx, dy, height);
            }
        }
        Ok(())
    }

    /// Apply a selection transition directly, bypassing the page controls
    pub fn dispatch(&mut self, action: SelectionAction) -> SelectionState {
        self.binder.apply(
            action,
            PresentationTargets {
                graph: &mut self.stage.scene.graph,
                animator: &mut self.animator,
                product: &self.product,
                host: &mut self.host,
            },
        )
    }

    /// Advance animations by `dt` seconds, rotate the product, and redraw
    pub fn frame(&mut self, dt: f32) -> Result<FrameReport, ConfiguratorError> {
        Ok(self.render_loop.frame(dt, &mut self.stage, &mut self.animator, &mut self.surface)?)
    }

    /// Current selection
    pub fn state(&self) -> &SelectionState {
        self.binder.state()
    }

    /// The page host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable page host, e.g. to simulate layout changes before a resize event
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The render surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The scene being drawn
    pub fn scene(&self) -> &Scene {
        &self.stage.scene
    }

    /// The viewing camera
    pub fn camera(&self) -> &Camera {
        &self.stage.camera
    }

    /// Handles to the product's nodes
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The animation scheduler
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// The render loop
    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }
}
