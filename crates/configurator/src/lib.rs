//! # Product Configurator
//!
//! Interactive 3D preview of a configurable chair. The user picks one of six
//! base colors and toggles two accessories (logo and cushion); every change
//! is animated, the product turns slowly on a turntable, and a summary line
//! reflects the current selection.
//!
//! ## Architecture
//!
//! - **Scene bootstrapping** ([`scene::bootstrap`]): camera, lights,
//!   background and an output surface sized to its container
//! - **Product assembly** ([`product`]): the chair's mesh hierarchy under one
//!   root group
//! - **Selection** ([`selection`]): the selection value and its pure
//!   transition function
//! - **Presentation** ([`presentation`]): transitions to animations and the
//!   summary line
//! - **Render loop** ([`render_loop`]): rotation, animation stepping and redraw
//!
//! The page and the rendering library are reached only through the
//! [`host::ViewerHost`] and [`render::RenderSurface`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use product_configurator::prelude::*;
//!
//! fn main() -> Result<(), ConfiguratorError> {
//!     let config = ConfiguratorConfig::default();
//!     let host = MemoryHost::new()
//!         .with_container("product-viewer", 800, 600)
//!         .with_text("summary-text")
//!         .with_checkbox("logo-toggle", true)
//!         .with_checkbox("cushion-toggle", true);
//!
//!     let mut viewer = Configurator::new(&config, host, HeadlessSurface::new())?;
//!     viewer.handle_event(UiEvent::ColorSelected("#e74c3c".to_string()))?;
//!     viewer.frame(1.0 / 60.0)?;
//!     Ok(())
//! }
//! ```

pub mod foundation;
pub mod config;
pub mod render;
pub mod scene;
pub mod product;
pub mod animation;
pub mod selection;
pub mod presentation;
pub mod render_loop;
pub mod host;

mod configurator;

#[cfg(test)]
mod tests;

pub use configurator::{Configurator, ConfiguratorError, UiEvent};

/// Common imports for configurator users
pub mod prelude {
    pub use crate::{
        Configurator, ConfiguratorError, UiEvent,
        config::{Config, ConfigError, ConfiguratorConfig},
        host::{MemoryHost, ViewerHost, Swatch},
        product::{PaletteColor, color_name},
        render::{Color, HeadlessSurface, RenderError, RenderSurface},
        render_loop::FrameReport,
        selection::{SelectionAction, SelectionState, apply_transition},
        foundation::time::FrameClock,
    };
}
