//! The configurable product: its palette and its assembled mesh hierarchy

pub mod assembler;
pub mod palette;

pub use assembler::{Accessory, Product, ProductAssembler};
pub use palette::{color_name, PaletteColor, FALLBACK_COLOR_NAME};
