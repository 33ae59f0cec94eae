//! Configuration system
//!
//! Every tunable of the viewer (element ids, camera framing, light rig,
//! animation timing, orbit damping, colors) lives in [`ConfiguratorConfig`].
//! Defaults reproduce the stock chair viewer; files in TOML or RON override
//! any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Ids of the page elements the viewer binds to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Element that receives the rendered canvas
    pub container_id: String,
    /// Text element showing the selection summary
    pub summary_id: String,
    /// Checkbox controlling logo visibility
    pub logo_toggle_id: String,
    /// Checkbox controlling cushion visibility
    pub cushion_toggle_id: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            container_id: "product-viewer".to_string(),
            summary_id: "summary-text".to_string(),
            logo_toggle_id: "logo-toggle".to_string(),
            cushion_toggle_id: "cushion-toggle".to_string(),
        }
    }
}

/// Camera framing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera position in world space
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 5.0, 12.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Light rig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Ambient light intensity
    pub ambient_intensity: f32,
    /// Key light intensity
    pub directional_intensity: f32,
    /// Key light position
    pub directional_position: [f32; 3],
    /// Square shadow map size in texels
    pub shadow_map_size: u32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.6,
            directional_intensity: 0.8,
            directional_position: [10.0, 20.0, 5.0],
            shadow_map_size: 2048,
        }
    }
}

/// Animation timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Seconds for a base color transition
    pub color_duration: f32,
    /// Seconds for an accessory show/hide transition
    pub accessory_duration: f32,
    /// Radians of product yaw added every frame
    pub rotation_step: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            color_duration: 0.5,
            accessory_duration: 0.3,
            rotation_step: 0.005,
        }
    }
}

/// Orbit camera controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Release drag rotation gradually
    pub enable_damping: bool,
    /// Fraction of pending rotation applied per frame
    pub damping_factor: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self { enable_damping: true, damping_factor: 0.05 }
    }
}

/// Scene colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background clear color
    pub background: Color,
    /// Initial base color of the product
    pub default_color: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0xf8_f9_fa),
            default_color: Color::from_hex(0x2c_3e_50),
        }
    }
}

/// Complete viewer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfiguratorConfig {
    /// Page element bindings
    pub viewer: ViewerConfig,
    /// Camera framing
    pub camera: CameraConfig,
    /// Light rig
    pub lighting: LightingConfig,
    /// Animation timing
    pub animation: AnimationConfig,
    /// Orbit controls
    pub controls: ControlsConfig,
    /// Scene colors
    pub scene: SceneConfig,
}

impl Config for ConfiguratorConfig {}

impl ConfiguratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let ids = [
            ("viewer.container_id", &self.viewer.container_id),
            ("viewer.summary_id", &self.viewer.summary_id),
            ("viewer.logo_toggle_id", &self.viewer.logo_toggle_id),
            ("viewer.cushion_toggle_id", &self.viewer.cushion_toggle_id),
        ];
        if let Some((field, _)) = ids.iter().find(|(_, id)| id.trim().is_empty()) {
            return invalid(format!("{field} cannot be empty"));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return invalid(format!("camera.fov_degrees must be in (0, 180), got {}", camera.fov_degrees));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return invalid(format!("camera clip planes must satisfy 0 < near < far, got {} / {}", camera.near, camera.far));
        }
        if camera.position == camera.target {
            return invalid("camera.position and camera.target must differ".to_string());
        }

        let animation = &self.animation;
        if !(animation.color_duration > 0.0) {
            return invalid(format!("animation.color_duration must be positive, got {}", animation.color_duration));
        }
        if !(animation.accessory_duration > 0.0) {
            return invalid(format!("animation.accessory_duration must be positive, got {}", animation.accessory_duration));
        }
        if !(animation.rotation_step > 0.0) {
            return invalid(format!("animation.rotation_step must be positive, got {}", animation.rotation_step));
        }

        let damping = self.controls.damping_factor;
        if !(damping > 0.0 && damping <= 1.0) {
            return invalid(format!("controls.damping_factor must be in (0, 1], got {damping}"));
        }

        if self.lighting.shadow_map_size == 0 {
            return invalid("lighting.shadow_map_size must be at least 1".to_string());
        }

        Ok(())
    }
}
