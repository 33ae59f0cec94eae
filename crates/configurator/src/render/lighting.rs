//! Scene lighting
//!
//! The product viewer uses a fixed two-light rig: a soft ambient term so no
//! face is fully black, plus one directional key light that casts shadows.

use crate::foundation::math::Vec3;
use super::Color;

/// Light source kinds supported by the viewer
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    /// Uniform light from every direction
    Ambient,
    /// Parallel rays shining from `position` toward the origin
    Directional {
        /// Light position; the direction is derived from it
        position: Vec3,
        /// Shadow settings, `None` for a light that casts no shadows
        shadow: Option<ShadowSettings>,
    },
}

/// Shadow map parameters for a shadow-casting light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowSettings {
    /// Shadow map width in texels
    pub map_width: u32,
    /// Shadow map height in texels
    pub map_height: u32,
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light kind and kind-specific parameters
    pub kind: LightKind,
    /// Light color
    pub color: Color,
    /// Light intensity multiplier
    pub intensity: f32,
}

impl Light {
    /// Create an ambient light
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self { kind: LightKind::Ambient, color, intensity }
    }

    /// Create a directional light without shadows
    pub fn directional(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional { position, shadow: None },
            color,
            intensity,
        }
    }

    /// Enable shadow casting with a square shadow map of `size` texels
    pub fn with_shadows(mut self, size: u32) -> Self {
        if let LightKind::Directional { shadow, .. } = &mut self.kind {
            *shadow = Some(ShadowSettings { map_width: size, map_height: size });
        }
        self
    }

    /// Whether the light casts shadows
    pub fn casts_shadows(&self) -> bool {
        matches!(self.kind, LightKind::Directional { shadow: Some(_), .. })
    }
}

/// All lights affecting a scene
#[derive(Debug, Clone, Default)]
pub struct LightingEnvironment {
    /// Lights in insertion order
    pub lights: Vec<Light>,
}

impl LightingEnvironment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Iterate over the ambient lights
    pub fn ambient_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(|light| matches!(light.kind, LightKind::Ambient))
    }

    /// Iterate over the directional lights
    pub fn directional_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights.iter().filter(|light| matches!(light.kind, LightKind::Directional { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shadows_only_apply_to_directional_lights() {
        let ambient = Light::ambient(Color::WHITE, 0.6).with_shadows(2048);
        assert!(!ambient.casts_shadows());

        let key = Light::directional(Vec3::new(10.0, 20.0, 5.0), Color::WHITE, 0.8).with_shadows(2048);
        assert!(key.casts_shadows());
    }

    #[test]
    fn test_environment_filters_by_kind() {
        let mut environment = LightingEnvironment::new();
        environment.add_light(Light::ambient(Color::WHITE, 0.6));
        environment.add_light(Light::directional(Vec3::new(10.0, 20.0, 5.0), Color::WHITE, 0.8));
        environment.add_light(Light::ambient(Color::BLACK, 0.1));

        assert_eq!(environment.ambient_lights().count(), 2);
        let key: Vec<_> = environment.directional_lights().collect();
        assert_eq!(key.len(), 1);
        assert_relative_eq!(key[0].intensity, 0.8);
    }
}
