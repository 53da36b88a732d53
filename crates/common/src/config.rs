//! Viewer configuration.
//!
//! Every section falls back to its defaults, so an empty file (or no file at
//! all) yields the stock scene: a green ground plane, one cat at the origin,
//! one key light and a camera orbiting at radius 15.

use crate::lighting::{Light, Material};
use crate::types::ShapeKind;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on point lights carried to the shader.
pub const MAX_LIGHTS: usize = 4;

/// Errors from loading or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("{count} lights configured, at most {max} are supported")]
    TooManyLights { count: usize, max: usize },
    #[error("{shape} placement has non-positive scale {scale}")]
    InvalidScale { shape: ShapeKind, scale: f32 },
    #[error("window size {width}x{height} must be non-zero")]
    InvalidWindowSize { width: u32, height: u32 },
    #[error("projection range near={near} far={far} is invalid")]
    InvalidProjection { near: f32, far: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_color: Vec3,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "3D Pixel Animals".into(),
            width: 800,
            height: 600,
            clear_color: Vec3::new(0.7, 0.9, 1.0),
        }
    }
}

/// Orbit camera and projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub radius: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    /// World units per second.
    pub zoom_speed: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            rotation_speed: 50.0,
            zoom_speed: 2.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub lights: Vec<Light>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            lights: vec![Light::scene_key()],
        }
    }
}

/// Where to put one creature and how big to make it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub shape: ShapeKind,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub ground_width: f32,
    pub ground_depth: f32,
    pub ground_color: Vec3,
    /// World-space translation applied when drawing the ground.
    pub ground_offset: Vec3,
    pub ground_material: Material,
    pub creature_material: Material,
    pub creatures: Vec<Placement>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_width: 10.0,
            ground_depth: 10.0,
            ground_color: Vec3::new(0.4, 0.8, 0.4),
            ground_offset: Vec3::new(0.0, -0.5, 0.0),
            ground_material: Material::new(
                Vec3::splat(0.2),
                Vec3::splat(0.8),
                Vec3::splat(0.2),
                16.0,
            ),
            creature_material: Material::new(
                Vec3::splat(0.3),
                Vec3::splat(0.8),
                Vec3::splat(0.5),
                32.0,
            ),
            creatures: vec![Placement {
                shape: ShapeKind::Cat,
                position: Vec3::ZERO,
                scale: 1.0,
            }],
        }
    }
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub scene: SceneConfig,
}

impl ViewerConfig {
    /// Load a configuration file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config: Self = match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&text)?,
            "json" => serde_json::from_str(&text)?,
            _ => return Err(ConfigError::UnsupportedFormat(ext)),
        };
        config.validate()?;
        tracing::debug!(
            "loaded config from {} ({} creatures, {} lights)",
            path.display(),
            config.scene.creatures.len(),
            config.lighting.lights.len()
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        let lights = self.lighting.lights.len();
        if lights > MAX_LIGHTS {
            return Err(ConfigError::TooManyLights {
                count: lights,
                max: MAX_LIGHTS,
            });
        }
        if self.camera.near <= 0.0 || self.camera.far <= self.camera.near {
            return Err(ConfigError::InvalidProjection {
                near: self.camera.near,
                far: self.camera.far,
            });
        }
        let bad_scale = self
            .scene
            .creatures
            .iter()
            .find(|p| p.scale.is_nan() || p.scale <= 0.0);
        if let Some(bad) = bad_scale {
            return Err(ConfigError::InvalidScale {
                shape: bad.shape,
                scale: bad.scale,
            });
        }
        Ok(())
    }
}
