//! Shared types for the pixelpets viewer: vertices, box descriptors,
//! shape identifiers, lighting data and the viewer configuration.
//!
//! # Invariants
//! - `Vertex` is plain-old-data and uploadable byte-for-byte.
//! - Configuration always validates before it is handed to the apps.

pub mod config;
pub mod lighting;
pub mod types;

pub use config::{
    CameraConfig, ConfigError, LightingConfig, MAX_LIGHTS, Placement, SceneConfig, ViewerConfig,
    WindowConfig,
};
pub use lighting::{Light, Material};
pub use types::{BoxSpec, ShapeError, ShapeKind, Vertex};
