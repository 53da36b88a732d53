//! Renderer-agnostic viewer core.
//!
//! # Invariants
//! - The orbit camera's eye always lies on the sphere of `radius` around its
//!   target; pitch stays within [-89, 89] degrees, radius within [1, 20].
//! - A model owns its GPU buffer exclusively. The buffer exists only after a
//!   successful finalize and is released exactly once, when the model drops.
//! - Precondition violations (empty finalize, double finalize, draw before
//!   finalize) are logged, reported as `ModelError`, and change nothing.
//!
//! # Backends
//! Drawing goes through the `RenderBackend` trait. `HeadlessBackend` records
//! uploads and draw calls without a GPU; the wgpu backend lives in its own crate.

mod backend;
mod camera;
mod model;
mod scene;
mod view;

pub use backend::{DrawCall, HeadlessBackend, HeadlessBuffer, RenderBackend};
pub use camera::{MAX_RADIUS, MIN_RADIUS, OrbitCamera, PITCH_LIMIT, Sweep};
pub use model::{Model, ModelError};
pub use scene::{Scene, SceneObject};
pub use view::{FrameView, Projection};

pub fn crate_info() -> &'static str {
    "pixelpets-render v0.1.0"
}
