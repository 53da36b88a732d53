//! wgpu render backend for the pixel-animal viewer.
//!
//! Draws vertex-colored box meshes with per-fragment Phong lighting from up
//! to four point lights. Each draw gets its own transform and material
//! through a dynamic-offset uniform buffer.
//!
//! # Invariants
//! - Vertex buffers are immutable once created and freed when their handle
//!   drops.
//! - Draw calls are recorded between frames and replayed in order by
//!   `render_frame`.

mod gpu;
mod shaders;
mod uniforms;

pub use gpu::{GpuVertexBuffer, WgpuRenderer};
pub use uniforms::{FrameUniforms, LightUniform, ObjectUniforms};
