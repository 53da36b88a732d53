use crate::view::FrameView;
use glam::Mat4;
use pixelpets_common::{Material, Vertex};
use std::cell::Cell;
use std::fmt::Write as _;
use std::rc::Rc;

/// Renderer-agnostic drawing interface.
///
/// A backend hands out vertex buffers and issues draw calls; it knows nothing
/// about meshes or cameras. Buffers release their GPU storage when dropped,
/// so whoever owns the handle owns the storage.
pub trait RenderBackend {
    /// Owned handle to one uploaded, immutable vertex buffer.
    type VertexBuffer;

    /// Upload `vertices` as a single static vertex buffer.
    fn create_vertex_buffer(&mut self, label: &str, vertices: &[Vertex]) -> Self::VertexBuffer;

    /// Set the world transform and material used by the following draws.
    fn bind_object(&mut self, transform: Mat4, material: &Material);

    /// Draw `vertex_count` vertices of `buffer` as an unindexed triangle list.
    fn draw_triangles(&mut self, buffer: &Self::VertexBuffer, vertex_count: u32);
}

/// Buffer handle issued by [`HeadlessBackend`].
#[derive(Debug)]
pub struct HeadlessBuffer {
    id: u64,
    label: String,
    vertex_count: usize,
    live: Rc<Cell<usize>>,
}

impl HeadlessBuffer {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for HeadlessBuffer {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        tracing::trace!("released buffer {} ({})", self.id, self.label);
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub buffer_id: u64,
    pub label: String,
    pub vertex_count: u32,
    pub transform: Mat4,
    pub material: Material,
}

/// GPU-free backend that records uploads and draws.
///
/// Used by the CLI to inspect a frame and by tests to observe the model
/// lifecycle, including how many buffers are still alive.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_id: u64,
    live: Rc<Cell<usize>>,
    uploaded_vertices: usize,
    bound: (Mat4, Material),
    draws: Vec<DrawCall>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers created and not yet dropped.
    pub fn live_buffers(&self) -> usize {
        self.live.get()
    }

    /// Buffers created over the backend's lifetime.
    pub fn buffers_created(&self) -> u64 {
        self.next_id
    }

    pub fn uploaded_vertices(&self) -> usize {
        self.uploaded_vertices
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Take the recorded draws, starting a fresh frame.
    pub fn take_draws(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.draws)
    }

    /// Human-readable dump of the recorded frame.
    pub fn report(&self, view: &FrameView) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame ({} draws, {} live buffers, {} vertices uploaded) ===",
            self.draws.len(),
            self.live_buffers(),
            self.uploaded_vertices
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2})",
            view.eye.x, view.eye.y, view.eye.z
        );
        for draw in &self.draws {
            let t = draw.transform.w_axis;
            let _ = writeln!(
                out,
                "  [#{}] {:<10} vertices={:<5} triangles={:<4} offset=({:.2}, {:.2}, {:.2}) shininess={}",
                draw.buffer_id,
                draw.label,
                draw.vertex_count,
                draw.vertex_count / 3,
                t.x,
                t.y,
                t.z,
                draw.material.shininess
            );
        }
        out
    }
}

impl RenderBackend for HeadlessBackend {
    type VertexBuffer = HeadlessBuffer;

    fn create_vertex_buffer(&mut self, label: &str, vertices: &[Vertex]) -> HeadlessBuffer {
        self.next_id += 1;
        self.live.set(self.live.get() + 1);
        self.uploaded_vertices += vertices.len();
        HeadlessBuffer {
            id: self.next_id,
            label: label.to_string(),
            vertex_count: vertices.len(),
            live: Rc::clone(&self.live),
        }
    }

    fn bind_object(&mut self, transform: Mat4, material: &Material) {
        self.bound = (transform, *material);
    }

    fn draw_triangles(&mut self, buffer: &HeadlessBuffer, vertex_count: u32) {
        let (transform, material) = self.bound;
        self.draws.push(DrawCall {
            buffer_id: buffer.id,
            label: buffer.label.clone(),
            vertex_count,
            transform,
            material,
        });
    }
}
