use crate::backend::RenderBackend;
use glam::Vec3;
use pixelpets_common::{BoxSpec, Vertex};
use pixelpets_mesh::Mesh;

/// Misuse of the model lifecycle. None of these change the model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("model {0:?} has no vertices to upload")]
    Empty(String),
    #[error("model {0:?} is already finalized")]
    AlreadyFinalized(String),
    #[error("model {0:?} drawn before finalize")]
    NotFinalized(String),
}

/// A mesh plus the GPU buffer it was uploaded to.
///
/// Lifecycle: built (boxes appended) -> finalized once -> drawn any number
/// of times -> dropped, which releases the buffer. `H` is the backend's
/// buffer handle type.
#[derive(Debug)]
pub struct Model<H> {
    label: String,
    mesh: Mesh,
    buffer: Option<H>,
}

impl<H> Model<H> {
    pub fn new(label: impl Into<String>) -> Self {
        Self::from_mesh(label, Mesh::new())
    }

    pub fn from_mesh(label: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            label: label.into(),
            mesh,
            buffer: None,
        }
    }

    /// Append one box. Fails once the model has been uploaded.
    pub fn append_box(&mut self, spec: &BoxSpec) -> Result<(), ModelError> {
        if self.is_finalized() {
            tracing::warn!("cannot append to finalized model {:?}", self.label);
            return Err(ModelError::AlreadyFinalized(self.label.clone()));
        }
        self.mesh.append_box(spec);
        Ok(())
    }

    pub fn add_box(&mut self, center: Vec3, size: Vec3, color: Vec3) -> Result<(), ModelError> {
        self.append_box(&BoxSpec::new(center, size, color))
    }

    /// Upload the vertices as one static buffer.
    pub fn finalize<B>(&mut self, backend: &mut B) -> Result<(), ModelError>
    where
        B: RenderBackend<VertexBuffer = H>,
    {
        if self.is_finalized() {
            tracing::warn!(
                "model {:?} ({} vertices) finalized twice; keeping its buffer",
                self.label,
                self.mesh.len()
            );
            return Err(ModelError::AlreadyFinalized(self.label.clone()));
        }
        if self.mesh.is_empty() {
            tracing::warn!("model {:?} has no vertices; nothing uploaded", self.label);
            return Err(ModelError::Empty(self.label.clone()));
        }
        let buffer = backend.create_vertex_buffer(&self.label, self.mesh.vertices());
        self.buffer = Some(buffer);
        tracing::debug!("finalized {:?} ({} vertices)", self.label, self.mesh.len());
        Ok(())
    }

    /// Issue one draw call over every vertex.
    pub fn draw<B>(&self, backend: &mut B) -> Result<(), ModelError>
    where
        B: RenderBackend<VertexBuffer = H>,
    {
        let Some(buffer) = &self.buffer else {
            tracing::warn!(
                "model {:?} ({} vertices) drawn before finalize; skipped",
                self.label,
                self.mesh.len()
            );
            return Err(ModelError::NotFinalized(self.label.clone()));
        };
        backend.draw_triangles(buffer, self.vertex_count() as u32);
        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.mesh.vertices()
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn buffer(&self) -> Option<&H> {
        self.buffer.as_ref()
    }
}
