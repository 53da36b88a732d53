use glam::Vec3;
use pixelpets_common::{BoxSpec, Vertex};

/// Vertices produced by one box: 6 faces x 2 triangles x 3 corners.
pub const VERTICES_PER_BOX: usize = 36;

/// Outward normals in the order faces are emitted.
pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::Z,
    Vec3::NEG_Z,
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
];

/// Corner signs per face, applied to the box half extents.
///
/// Each row is two triangles; both are counter-clockwise seen from outside.
#[rustfmt::skip]
const FACE_CORNERS: [[[f32; 3]; 6]; 6] = [
    // +Z (front)
    [[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
     [-1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0,  1.0]],
    // -Z (back)
    [[ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
     [ 1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0]],
    // +X (right)
    [[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0],
     [ 1.0, -1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0]],
    // -X (left)
    [[-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
     [-1.0, -1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0]],
    // +Y (top)
    [[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
     [-1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0]],
    // -Y (bottom)
    [[-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0],
     [-1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0]],
];

/// A flat, unindexed triangle list built by appending boxes.
///
/// Insertion order is draw order. There is no index buffer, so edges shared
/// between faces or boxes are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `boxes` boxes up front.
    pub fn with_box_capacity(boxes: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(boxes * VERTICES_PER_BOX),
        }
    }

    /// Append the 36 vertices of one box.
    ///
    /// Zero or negative size components collapse faces to zero area; the
    /// vertices are still emitted.
    pub fn append_box(&mut self, spec: &BoxSpec) {
        let half = spec.size / 2.0;
        self.vertices.reserve(VERTICES_PER_BOX);
        for (corners, normal) in FACE_CORNERS.iter().zip(FACE_NORMALS) {
            for sign in corners {
                let position = spec.center + Vec3::from_array(*sign) * half;
                self.vertices.push(Vertex::new(position, spec.color, normal));
            }
        }
    }

    /// Convenience form of [`Mesh::append_box`].
    pub fn add_box(&mut self, center: Vec3, size: Vec3, color: Vec3) {
        self.append_box(&BoxSpec::new(center, size, color));
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of boxes appended so far.
    pub fn box_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_BOX
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Axis-aligned bounds of every vertex, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.vertices.iter().map(Vertex::position);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl From<Mesh> for Vec<Vertex> {
    fn from(mesh: Mesh) -> Self {
        mesh.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoxSpec {
        BoxSpec::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(2.0, 4.0, 6.0),
            Vec3::new(0.5, 0.25, 1.0),
        )
    }

    #[test]
    fn one_box_is_36_vertices() {
        let mut mesh = Mesh::new();
        mesh.append_box(&unit_box());
        assert_eq!(mesh.len(), VERTICES_PER_BOX);
        assert_eq!(mesh.box_count(), 1);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn normals_follow_fixed_face_order() {
        let mut mesh = Mesh::new();
        mesh.append_box(&unit_box());
        for (face, chunk) in mesh.vertices().chunks(6).enumerate() {
            for v in chunk {
                assert_eq!(v.normal(), FACE_NORMALS[face]);
            }
        }
    }

    #[test]
    fn color_is_uniform() {
        let spec = unit_box();
        let mut mesh = Mesh::new();
        mesh.append_box(&spec);
        assert!(mesh.vertices().iter().all(|v| v.color() == spec.color));
    }

    #[test]
    fn faces_lie_on_their_planes() {
        let spec = unit_box();
        let mut mesh = Mesh::new();
        mesh.append_box(&spec);
        let half = spec.size / 2.0;
        for v in mesh.vertices() {
            let offset = v.position() - spec.center;
            let n = v.normal();
            // Distance along the normal is exactly the half extent on that axis.
            assert_eq!(offset.dot(n), (half * n.abs()).element_sum());
            assert!(offset.abs().cmple(half).all());
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mut mesh = Mesh::new();
        mesh.append_box(&unit_box());
        for tri in mesh.vertices().chunks(3) {
            let (a, b, c) = (tri[0].position(), tri[1].position(), tri[2].position());
            let face_normal = (b - a).cross(c - a);
            assert!(face_normal.dot(tri[0].normal()) > 0.0);
        }
    }

    #[test]
    fn bounds_match_box_extent() {
        let spec = unit_box();
        let mut mesh = Mesh::new();
        mesh.append_box(&spec);
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, spec.center - spec.size / 2.0);
        assert_eq!(max, spec.center + spec.size / 2.0);
    }

    #[test]
    fn degenerate_box_still_emits_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_box(Vec3::ZERO, Vec3::new(0.0, 1.0, -1.0), Vec3::ONE);
        assert_eq!(mesh.len(), VERTICES_PER_BOX);
    }

    #[test]
    fn boxes_append_in_order() {
        let mut mesh = Mesh::with_box_capacity(2);
        mesh.add_box(Vec3::ZERO, Vec3::ONE, Vec3::X);
        mesh.add_box(Vec3::splat(5.0), Vec3::ONE, Vec3::Y);
        assert_eq!(mesh.box_count(), 2);
        assert!(mesh.vertices()[..36].iter().all(|v| v.color() == Vec3::X));
        assert!(mesh.vertices()[36..].iter().all(|v| v.color() == Vec3::Y));
    }

    #[test]
    fn empty_mesh_has_no_bounds() {
        assert!(Mesh::new().bounds().is_none());
        assert!(Mesh::new().is_empty());
    }
}
