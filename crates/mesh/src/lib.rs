//! Procedural Mesh Builder: expands axis-aligned boxes into flat-shaded,
//! unindexed triangle lists and assembles creatures from fixed box tables.
//!
//! # Invariants
//! - Every appended box contributes exactly 36 vertices, faces in the order
//!   +Z, -Z, +X, -X, +Y, -Y, wound counter-clockwise seen from outside.
//! - Normals come from the face's axis, never from the geometry.
//! - Factories are deterministic and linear in `scale`.

pub mod archetypes;
pub mod builder;
pub mod parts;
pub mod shapes;

pub use builder::{FACE_NORMALS, Mesh, VERTICES_PER_BOX};
pub use parts::BoxPart;
pub use shapes::{
    build_shape, create_bird, create_cat, create_cube, create_ground, create_rabbit,
};
