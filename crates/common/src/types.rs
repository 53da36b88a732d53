use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One corner of a flat-shaded triangle.
///
/// Laid out as three tightly packed `vec3<f32>` attributes (position, color,
/// normal) so a slice of vertices can be uploaded as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn color(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Construction-time description of one axis-aligned box.
///
/// `size` is the full width/height/depth, not the half extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpec {
    pub center: Vec3,
    pub size: Vec3,
    pub color: Vec3,
}

impl BoxSpec {
    pub fn new(center: Vec3, size: Vec3, color: Vec3) -> Self {
        Self {
            center,
            size,
            color,
        }
    }
}

/// The creature archetypes the mesh builder knows how to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cat,
    Rabbit,
    Bird,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cat, ShapeKind::Rabbit, ShapeKind::Bird];

    pub fn name(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Rabbit => "rabbit",
            Self::Bird => "bird",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from parsing a shape name.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("unknown shape {0:?} (expected one of: cat, rabbit, bird)")]
    Unknown(String),
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShapeError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_nine_packed_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
        let v = Vertex::new(Vec3::X, Vec3::Y, Vec3::Z);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn vertex_accessors() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE, Vec3::NEG_Y);
        assert_eq!(v.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.color(), Vec3::ONE);
        assert_eq!(v.normal(), Vec3::NEG_Y);
    }

    #[test]
    fn shape_kind_parses_case_insensitively() {
        assert_eq!("Cat".parse::<ShapeKind>().unwrap(), ShapeKind::Cat);
        assert_eq!(" bird ".parse::<ShapeKind>().unwrap(), ShapeKind::Bird);
        assert!(matches!(
            "dragon".parse::<ShapeKind>(),
            Err(ShapeError::Unknown(name)) if name == "dragon"
        ));
    }

    #[test]
    fn shape_kind_display_round_trips() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.to_string().parse::<ShapeKind>().unwrap(), kind);
        }
    }
}
