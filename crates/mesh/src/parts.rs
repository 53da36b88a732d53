use crate::builder::Mesh;
use glam::Vec3;
use pixelpets_common::BoxSpec;

/// One row of a creature's box table, in units of the creature's `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPart {
    pub offset: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 3],
}

impl BoxPart {
    pub const fn new(offset: [f32; 3], size: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            offset,
            size,
            color,
        }
    }

    /// Resolve the part against an origin and scale.
    pub fn place(&self, origin: Vec3, scale: f32) -> BoxSpec {
        BoxSpec::new(
            origin + Vec3::from_array(self.offset) * scale,
            Vec3::from_array(self.size) * scale,
            Vec3::from_array(self.color),
        )
    }
}

impl Mesh {
    /// Append every part of a table, in table order.
    pub fn append_parts(&mut self, origin: Vec3, scale: f32, parts: &[BoxPart]) {
        for part in parts {
            self.append_box(&part.place(origin, scale));
        }
    }
}
