//! Box tables for each creature archetype.
//!
//! Offsets and sizes are multiples of the creature's `scale`; offsets are
//! relative to its origin, which sits on the ground between its feet with
//! +Z pointing towards the head.

use crate::parts::BoxPart;

pub mod palette {
    pub const CAT_FUR: [f32; 3] = [0.6, 0.6, 0.6];
    pub const CAT_DARK: [f32; 3] = [0.1, 0.1, 0.1];
    pub const CAT_BELLY: [f32; 3] = [0.7, 0.7, 0.7];
    pub const EYE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
    pub const EYE_BLACK: [f32; 3] = [0.0, 0.0, 0.0];
    pub const INNER_EAR: [f32; 3] = [1.0, 0.85, 0.85];
    pub const CAT_NOSE: [f32; 3] = [1.0, 0.6, 0.7];
    pub const CAT_PAW: [f32; 3] = [0.85, 0.75, 0.7];

    pub const RABBIT_FUR: [f32; 3] = [1.0, 1.0, 1.0];
    pub const RABBIT_EAR: [f32; 3] = [0.95, 0.9, 0.9];

    pub const BIRD_BLUE: [f32; 3] = [0.2, 0.6, 1.0];
    pub const BIRD_DEEP_BLUE: [f32; 3] = [0.1, 0.5, 0.9];
    pub const BIRD_YELLOW: [f32; 3] = [1.0, 0.8, 0.0];
}

use palette::*;

const fn part(offset: [f32; 3], size: [f32; 3], color: [f32; 3]) -> BoxPart {
    BoxPart::new(offset, size, color)
}

/// Cat body, head, ears, legs and paws. The tail is generated separately.
#[rustfmt::skip]
pub const CAT_BODY: [BoxPart; 52] = [
    // torso core, flanks, top and bottom fill
    part([ 0.0,  0.5,   0.0 ], [0.45, 0.4,  0.9 ], CAT_FUR),
    part([-0.2,  0.5,   0.0 ], [0.35, 0.35, 0.85], CAT_FUR),
    part([ 0.2,  0.5,   0.0 ], [0.35, 0.35, 0.85], CAT_FUR),
    part([ 0.0,  0.65,  0.0 ], [0.4,  0.2,  0.85], CAT_FUR),
    part([ 0.0,  0.3,   0.0 ], [0.42, 0.2,  0.85], CAT_FUR),
    // chest and rump
    part([ 0.0,  0.5,   0.4 ], [0.43, 0.38, 0.2 ], CAT_FUR),
    part([ 0.0,  0.5,  -0.4 ], [0.43, 0.38, 0.2 ], CAT_FUR),
    // torso corners
    part([-0.2,  0.5,  -0.35], [0.25, 0.35, 0.25], CAT_FUR),
    part([-0.2,  0.5,   0.35], [0.25, 0.35, 0.25], CAT_FUR),
    part([ 0.2,  0.5,  -0.35], [0.25, 0.35, 0.25], CAT_FUR),
    part([ 0.2,  0.5,   0.35], [0.25, 0.35, 0.25], CAT_FUR),
    // belly
    part([ 0.0,  0.4,   0.0 ], [0.4,  0.3,  0.8 ], CAT_BELLY),
    part([ 0.0,  0.35,  0.0 ], [0.38, 0.25, 0.75], CAT_BELLY),
    part([-0.15, 0.38,  0.0 ], [0.2,  0.28, 0.7 ], CAT_BELLY),
    part([ 0.15, 0.38,  0.0 ], [0.2,  0.28, 0.7 ], CAT_BELLY),
    // hips and shoulders
    part([-0.2,  0.3,  -0.2 ], [0.25, 0.2,  0.25], CAT_FUR),
    part([-0.2,  0.3,   0.2 ], [0.25, 0.2,  0.25], CAT_FUR),
    part([ 0.2,  0.3,  -0.2 ], [0.25, 0.2,  0.25], CAT_FUR),
    part([ 0.2,  0.3,   0.2 ], [0.25, 0.2,  0.25], CAT_FUR),
    // head, muzzle, face outline, nose
    part([ 0.0,  0.8,   0.5 ], [0.4,  0.35, 0.4 ], CAT_FUR),
    part([ 0.0,  0.8,   0.7 ], [0.35, 0.3,  0.25], CAT_FUR),
    part([ 0.0,  0.85,  0.8 ], [0.3,  0.25, 0.15], CAT_FUR),
    part([ 0.0,  0.82,  0.88], [0.12, 0.12, 0.08], CAT_NOSE),
    // eyes: whites, pupils, highlights
    part([-0.15, 0.9,   0.75], [0.12, 0.15, 0.12], EYE_WHITE),
    part([ 0.15, 0.9,   0.75], [0.12, 0.15, 0.12], EYE_WHITE),
    part([-0.15, 0.9,   0.77], [0.09, 0.12, 0.08], EYE_BLACK),
    part([ 0.15, 0.9,   0.77], [0.09, 0.12, 0.08], EYE_BLACK),
    part([-0.17, 0.92,  0.79], [0.04, 0.04, 0.04], EYE_WHITE),
    part([ 0.13, 0.92,  0.79], [0.04, 0.04, 0.04], EYE_WHITE),
    // ears with pink lining
    part([-0.18, 1.1,   0.5 ], [0.15, 0.3,  0.15], CAT_FUR),
    part([-0.18, 1.1,   0.52], [0.1,  0.25, 0.1 ], INNER_EAR),
    part([ 0.18, 1.1,   0.5 ], [0.15, 0.3,  0.15], CAT_FUR),
    part([ 0.18, 1.1,   0.52], [0.1,  0.25, 0.1 ], INNER_EAR),
    // cheeks and whisker pads
    part([-0.15, 0.8,   0.75], [0.15, 0.2,  0.2 ], CAT_FUR),
    part([ 0.15, 0.8,   0.75], [0.15, 0.2,  0.2 ], CAT_FUR),
    part([-0.15, 0.8,   0.85], [0.08, 0.08, 0.08], CAT_FUR),
    part([ 0.15, 0.8,   0.85], [0.08, 0.08, 0.08], CAT_FUR),
    // second ear lining pass
    part([-0.18, 1.1,   0.52], [0.1,  0.25, 0.1 ], INNER_EAR),
    part([ 0.18, 1.1,   0.52], [0.1,  0.25, 0.1 ], INNER_EAR),
    // dark face marking
    part([ 0.0,  0.9,   0.65], [0.35, 0.3,  0.12], CAT_DARK),
    // ear tips
    part([-0.2,  1.2,   0.45], [0.15, 0.25, 0.12], CAT_FUR),
    part([ 0.2,  1.2,   0.45], [0.15, 0.25, 0.12], CAT_FUR),
    // legs, rear ones thicker
    part([-0.25, 0.25,  0.25], [0.18, 0.5,  0.18], CAT_FUR),
    part([ 0.25, 0.25,  0.25], [0.18, 0.5,  0.18], CAT_FUR),
    part([-0.25, 0.25, -0.25], [0.22, 0.5,  0.22], CAT_FUR),
    part([ 0.25, 0.25, -0.25], [0.22, 0.5,  0.22], CAT_FUR),
    // leg girdles
    part([ 0.0,  0.45,  0.25], [0.6,  0.2,  0.2 ], CAT_FUR),
    part([ 0.0,  0.45, -0.25], [0.6,  0.2,  0.25], CAT_FUR),
    // paws
    part([-0.25, 0.08,  0.25], [0.2,  0.15, 0.2 ], CAT_PAW),
    part([ 0.25, 0.08,  0.25], [0.2,  0.15, 0.2 ], CAT_PAW),
    part([-0.25, 0.08, -0.25], [0.24, 0.15, 0.24], CAT_PAW),
    part([ 0.25, 0.08, -0.25], [0.24, 0.15, 0.24], CAT_PAW),
];

/// Tail segment count for the cat.
pub const CAT_TAIL_SEGMENTS: usize = 5;
/// Cross-section of a tail segment.
pub const CAT_TAIL_WIDTH: f32 = 0.12;
/// Length of a tail segment along Z.
pub const CAT_TAIL_SEGMENT_LENGTH: f32 = 0.18;
/// Joint fillers are this fraction of the segment cross-section.
pub const CAT_TAIL_FILLER_RATIO: f32 = 0.8;
pub const CAT_TAIL_FILLER_LENGTH: f32 = 0.1;

#[rustfmt::skip]
pub const RABBIT: [BoxPart; 9] = [
    part([ 0.0,  0.5,   0.0], [0.5,  0.4,  0.6 ], RABBIT_FUR),
    part([ 0.0,  0.9,   0.3], [0.4,  0.4,  0.4 ], RABBIT_FUR),
    part([-0.15, 1.4,   0.3], [0.1,  0.4,  0.1 ], RABBIT_EAR),
    part([ 0.15, 1.4,   0.3], [0.1,  0.4,  0.1 ], RABBIT_EAR),
    // front legs
    part([-0.2,  0.15,  0.2], [0.15, 0.3,  0.15], RABBIT_FUR),
    part([ 0.2,  0.15,  0.2], [0.15, 0.3,  0.15], RABBIT_FUR),
    // hind legs are 1.2x wider and 1.4x taller
    part([-0.2,  0.21, -0.2], [0.18, 0.42, 0.18], RABBIT_FUR),
    part([ 0.2,  0.21, -0.2], [0.18, 0.42, 0.18], RABBIT_FUR),
    // cotton tail
    part([ 0.0,  0.5,  -0.4], [0.2,  0.2,  0.1 ], RABBIT_FUR),
];

#[rustfmt::skip]
pub const BIRD: [BoxPart; 8] = [
    part([ 0.0, 0.5,   0.0], [0.4,  0.4, 0.6 ], BIRD_BLUE),
    part([ 0.0, 0.8,   0.4], [0.3,  0.3, 0.3 ], BIRD_BLUE),
    part([ 0.0, 0.75,  0.6], [0.1,  0.1, 0.2 ], BIRD_YELLOW),
    part([-0.4, 0.6,   0.0], [0.1,  0.2, 0.4 ], BIRD_DEEP_BLUE),
    part([ 0.4, 0.6,   0.0], [0.1,  0.2, 0.4 ], BIRD_DEEP_BLUE),
    part([ 0.0, 0.5,  -0.4], [0.3,  0.1, 0.2 ], BIRD_DEEP_BLUE),
    part([-0.1, 0.1,   0.0], [0.05, 0.2, 0.05], BIRD_YELLOW),
    part([ 0.1, 0.1,   0.0], [0.05, 0.2, 0.05], BIRD_YELLOW),
];
