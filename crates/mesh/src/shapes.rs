use crate::archetypes::{self, palette};
use crate::builder::Mesh;
use glam::Vec3;
use pixelpets_common::ShapeKind;
use std::f32::consts::PI;

/// Ground slab thickness; its top face sits at y = 0.
const GROUND_THICKNESS: f32 = 0.2;

/// A single box.
pub fn create_cube(position: Vec3, size: Vec3, color: Vec3) -> Mesh {
    let mut mesh = Mesh::with_box_capacity(1);
    mesh.add_box(position, size, color);
    mesh
}

/// A thin slab centered just below the origin.
pub fn create_ground(width: f32, depth: f32, color: Vec3) -> Mesh {
    create_cube(
        Vec3::new(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        Vec3::new(width, GROUND_THICKNESS, depth),
        color,
    )
}

pub fn create_cat(position: Vec3, scale: f32) -> Mesh {
    let tail_boxes = 2 * archetypes::CAT_TAIL_SEGMENTS - 1;
    let mut mesh = Mesh::with_box_capacity(archetypes::CAT_BODY.len() + tail_boxes);
    mesh.append_parts(position, scale, &archetypes::CAT_BODY);
    append_cat_tail(&mut mesh, position, scale);
    log_built(ShapeKind::Cat, &mesh);
    mesh
}

pub fn create_rabbit(position: Vec3, scale: f32) -> Mesh {
    let mut mesh = Mesh::with_box_capacity(archetypes::RABBIT.len());
    mesh.append_parts(position, scale, &archetypes::RABBIT);
    log_built(ShapeKind::Rabbit, &mesh);
    mesh
}

pub fn create_bird(position: Vec3, scale: f32) -> Mesh {
    let mut mesh = Mesh::with_box_capacity(archetypes::BIRD.len());
    mesh.append_parts(position, scale, &archetypes::BIRD);
    log_built(ShapeKind::Bird, &mesh);
    mesh
}

/// Build any creature archetype by kind.
pub fn build_shape(kind: ShapeKind, position: Vec3, scale: f32) -> Mesh {
    match kind {
        ShapeKind::Cat => create_cat(position, scale),
        ShapeKind::Rabbit => create_rabbit(position, scale),
        ShapeKind::Bird => create_bird(position, scale),
    }
}

/// Tail centerline at `progress` in [0, 1], for unit scale.
///
/// Rises from the rump and sweeps back, bowing sideways in the middle.
fn tail_point(progress: f32) -> Vec3 {
    Vec3::new(
        (progress * PI).sin() * 0.2,
        0.5 + progress * 0.8,
        -(0.4 + progress * 0.5),
    )
}

/// Segments along the curve, each followed by a smaller filler box at the
/// midpoint to the next one. Color darkens towards the tip.
fn append_cat_tail(mesh: &mut Mesh, origin: Vec3, scale: f32) {
    let fur = Vec3::from_array(palette::CAT_FUR);
    let dark = Vec3::from_array(palette::CAT_DARK);
    let last = (archetypes::CAT_TAIL_SEGMENTS - 1) as f32;

    let width = archetypes::CAT_TAIL_WIDTH * scale;
    let segment_size = Vec3::new(width, width, archetypes::CAT_TAIL_SEGMENT_LENGTH * scale);
    let filler_width = width * archetypes::CAT_TAIL_FILLER_RATIO;
    let filler_size = Vec3::new(
        filler_width,
        filler_width,
        archetypes::CAT_TAIL_FILLER_LENGTH * scale,
    );

    for i in 0..archetypes::CAT_TAIL_SEGMENTS {
        let progress = i as f32 / last;
        let center = tail_point(progress) * scale;
        mesh.add_box(origin + center, segment_size, fur.lerp(dark, progress * 0.6));

        if i + 1 < archetypes::CAT_TAIL_SEGMENTS {
            let next_progress = (i + 1) as f32 / last;
            let next_center = tail_point(next_progress) * scale;
            mesh.add_box(
                origin + (center + next_center) * 0.5,
                filler_size,
                fur.lerp(dark, (progress + next_progress) * 0.3),
            );
        }
    }
}

fn log_built(kind: ShapeKind, mesh: &Mesh) {
    tracing::debug!(
        "built {kind}: {} boxes, {} vertices",
        mesh.box_count(),
        mesh.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::VERTICES_PER_BOX;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() <= EPS
    }

    #[test]
    fn ground_is_one_green_slab() {
        let green = Vec3::new(0.4, 0.8, 0.4);
        let ground = create_ground(10.0, 10.0, green);
        assert_eq!(ground.len(), 36);
        assert!(ground.vertices().iter().all(|v| v.color() == green));

        let (min, max) = ground.bounds().unwrap();
        assert!((min.y - -0.2).abs() < EPS);
        assert!(max.y.abs() < EPS);
        assert!(((min.y + max.y) / 2.0 - -0.1).abs() < EPS);
        assert_eq!(min.x, -5.0);
        assert_eq!(max.z, 5.0);
    }

    #[test]
    fn cube_is_one_box() {
        let mesh = create_cube(Vec3::ONE, Vec3::splat(2.0), Vec3::X);
        assert_eq!(mesh.box_count(), 1);
        assert_eq!(mesh.bounds().unwrap(), (Vec3::ZERO, Vec3::splat(2.0)));
    }

    #[test]
    fn box_counts_per_archetype() {
        let cat = create_cat(Vec3::ZERO, 1.0);
        assert_eq!(cat.box_count(), 52 + 5 + 4);
        assert_eq!(cat.len(), 61 * VERTICES_PER_BOX);
        assert_eq!(create_rabbit(Vec3::ZERO, 1.0).box_count(), 9);
        assert_eq!(create_bird(Vec3::ZERO, 1.0).box_count(), 8);
    }

    #[test]
    fn build_shape_dispatches() {
        for kind in ShapeKind::ALL {
            let expected = match kind {
                ShapeKind::Cat => create_cat(Vec3::ONE, 0.5),
                ShapeKind::Rabbit => create_rabbit(Vec3::ONE, 0.5),
                ShapeKind::Bird => create_bird(Vec3::ONE, 0.5),
            };
            assert_eq!(build_shape(kind, Vec3::ONE, 0.5), expected);
        }
    }

    #[test]
    fn factories_are_deterministic() {
        let origin = Vec3::new(0.3, 0.0, -1.7);
        for kind in ShapeKind::ALL {
            let a = build_shape(kind, origin, 1.3);
            let b = build_shape(kind, origin, 1.3);
            assert_eq!(a.len(), b.len());
            assert_eq!(a.vertices(), b.vertices(), "{kind} differs between runs");
        }
    }

    #[test]
    fn factories_are_linear_in_scale() {
        let origin = Vec3::new(2.0, 0.5, -3.0);
        let k = 2.5;
        for kind in ShapeKind::ALL {
            let unit = build_shape(kind, origin, 1.0);
            let scaled = build_shape(kind, origin, k);
            assert_eq!(unit.len(), scaled.len());
            for (u, s) in unit.vertices().iter().zip(scaled.vertices()) {
                let expected = origin + (u.position() - origin) * k;
                assert!(
                    approx(s.position(), expected),
                    "{kind}: {:?} vs {expected:?}",
                    s.position()
                );
                assert_eq!(u.color, s.color);
                assert_eq!(u.normal, s.normal);
            }
        }
    }

    #[test]
    fn translating_the_origin_translates_every_vertex() {
        let shift = Vec3::new(4.0, 0.0, -2.0);
        let here = create_bird(Vec3::ZERO, 1.0);
        let there = create_bird(shift, 1.0);
        for (a, b) in here.vertices().iter().zip(there.vertices()) {
            assert!(approx(b.position(), a.position() + shift));
        }
    }

    #[test]
    fn cat_tail_darkens_towards_the_tip() {
        let cat = create_cat(Vec3::ZERO, 1.0);
        let tail = &cat.vertices()[52 * VERTICES_PER_BOX..];
        let fur = Vec3::from_array(palette::CAT_FUR);
        let dark = Vec3::from_array(palette::CAT_DARK);

        // segments and fillers alternate: s0 f0 s1 f1 s2 f2 s3 f3 s4
        let segment_color = |i: usize| tail[2 * i * VERTICES_PER_BOX].color();
        assert_eq!(segment_color(0), fur);
        assert!(approx(segment_color(4), fur.lerp(dark, 0.6)));
        for i in 0..4 {
            assert!(segment_color(i + 1).x < segment_color(i).x);
        }
    }

    #[test]
    fn cat_tail_fillers_sit_between_segments() {
        let cat = create_cat(Vec3::ZERO, 1.0);
        let tail = &cat.vertices()[52 * VERTICES_PER_BOX..];
        let center = |box_index: usize| {
            let verts = &tail[box_index * VERTICES_PER_BOX..(box_index + 1) * VERTICES_PER_BOX];
            let (min, max) = verts
                .iter()
                .map(|v| v.position())
                .fold((Vec3::MAX, Vec3::MIN), |(lo, hi), p| (lo.min(p), hi.max(p)));
            (min + max) / 2.0
        };
        for i in 0..4 {
            let (seg, filler, next) = (center(2 * i), center(2 * i + 1), center(2 * i + 2));
            assert!(approx(filler, (seg + next) / 2.0));
        }
        // The tip ends up high and behind the body.
        let tip = center(8);
        assert!(approx(tip, Vec3::new(0.0, 1.3, -0.9)));
    }
}
