use crate::backend::RenderBackend;
use crate::model::Model;
use glam::Mat4;
use pixelpets_common::{Material, SceneConfig};
use pixelpets_mesh::{build_shape, create_ground};

/// A model placed in the world with its shading parameters.
#[derive(Debug)]
pub struct SceneObject<H> {
    pub model: Model<H>,
    pub transform: Mat4,
    pub material: Material,
}

/// The models drawn each frame, in draw order.
#[derive(Debug)]
pub struct Scene<H> {
    objects: Vec<SceneObject<H>>,
}

impl<H> Default for Scene<H> {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
        }
    }
}

impl<H> Scene<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ground first, then every configured creature.
    ///
    /// Creatures are built at their placement, so their transform is identity;
    /// the ground is shifted by `ground_offset`.
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::new();
        scene.push(
            Model::from_mesh(
                "ground",
                create_ground(config.ground_width, config.ground_depth, config.ground_color),
            ),
            Mat4::from_translation(config.ground_offset),
            config.ground_material,
        );
        for (i, placement) in config.creatures.iter().enumerate() {
            let mesh = build_shape(placement.shape, placement.position, placement.scale);
            scene.push(
                Model::from_mesh(format!("{}#{i}", placement.shape), mesh),
                Mat4::IDENTITY,
                config.creature_material,
            );
        }
        tracing::info!(
            "scene: {} objects, {} vertices",
            scene.len(),
            scene.vertex_count()
        );
        scene
    }

    pub fn push(&mut self, model: Model<H>, transform: Mat4, material: Material) {
        self.objects.push(SceneObject {
            model,
            transform,
            material,
        });
    }

    /// Upload every model that is not yet on the GPU. Returns how many were
    /// uploaded by this call; failures are logged by the model.
    pub fn finalize<B>(&mut self, backend: &mut B) -> usize
    where
        B: RenderBackend<VertexBuffer = H>,
    {
        let mut uploaded = 0;
        for object in &mut self.objects {
            if !object.model.is_finalized() && object.model.finalize(backend).is_ok() {
                uploaded += 1;
            }
        }
        uploaded
    }

    /// Bind and draw each object in order. Returns the number of draw calls.
    pub fn draw<B>(&self, backend: &mut B) -> usize
    where
        B: RenderBackend<VertexBuffer = H>,
    {
        let mut drawn = 0;
        for object in &self.objects {
            if !object.model.is_finalized() {
                continue;
            }
            backend.bind_object(object.transform, &object.material);
            if object.model.draw(backend).is_ok() {
                drawn += 1;
            }
        }
        drawn
    }

    pub fn objects(&self) -> &[SceneObject<H>] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(|o| o.model.vertex_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{HeadlessBackend, HeadlessBuffer};
    use glam::Vec3;
    use pixelpets_common::{Placement, ShapeKind};

    #[test]
    fn default_scene_is_ground_then_cat() {
        let scene = Scene::<HeadlessBuffer>::from_config(&SceneConfig::default());
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.objects()[0].model.label(), "ground");
        assert_eq!(scene.objects()[1].model.label(), "cat#0");
        assert_eq!(scene.vertex_count(), 36 + 2196);
    }

    #[test]
    fn finalize_then_draw_in_order() {
        let config = SceneConfig {
            creatures: vec![
                Placement {
                    shape: ShapeKind::Rabbit,
                    position: Vec3::new(2.0, 0.0, 0.0),
                    scale: 1.0,
                },
                Placement {
                    shape: ShapeKind::Bird,
                    position: Vec3::new(-2.0, 0.0, 0.0),
                    scale: 0.5,
                },
            ],
            ..SceneConfig::default()
        };
        let mut backend = HeadlessBackend::new();
        let mut scene = Scene::from_config(&config);

        assert_eq!(scene.finalize(&mut backend), 3);
        assert_eq!(scene.finalize(&mut backend), 0);
        assert_eq!(backend.live_buffers(), 3);

        assert_eq!(scene.draw(&mut backend), 3);
        let draws = backend.draws();
        let labels: Vec<_> = draws.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["ground", "rabbit#0", "bird#1"]);
        assert_eq!(draws[0].transform.w_axis.y, -0.5);
        assert_eq!(draws[0].material, config.ground_material);
        assert_eq!(draws[1].transform, Mat4::IDENTITY);
        assert_eq!(draws[2].vertex_count, 8 * 36);

        drop(scene);
        assert_eq!(backend.live_buffers(), 0);
    }

    #[test]
    fn unfinalized_objects_are_skipped() {
        let mut backend = HeadlessBackend::new();
        let scene = Scene::<HeadlessBuffer>::from_config(&SceneConfig::default());
        assert_eq!(scene.draw(&mut backend), 0);
        assert!(backend.draws().is_empty());
    }

    #[test]
    fn empty_model_does_not_block_the_rest() {
        let mut backend = HeadlessBackend::new();
        let mut scene = Scene::new();
        scene.push(Model::new("empty"), Mat4::IDENTITY, Material::default());
        let cube = pixelpets_mesh::create_cube(Vec3::ZERO, Vec3::ONE, Vec3::ONE);
        scene.push(Model::from_mesh("cube", cube), Mat4::IDENTITY, Material::pearl());
        assert_eq!(scene.finalize(&mut backend), 1);
        assert_eq!(scene.draw(&mut backend), 1);
    }
}
