use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use pixelpets_common::{Light, MAX_LIGHTS, Material};
use pixelpets_render::FrameView;

/// One point light, laid out for a WGSL uniform array.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// constant, linear, quadratic, unused
    pub attenuation: [f32; 4],
}

impl From<&Light> for LightUniform {
    fn from(light: &Light) -> Self {
        Self {
            position: light.position.extend(1.0).to_array(),
            ambient: light.ambient.extend(0.0).to_array(),
            diffuse: light.diffuse.extend(0.0).to_array(),
            specular: light.specular.extend(0.0).to_array(),
            attenuation: [light.constant, light.linear, light.quadratic, 0.0],
        }
    }
}

/// Per-frame uniforms, bound at group 0.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view_pos: [f32; 4],
    pub lights: [LightUniform; MAX_LIGHTS],
    pub light_count: u32,
    _pad: [u32; 3],
}

impl FrameUniforms {
    /// Pack the camera and lights. Lights past the fourth are dropped.
    pub fn new(view: &FrameView, lights: &[Light]) -> Self {
        if lights.len() > MAX_LIGHTS {
            tracing::warn!(
                "{} lights given, only the first {MAX_LIGHTS} are used",
                lights.len()
            );
        }
        let mut uniforms = Self {
            view_proj: view.view_projection().to_cols_array_2d(),
            view_pos: view.eye.extend(1.0).to_array(),
            lights: [LightUniform::zeroed(); MAX_LIGHTS],
            light_count: 0,
            _pad: [0; 3],
        };
        for (slot, light) in uniforms.lights.iter_mut().zip(lights) {
            *slot = light.into();
            uniforms.light_count += 1;
        }
        uniforms
    }
}

/// Per-draw uniforms, bound at group 1 with a dynamic offset.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// rgb specular, w shininess
    pub specular: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(transform: Mat4, material: &Material) -> Self {
        Self {
            model: transform.to_cols_array_2d(),
            normal: transform.inverse().transpose().to_cols_array_2d(),
            ambient: material.ambient.extend(0.0).to_array(),
            diffuse: material.diffuse.extend(0.0).to_array(),
            specular: material.specular.extend(material.shininess).to_array(),
        }
    }
}

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, &Material::default())
    }
}

/// Round `size` up to a multiple of `alignment` (a power of two).
pub(crate) fn align_to(size: u64, alignment: u64) -> u64 {
    (size + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use pixelpets_render::{OrbitCamera, Projection};

    #[test]
    fn layouts_match_the_shader() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 80);
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 416);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 176);
    }

    #[test]
    fn frame_packs_lights_in_order() {
        let view = FrameView::new(&OrbitCamera::new(15.0), &Projection::default());
        let lights = [Light::scene_key(), Light::default()];
        let frame = FrameUniforms::new(&view, &lights);
        assert_eq!(frame.light_count, 2);
        assert_eq!(frame.lights[0].position, [5.0, 8.0, 5.0, 1.0]);
        assert_eq!(frame.lights[0].attenuation, [1.0, 0.014, 0.0007, 0.0]);
        assert_eq!(frame.lights[2], LightUniform::zeroed());
        assert_eq!(frame.view_pos[..3], view.eye.to_array());
    }

    #[test]
    fn extra_lights_are_dropped() {
        let view = FrameView::new(&OrbitCamera::default(), &Projection::default());
        let lights = vec![Light::default(); 6];
        assert_eq!(FrameUniforms::new(&view, &lights).light_count, 4);
    }

    #[test]
    fn object_carries_shininess_in_specular_w() {
        let object = ObjectUniforms::new(Mat4::IDENTITY, &Material::gold());
        assert_eq!(object.specular[3], Material::gold().shininess);
        assert_eq!(object.normal, Mat4::IDENTITY.to_cols_array_2d());
    }

    #[test]
    fn normal_matrix_undoes_nonuniform_scale() {
        let transform = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let object = ObjectUniforms::new(transform, &Material::default());
        assert!((object.normal[0][0] - 0.5).abs() < 1e-6);
        assert!((object.normal[1][1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn align_to_rounds_up() {
        assert_eq!(align_to(176, 256), 256);
        assert_eq!(align_to(256, 256), 256);
        assert_eq!(align_to(257, 256), 512);
    }
}
