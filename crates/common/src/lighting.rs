use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A point light with quadratic distance attenuation.
///
/// Attenuation at distance `d` is `1 / (constant + linear * d + quadratic * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

impl Light {
    /// The single light the viewer places above and to the side of the scene.
    pub fn scene_key() -> Self {
        Self {
            position: Vec3::new(5.0, 8.0, 5.0),
            ambient: Vec3::splat(0.3),
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            constant: 1.0,
            linear: 0.014,
            quadratic: 0.0007,
        }
    }

    pub fn attenuation(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

/// Phong reflection coefficients for one drawn object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            shininess: 32.0,
        }
    }
}

impl Material {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn emerald() -> Self {
        Self::new(
            Vec3::new(0.0215, 0.1745, 0.0215),
            Vec3::new(0.07568, 0.61424, 0.07568),
            Vec3::new(0.633, 0.727811, 0.633),
            76.8,
        )
    }

    pub fn jade() -> Self {
        Self::new(
            Vec3::new(0.135, 0.2225, 0.1575),
            Vec3::new(0.54, 0.89, 0.63),
            Vec3::splat(0.316228),
            12.8,
        )
    }

    pub fn gold() -> Self {
        Self::new(
            Vec3::new(0.24725, 0.1995, 0.0745),
            Vec3::new(0.75164, 0.60648, 0.22648),
            Vec3::new(0.628281, 0.555802, 0.366065),
            51.2,
        )
    }

    pub fn pearl() -> Self {
        Self::new(
            Vec3::new(0.25, 0.20725, 0.20725),
            Vec3::new(1.0, 0.829, 0.829),
            Vec3::splat(0.296648),
            11.264,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attenuation_is_one_at_the_light() {
        let light = Light::scene_key();
        assert_eq!(light.attenuation(0.0), 1.0);
        assert!(light.attenuation(10.0) < 1.0);
        assert!(light.attenuation(20.0) < light.attenuation(10.0));
    }

    #[test]
    fn material_presets_are_distinct() {
        let presets = [
            Material::emerald(),
            Material::jade(),
            Material::gold(),
            Material::pearl(),
        ];
        for (i, a) in presets.iter().enumerate() {
            assert!(a.shininess > 0.0);
            for b in &presets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn light_fields_default_when_missing() {
        let light: Light = serde_json::from_str(r#"{ "position": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(light.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(light.linear, Light::default().linear);
    }
}
