use crate::camera::OrbitCamera;
use glam::{Mat4, Vec3};
use pixelpets_common::CameraConfig;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    pub fn from_config(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
            ..Self::default()
        };
        projection.set_viewport(width, height);
        projection
    }

    /// Track the surface size. A minimized (zero-sized) surface keeps the
    /// previous aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Right-handed perspective with a [0, 1] depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }
}

/// Everything the renderer needs from the camera for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
}

impl FrameView {
    pub fn new(camera: &OrbitCamera, projection: &Projection) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: projection.matrix(),
            eye: camera.position(),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_defaults() {
        let projection = Projection::default();
        assert_eq!(projection.fov_degrees, 45.0);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 100.0);
    }

    #[test]
    fn viewport_sets_aspect_and_ignores_zero_sizes() {
        let mut projection = Projection::default();
        projection.set_viewport(1920, 1080);
        assert_eq!(projection.aspect, 1920.0 / 1080.0);
        projection.set_viewport(0, 720);
        assert_eq!(projection.aspect, 1920.0 / 1080.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let camera = OrbitCamera::new(15.0);
        let frame = FrameView::new(&camera, &Projection::default());
        let clip = frame.view_projection().project_point3(camera.target());
        assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&clip.z));
        assert_eq!(frame.eye, camera.position());
    }

    #[test]
    fn from_config_uses_window_aspect() {
        let projection = Projection::from_config(&CameraConfig::default(), 800, 400);
        assert_eq!(projection.aspect, 2.0);
        assert_eq!(projection.fov_degrees, 45.0);
    }
}
