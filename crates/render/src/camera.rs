use glam::{Mat4, Vec3};
use pixelpets_common::CameraConfig;
use pixelpets_input::CameraAction;

/// Closest the camera may get to its target.
pub const MIN_RADIUS: f32 = 1.0;
/// Farthest the camera may orbit from its target.
pub const MAX_RADIUS: f32 = 20.0;
/// Pitch limit in degrees; keeps the view off the poles where `up` degenerates.
pub const PITCH_LIMIT: f32 = 89.0;

const INITIAL_YAW: f32 = -45.0;
const INITIAL_PITCH: f32 = 30.0;
const DEFAULT_RADIUS: f32 = 5.0;

/// Direction of a rotate or zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Increase,
    Decrease,
}

impl Sweep {
    fn sign(self) -> f32 {
        match self {
            Self::Increase => 1.0,
            Self::Decrease => -1.0,
        }
    }
}

/// Camera orbiting a fixed target on a sphere.
///
/// State is (radius, yaw, pitch) in world units and degrees. The eye position
/// is derived from it after every change and never set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    up: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    position: Vec3,
    /// Degrees per second.
    pub rotation_speed: f32,
    /// World units per second.
    pub zoom_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

impl OrbitCamera {
    /// Orbit the origin at `radius` (clamped), starting at yaw -45, pitch 30.
    pub fn new(radius: f32) -> Self {
        Self::looking_at(Vec3::ZERO, radius)
    }

    pub fn looking_at(target: Vec3, radius: f32) -> Self {
        let mut camera = Self {
            target,
            up: Vec3::Y,
            radius: radius.clamp(MIN_RADIUS, MAX_RADIUS),
            yaw: INITIAL_YAW,
            pitch: INITIAL_PITCH,
            position: target,
            rotation_speed: 50.0,
            zoom_speed: 2.0,
        };
        camera.update_position();
        camera
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new(config.radius);
        camera.rotation_speed = config.rotation_speed;
        camera.zoom_speed = config.zoom_speed;
        camera
    }

    pub fn rotate_horizontal(&mut self, sweep: Sweep, dt: f32) {
        self.yaw += sweep.sign() * self.rotation_speed * dt;
        self.update_position();
    }

    pub fn rotate_vertical(&mut self, sweep: Sweep, dt: f32) {
        self.pitch = (self.pitch + sweep.sign() * self.rotation_speed * dt)
            .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_position();
    }

    /// `Sweep::Increase` moves away from the target.
    pub fn zoom(&mut self, sweep: Sweep, dt: f32) {
        self.radius =
            (self.radius + sweep.sign() * self.zoom_speed * dt).clamp(MIN_RADIUS, MAX_RADIUS);
        self.update_position();
    }

    /// Apply one held input action for a frame of length `dt`.
    pub fn apply(&mut self, action: CameraAction, dt: f32) {
        match action {
            CameraAction::RotateLeft => self.rotate_horizontal(Sweep::Increase, dt),
            CameraAction::RotateRight => self.rotate_horizontal(Sweep::Decrease, dt),
            CameraAction::RotateUp => self.rotate_vertical(Sweep::Increase, dt),
            CameraAction::RotateDown => self.rotate_vertical(Sweep::Decrease, dt),
            CameraAction::ZoomIn => self.zoom(Sweep::Decrease, dt),
            CameraAction::ZoomOut => self.zoom(Sweep::Increase, dt),
        }
    }

    /// Right-handed view matrix looking from the eye at the target.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Degrees, unbounded.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Degrees, within [-89, 89].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    fn update_position(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let offset = Vec3::new(
            self.radius * pitch.cos() * yaw.cos(),
            self.radius * pitch.sin(),
            self.radius * pitch.cos() * yaw.sin(),
        );
        self.position = self.target + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn assert_on_sphere(camera: &OrbitCamera) {
        let distance = camera.position().distance(camera.target());
        assert!(
            (distance - camera.radius()).abs() < EPS,
            "distance {distance} vs radius {}",
            camera.radius()
        );
        assert!((-PITCH_LIMIT..=PITCH_LIMIT).contains(&camera.pitch()));
        assert!((MIN_RADIUS..=MAX_RADIUS).contains(&camera.radius()));
    }

    #[test]
    fn initial_position_for_radius_15() {
        let camera = OrbitCamera::new(15.0);
        assert_eq!(camera.yaw(), -45.0);
        assert_eq!(camera.pitch(), 30.0);

        let (yaw, pitch) = ((-45.0f32).to_radians(), 30.0f32.to_radians());
        let expected = 15.0
            * Vec3::new(
                pitch.cos() * yaw.cos(),
                pitch.sin(),
                pitch.cos() * yaw.sin(),
            );
        assert!((camera.position() - expected).abs().max_element() < EPS);
        assert_on_sphere(&camera);
    }

    #[test]
    fn default_orbits_the_origin_at_radius_5() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.radius(), 5.0);
        assert_eq!(camera.target(), Vec3::ZERO);
        assert_eq!(camera.up(), Vec3::Y);
    }

    #[test]
    fn constructor_clamps_radius() {
        assert_eq!(OrbitCamera::new(0.2).radius(), MIN_RADIUS);
        assert_eq!(OrbitCamera::new(50.0).radius(), MAX_RADIUS);
    }

    #[test]
    fn from_config_takes_radius_and_speeds() {
        let config = CameraConfig {
            radius: 12.0,
            rotation_speed: 90.0,
            zoom_speed: 4.0,
            ..CameraConfig::default()
        };
        let camera = OrbitCamera::from_config(&config);
        assert_eq!(camera.radius(), 12.0);
        assert_eq!(camera.rotation_speed, 90.0);
        assert_eq!(camera.zoom_speed, 4.0);
    }

    #[test]
    fn zoom_out_stops_exactly_at_max_radius() {
        let mut camera = OrbitCamera::new(15.0);
        for _ in 0..100 {
            camera.apply(CameraAction::ZoomOut, 0.1);
        }
        assert_eq!(camera.radius(), MAX_RADIUS);
        assert_on_sphere(&camera);
    }

    #[test]
    fn zoom_in_stops_exactly_at_min_radius() {
        let mut camera = OrbitCamera::new(3.0);
        for _ in 0..100 {
            camera.zoom(Sweep::Decrease, 0.25);
        }
        assert_eq!(camera.radius(), MIN_RADIUS);
    }

    #[test]
    fn pitch_is_clamped_at_both_poles() {
        let mut camera = OrbitCamera::new(10.0);
        for _ in 0..50 {
            camera.apply(CameraAction::RotateUp, 0.1);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        for _ in 0..100 {
            camera.apply(CameraAction::RotateDown, 0.1);
        }
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_on_sphere(&camera);
    }

    #[test]
    fn yaw_is_unbounded_and_periodic() {
        let mut camera = OrbitCamera::new(8.0);
        camera.rotation_speed = 360.0;
        let start = camera.position();
        camera.apply(CameraAction::RotateLeft, 1.0);
        assert_eq!(camera.yaw(), 315.0);
        assert!((camera.position() - start).abs().max_element() < EPS);
    }

    #[test]
    fn actions_move_in_the_documented_direction() {
        let mut camera = OrbitCamera::new(10.0);
        camera.apply(CameraAction::RotateLeft, 0.1);
        assert!(camera.yaw() > -45.0);
        camera.apply(CameraAction::RotateRight, 0.2);
        assert!(camera.yaw() < -45.0);
        camera.apply(CameraAction::RotateDown, 0.1);
        assert!(camera.pitch() < 30.0);
        camera.apply(CameraAction::ZoomIn, 0.5);
        assert_eq!(camera.radius(), 9.0);
    }

    #[test]
    fn mixed_sequence_keeps_eye_on_sphere() {
        let mut camera = OrbitCamera::looking_at(Vec3::new(1.0, 0.5, -2.0), 6.0);
        for step in 0..400 {
            let action = CameraAction::ALL[(step * 7 + step / 3) % CameraAction::ALL.len()];
            camera.apply(action, 0.016 * (1 + step % 5) as f32);
            assert_on_sphere(&camera);
        }
    }

    #[test]
    fn view_matrix_puts_target_straight_ahead() {
        let camera = OrbitCamera::new(15.0);
        let view = camera.view_matrix();
        let eye = view.transform_point3(camera.position());
        let target = view.transform_point3(camera.target());
        assert!(eye.abs().max_element() < EPS);
        assert!((target - Vec3::new(0.0, 0.0, -15.0)).abs().max_element() < EPS);
    }
}
