use glam::{Mat4, Vec3};

const DEFAULT_DISTANCE: f32 = 5.0;
const PITCH_LIMIT: f32 = 1.553; // just short of +/- 90 degrees

/// Orbit camera with damped rotate, zoom, and pan.
///
/// User input moves goal values; [`OrbitCamera::update`] eases the live
/// values toward the goals by the damping factor once per render tick.
/// Default framing puts the eye at (0, 0, 5) looking at the origin.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    target_goal: Vec3,
    yaw_goal: f32,
    pitch_goal: f32,
    distance_goal: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub damping: f32,
    pub rotate_sensitivity: f32,
    pub pan_sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // yaw pi/2 with pitch 0 places the eye on +Z.
        let yaw = std::f32::consts::FRAC_PI_2;
        Self {
            target: Vec3::ZERO,
            yaw,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
            target_goal: Vec3::ZERO,
            yaw_goal: yaw,
            pitch_goal: 0.0,
            distance_goal: DEFAULT_DISTANCE,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
            rotate_sensitivity: 0.005,
            pan_sensitivity: 0.001,
        }
    }
}

impl OrbitCamera {
    /// Unit vector from target toward the eye.
    fn orbit_dir(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.orbit_dir() * self.distance
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Orbit around the target by a mouse delta.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_goal += dx * self.rotate_sensitivity;
        self.pitch_goal =
            (self.pitch_goal + dy * self.rotate_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Zoom by scroll steps; positive steps move closer.
    pub fn zoom(&mut self, steps: f32) {
        self.distance_goal = (self.distance_goal * (1.0 - steps * 0.1)).clamp(0.5, 100.0);
    }

    /// Pan the orbit target in the view plane.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.pan_sensitivity * self.distance;
        self.target_goal += self.right() * (-dx * scale) + self.up() * (dy * scale);
    }

    /// Ease live values toward the goals. Call once per render tick
    /// before drawing; otherwise input appears to snap.
    pub fn update(&mut self) {
        let d = self.damping;
        self.yaw += (self.yaw_goal - self.yaw) * d;
        self.pitch += (self.pitch_goal - self.pitch) * d;
        self.distance += (self.distance_goal - self.distance) * d;
        self.target += (self.target_goal - self.target) * d;
    }

    /// Snap back to the default framing (eye at (0, 0, 5), origin target).
    pub fn reset(&mut self) {
        let aspect = self.aspect;
        *self = Self {
            aspect,
            ..Self::default()
        };
    }

    /// Recompute the aspect ratio from a surface size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn default_framing_is_front_view() {
        let cam = OrbitCamera::default();
        assert_vec_close(cam.eye(), Vec3::new(0.0, 0.0, 5.0));
        assert_vec_close(cam.target, Vec3::ZERO);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn update_damps_toward_goal() {
        let mut cam = OrbitCamera::default();
        cam.rotate(100.0, 0.0);
        let goal = cam.yaw_goal;
        let before = cam.yaw;
        cam.update();
        // One tick moves 5% of the way, not all of it.
        assert!(cam.yaw > before);
        assert!(cam.yaw < goal);
        let expected = before + (goal - before) * 0.05;
        assert!((cam.yaw - expected).abs() < 1e-6);
    }

    #[test]
    fn update_converges() {
        let mut cam = OrbitCamera::default();
        cam.rotate(200.0, -50.0);
        cam.zoom(2.0);
        for _ in 0..1000 {
            cam.update();
        }
        assert!((cam.yaw - cam.yaw_goal).abs() < 1e-3);
        assert!((cam.pitch - cam.pitch_goal).abs() < 1e-3);
        assert!((cam.distance - cam.distance_goal).abs() < 1e-3);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        assert!(cam.pitch_goal <= PITCH_LIMIT);
        cam.rotate(0.0, -1e7);
        assert!(cam.pitch_goal >= -PITCH_LIMIT);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        for _ in 0..200 {
            cam.zoom(5.0);
        }
        assert!(cam.distance_goal >= 0.5);
        for _ in 0..200 {
            cam.zoom(-5.0);
        }
        assert!(cam.distance_goal <= 100.0);
    }

    #[test]
    fn reset_restores_default_framing() {
        let mut cam = OrbitCamera::default();
        cam.set_viewport(800, 600);
        cam.rotate(300.0, 80.0);
        cam.zoom(3.0);
        cam.pan(50.0, 20.0);
        for _ in 0..10 {
            cam.update();
        }
        cam.reset();
        assert_vec_close(cam.eye(), Vec3::new(0.0, 0.0, 5.0));
        assert_vec_close(cam.target, Vec3::ZERO);
        // Reset restores framing, not the viewport shape.
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_sets_aspect() {
        // Scenario D: resize from 800x600 to 400x600 changes the aspect.
        let mut cam = OrbitCamera::default();
        cam.set_viewport(800, 600);
        assert!((cam.aspect - 4.0 / 3.0).abs() < 1e-6);
        cam.set_viewport(400, 600);
        assert!((cam.aspect - 400.0 / 600.0).abs() < 1e-6);
        // Degenerate sizes never divide by zero.
        cam.set_viewport(100, 0);
        assert!(cam.aspect.is_finite());
    }

    #[test]
    fn pan_moves_target() {
        let mut cam = OrbitCamera::default();
        cam.pan(100.0, 0.0);
        for _ in 0..500 {
            cam.update();
        }
        assert!(cam.target.x.abs() > 0.0);
        // Panning from the default front view stays in the view plane.
        assert!(cam.target.z.abs() < 1e-4);
    }
}
