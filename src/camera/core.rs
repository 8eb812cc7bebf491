use glam::{Mat4, Vec3};

/// Discrete movement directions fed to [`Camera::process_keyboard`].
///
/// One call per held key per frame; simultaneous directions are expressed
/// as multiple calls, not a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Toward the horizontal projection of the view direction.
    Forward,
    /// Away from the horizontal projection of the view direction.
    Backward,
    /// Along the negative horizontal right vector (strafe left).
    Left,
    /// Along the horizontal right vector (strafe right).
    Right,
    /// Along world +Y.
    Up,
    /// Along world -Y.
    Down,
}

impl MoveDirection {
    /// All six directions, for iteration over held-key state.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// Stable index of this direction within [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Up => 4,
            Self::Down => 5,
        }
    }
}

/// First-person camera over continuous (position, yaw, pitch, zoom) state.
///
/// The front/right/up basis is derived from yaw and pitch and recomputed
/// on every orientation change; it is never stored stale and cannot be
/// set directly. Pitch is clamped to ±[`Camera::PITCH_LIMIT`] degrees when
/// constrained, zoom to [[`Camera::MIN_ZOOM`], [`Camera::MAX_ZOOM`]].
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Default yaw in degrees (looking down -Z).
    pub const DEFAULT_YAW: f32 = -90.0;
    /// Default pitch in degrees (level).
    pub const DEFAULT_PITCH: f32 = 0.0;
    /// Default movement speed in world units per second.
    pub const DEFAULT_SPEED: f32 = 2.5;
    /// Default mouse sensitivity in degrees per pixel of offset.
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    /// Default zoom (vertical field of view) in degrees.
    pub const DEFAULT_ZOOM: f32 = 45.0;
    /// Pitch clamp magnitude in degrees; stops short of the poles so the
    /// basis never degenerates against world-up.
    pub const PITCH_LIMIT: f32 = 89.0;
    /// Narrowest zoom in degrees.
    pub const MIN_ZOOM: f32 = 1.0;
    /// Widest zoom in degrees.
    pub const MAX_ZOOM: f32 = 45.0;

    /// Create a camera at `position` with the given fixed world-up axis
    /// and initial yaw/pitch in degrees.
    ///
    /// The basis is computed immediately; a fresh camera never has a
    /// stale or zero basis.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            speed: Self::DEFAULT_SPEED,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            zoom: Self::DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    /// Recompute front/right/up from yaw and pitch.
    ///
    /// Order matters: right depends on front, up depends on right.
    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Translate the camera for one held direction over `dt` seconds.
    ///
    /// Forward/backward and left/right move along the *horizontal*
    /// projection of front and right (Y zeroed, not renormalized), so
    /// walking never changes altitude even while pitched; up/down move
    /// purely along world Y. Orientation is untouched.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            MoveDirection::Forward => {
                self.position +=
                    Vec3::new(self.front.x, 0.0, self.front.z) * velocity;
            }
            MoveDirection::Backward => {
                self.position -=
                    Vec3::new(self.front.x, 0.0, self.front.z) * velocity;
            }
            MoveDirection::Left => {
                self.position -=
                    Vec3::new(self.right.x, 0.0, self.right.z) * velocity;
            }
            MoveDirection::Right => {
                self.position +=
                    Vec3::new(self.right.x, 0.0, self.right.z) * velocity;
            }
            MoveDirection::Up => {
                self.position.y += self.up.y * velocity;
            }
            MoveDirection::Down => {
                self.position.y -= self.up.y * velocity;
            }
        }
    }

    /// Apply a mouse-look offset in pixels.
    ///
    /// Offsets are scaled by the sensitivity and added to yaw/pitch. When
    /// `constrain_pitch` is set the pitch is clamped *before* the basis
    /// is recomputed, so the basis never reflects an out-of-range pitch.
    pub fn process_mouse_movement(
        &mut self,
        xoffset: f32,
        yoffset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += xoffset * self.sensitivity;
        self.pitch += yoffset * self.sensitivity;
        if constrain_pitch {
            self.pitch =
                self.pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        }
        self.update_basis();
    }

    /// Narrow or widen the zoom from a scroll offset, clamped to
    /// [[`Self::MIN_ZOOM`], [`Self::MAX_ZOOM`]].
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom =
            (self.zoom - yoffset).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Look-at view matrix from the current position along front.
    ///
    /// Pure function of the current state; repeated calls without an
    /// intervening mutation return bit-identical results.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Current world-space position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current unit view direction.
    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    /// Current unit right vector.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.right
    }

    /// Current unit up vector.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.up
    }

    /// Current yaw in degrees.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current zoom (vertical field of view) in degrees, for the caller's
    /// projection-matrix construction.
    #[must_use]
    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the movement speed in world units per second.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Set the mouse sensitivity in degrees per pixel of offset.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Set the zoom directly, clamped to the valid range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec3::ZERO,
            Vec3::Y,
            Self::DEFAULT_YAW,
            Self::DEFAULT_PITCH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_unit(v: Vec3, label: &str) {
        assert!(
            (v.length() - 1.0).abs() < EPS,
            "{label} not unit length: {v:?}"
        );
    }

    #[test]
    fn fresh_camera_has_valid_basis() {
        let cam = Camera::default();
        assert_unit(cam.front(), "front");
        assert_unit(cam.right(), "right");
        assert_unit(cam.up(), "up");
        // Default yaw of -90° looks down -Z.
        assert!((cam.front() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn basis_stays_orthonormal_over_yaw_pitch_grid() {
        let mut cam = Camera::default();
        for yaw_step in -6..=6 {
            for pitch_step in -8..=8 {
                cam.yaw = yaw_step as f32 * 30.0;
                cam.pitch = pitch_step as f32 * 11.0;
                cam.update_basis();

                assert_unit(cam.front(), "front");
                assert_unit(cam.right(), "right");
                assert_unit(cam.up(), "up");
                assert!(cam.front().dot(cam.right()).abs() < EPS);
                assert!(cam.front().dot(cam.up()).abs() < EPS);
                assert!(cam.right().dot(cam.up()).abs() < EPS);
            }
        }
    }

    #[test]
    fn basis_is_right_handed() {
        let cam = Camera::default();
        // For this basis front x up lands exactly on right.
        let cross = cam.front().cross(cam.up());
        assert!((cross - cam.right()).length() < EPS);
    }

    #[test]
    fn pitch_clamp_is_idempotent_at_the_limit() {
        let mut cam = Camera::default();
        for _ in 0..5 {
            cam.process_mouse_movement(0.0, 1000.0, true);
            assert_eq!(cam.pitch(), Camera::PITCH_LIMIT);
        }
        for _ in 0..5 {
            cam.process_mouse_movement(0.0, -10_000.0, true);
            assert_eq!(cam.pitch(), -Camera::PITCH_LIMIT);
        }
    }

    #[test]
    fn unconstrained_pitch_is_not_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 2000.0, false);
        assert!(cam.pitch() > Camera::PITCH_LIMIT);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut cam = Camera::default();
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom(), Camera::MIN_ZOOM);
        cam.process_mouse_scroll(-100.0);
        assert_eq!(cam.zoom(), Camera::MAX_ZOOM);
    }

    #[test]
    fn forward_displacement_scales_linearly_with_dt() {
        let base = Camera::default();

        let mut short = base.clone();
        short.process_keyboard(MoveDirection::Forward, 0.01);
        let short_step = (short.position() - base.position()).length();

        let mut long = base.clone();
        long.process_keyboard(MoveDirection::Forward, 0.04);
        let long_step = (long.position() - base.position()).length();

        assert!((long_step - 4.0 * short_step).abs() < EPS);
    }

    #[test]
    fn walking_stays_horizontal_even_when_pitched() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 450.0, true);
        assert!(cam.pitch() > 0.0);

        let y_before = cam.position().y;
        cam.process_keyboard(MoveDirection::Forward, 0.25);
        cam.process_keyboard(MoveDirection::Left, 0.25);
        assert_eq!(cam.position().y, y_before);
    }

    #[test]
    fn vertical_movement_uses_world_y_only() {
        let mut cam = Camera::default();
        let before = cam.position();
        cam.process_keyboard(MoveDirection::Up, 1.0);
        let delta = cam.position() - before;
        assert_eq!(delta.x, 0.0);
        assert_eq!(delta.z, 0.0);
        assert!(delta.y > 0.0);
    }

    #[test]
    fn keyboard_movement_does_not_touch_orientation() {
        let mut cam = Camera::default();
        let front = cam.front();
        let yaw = cam.yaw();
        cam.process_keyboard(MoveDirection::Forward, 1.0);
        cam.process_keyboard(MoveDirection::Up, 1.0);
        assert_eq!(cam.front(), front);
        assert_eq!(cam.yaw(), yaw);
    }

    #[test]
    fn view_matrix_is_bit_stable_without_mutation() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(123.0, -45.0, true);
        let a = cam.view_matrix().to_cols_array().map(f32::to_bits);
        let b = cam.view_matrix().to_cols_array().map(f32::to_bits);
        assert_eq!(a, b);
    }

    #[test]
    fn mouse_movement_scales_with_sensitivity() {
        let mut cam = Camera::default();
        cam.set_sensitivity(0.5);
        cam.process_mouse_movement(10.0, 0.0, true);
        assert_eq!(cam.yaw(), Camera::DEFAULT_YAW + 5.0);
    }
}
