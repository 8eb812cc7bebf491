//! Per-frame input aggregation.
//!
//! winit delivers edge events; the camera wants held-state applied once
//! per frame. [`CameraInput`] records pressed movement keys, accumulates
//! raw mouse and scroll deltas between frames, and drains them into the
//! camera at frame time.

use winit::keyboard::KeyCode;

use crate::camera::{Camera, MoveDirection};

/// Map a physical key to a movement direction. Arrows alias WASD;
/// Space/Shift move vertically.
fn direction_for(code: KeyCode) -> Option<MoveDirection> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveDirection::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => {
            Some(MoveDirection::Backward)
        }
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveDirection::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveDirection::Right),
        KeyCode::Space => Some(MoveDirection::Up),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => {
            Some(MoveDirection::Down)
        }
        _ => None,
    }
}

/// Held-key state plus accumulated mouse/scroll deltas for one frame.
pub struct CameraInput {
    held: [bool; 6],
    mouse_dx: f32,
    mouse_dy: f32,
    scroll: f32,
    constrain_pitch: bool,
    exit_requested: bool,
}

impl CameraInput {
    /// Create an empty tracker.
    #[must_use]
    pub fn new(constrain_pitch: bool) -> Self {
        Self {
            held: [false; 6],
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            scroll: 0.0,
            constrain_pitch,
            exit_requested: false,
        }
    }

    /// Record a key press or release. Escape requests exit.
    pub fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        if code == KeyCode::Escape {
            if pressed {
                self.exit_requested = true;
            }
            return;
        }
        if let Some(direction) = direction_for(code) {
            self.held[direction.index()] = pressed;
        }
    }

    /// Accumulate a raw mouse motion delta (winit convention: y grows
    /// downward).
    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.mouse_dx += dx as f32;
        self.mouse_dy += dy as f32;
    }

    /// Accumulate a scroll delta in lines (positive = away from user).
    pub fn handle_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// `true` once Escape has been pressed.
    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Drain the accumulated input into the camera for a frame of `dt`
    /// seconds.
    ///
    /// One `process_keyboard` call per held direction; one mouse-look
    /// application with the accumulated deltas (y negated into the
    /// camera's y-up convention); one scroll application. Held keys
    /// persist across frames, deltas reset.
    pub fn apply(&mut self, camera: &mut Camera, dt: f32) {
        for direction in MoveDirection::ALL {
            if self.held[direction.index()] {
                camera.process_keyboard(direction, dt);
            }
        }
        if self.mouse_dx != 0.0 || self.mouse_dy != 0.0 {
            camera.process_mouse_movement(
                self.mouse_dx,
                -self.mouse_dy,
                self.constrain_pitch,
            );
            self.mouse_dx = 0.0;
            self.mouse_dy = 0.0;
        }
        if self.scroll != 0.0 {
            camera.process_mouse_scroll(self.scroll);
            self.scroll = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_key_moves_the_camera_each_frame() {
        let mut input = CameraInput::new(true);
        let mut camera = Camera::default();
        let start = camera.position();

        input.handle_key(KeyCode::KeyW, true);
        input.apply(&mut camera, 0.1);
        let after_one = camera.position();
        input.apply(&mut camera, 0.1);

        assert_ne!(after_one, start);
        assert_ne!(camera.position(), after_one);
    }

    #[test]
    fn released_key_stops_movement() {
        let mut input = CameraInput::new(true);
        let mut camera = Camera::default();

        input.handle_key(KeyCode::KeyD, true);
        input.handle_key(KeyCode::KeyD, false);
        let before = camera.position();
        input.apply(&mut camera, 0.1);
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn arrows_alias_wasd() {
        let mut by_key = CameraInput::new(true);
        let mut by_arrow = CameraInput::new(true);
        let mut cam_a = Camera::default();
        let mut cam_b = Camera::default();

        by_key.handle_key(KeyCode::KeyA, true);
        by_arrow.handle_key(KeyCode::ArrowLeft, true);
        by_key.apply(&mut cam_a, 0.2);
        by_arrow.apply(&mut cam_b, 0.2);

        assert_eq!(cam_a.position(), cam_b.position());
    }

    #[test]
    fn mouse_deltas_drain_after_apply() {
        let mut input = CameraInput::new(true);
        let mut camera = Camera::default();

        input.handle_mouse_motion(40.0, 0.0);
        input.apply(&mut camera, 0.016);
        let yaw_after_first = camera.yaw();

        input.apply(&mut camera, 0.016);
        assert_eq!(camera.yaw(), yaw_after_first);
    }

    #[test]
    fn downward_mouse_motion_pitches_down() {
        let mut input = CameraInput::new(true);
        let mut camera = Camera::default();

        input.handle_mouse_motion(0.0, 50.0);
        input.apply(&mut camera, 0.016);
        assert!(camera.pitch() < 0.0);
    }

    #[test]
    fn escape_requests_exit_and_is_sticky() {
        let mut input = CameraInput::new(true);
        assert!(!input.exit_requested());
        input.handle_key(KeyCode::Escape, true);
        input.handle_key(KeyCode::Escape, false);
        assert!(input.exit_requested());
    }

    #[test]
    fn scroll_zooms_once_per_frame() {
        let mut input = CameraInput::new(true);
        let mut camera = Camera::default();

        input.handle_scroll(2.0);
        input.handle_scroll(3.0);
        input.apply(&mut camera, 0.016);
        assert_eq!(camera.zoom(), 40.0);

        input.apply(&mut camera, 0.016);
        assert_eq!(camera.zoom(), 40.0);
    }
}
