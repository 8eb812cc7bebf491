use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Camera movement and look tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Mouse sensitivity in degrees per pixel of offset.
    pub sensitivity: f32,
    /// Initial vertical field of view in degrees.
    pub fov: f32,
    /// Clamp pitch short of the poles.
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            speed: Camera::DEFAULT_SPEED,
            sensitivity: Camera::DEFAULT_SENSITIVITY,
            fov: Camera::DEFAULT_ZOOM,
            constrain_pitch: true,
        }
    }
}
