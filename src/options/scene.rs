use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Scene content: background color, cube spin rate, and asset paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneOptions {
    /// Clear color as linear RGB.
    pub clear_color: [f32; 3],
    /// Cube spin rate in degrees per second.
    pub spin_speed: f32,
    /// Vertex shader source path.
    pub vertex_shader: PathBuf,
    /// Fragment shader source path.
    pub fragment_shader: PathBuf,
    /// Cube face texture path; a generated checkerboard is used when the
    /// file does not exist.
    pub texture: PathBuf,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3],
            spin_speed: 50.0,
            vertex_shader: PathBuf::from("assets/shaders/cube.vert"),
            fragment_shader: PathBuf::from("assets/shaders/cube.frag"),
            texture: PathBuf::from("assets/textures/container.jpg"),
        }
    }
}
