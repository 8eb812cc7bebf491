use serde::{Deserialize, Serialize};

/// Window creation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    /// Logical window width in pixels.
    pub width: u32,
    /// Logical window height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Synchronize buffer swaps to the display refresh.
    pub vsync: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Cubewalk".to_owned(),
            vsync: true,
        }
    }
}
