//! Centralized runtime options with TOML file support.
//!
//! All tweakable settings (window, camera tuning, scene content paths
//! and colors) are consolidated here. Options serialize to/from TOML;
//! every sub-struct uses `#[serde(default)]` so partial files (e.g. only
//! overriding `[camera]`) work correctly.

mod camera;
mod scene;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::CubewalkError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size, title, and vsync.
    pub window: WindowOptions,
    /// Camera movement and look tuning.
    pub camera: CameraOptions,
    /// Scene content: colors, spin rate, asset paths.
    pub scene: SceneOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CubewalkError> {
        let content =
            std::fs::read_to_string(path).map_err(CubewalkError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CubewalkError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CubewalkError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubewalkError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubewalkError::Io)?;
        }
        std::fs::write(path, content).map_err(CubewalkError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_file_keeps_defaults_elsewhere() {
        let parsed: Options = toml::from_str(
            "[window]\nwidth = 1280\nheight = 720\n",
        )
        .unwrap();
        assert_eq!(parsed.window.width, 1280);
        assert_eq!(parsed.window.height, 720);
        assert_eq!(parsed.window.title, WindowOptions::default().title);
        assert_eq!(parsed.camera, CameraOptions::default());
        assert_eq!(parsed.scene, SceneOptions::default());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
