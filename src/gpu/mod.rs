//! GPU-facing modules: the shader backend seam, the glow-backed device,
//! the shader program lifecycle, and the window/context/geometry/texture
//! glue around them.

/// Narrow backend trait covering the shader program lifecycle.
pub mod api;
/// Window and OpenGL context creation over glutin + winit.
pub mod context;
/// glow-backed implementation of the backend trait.
pub mod device;
/// Cube vertex data and buffer upload.
pub mod mesh;
/// Shader program compile/link/uniform lifecycle.
pub mod program;
/// Texture decoding and upload.
pub mod texture;

pub use api::{ShaderApi, ShaderStage, UniformStatus};
pub use context::{ContextError, WindowContext};
pub use device::GlDevice;
pub use mesh::{CubeMesh, MeshError};
pub use program::{ShaderError, ShaderProgram};
pub use texture::{Texture, TextureError};
