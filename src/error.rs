//! Crate-level error types.

use std::fmt;

use crate::gpu::context::ContextError;
use crate::gpu::mesh::MeshError;
use crate::gpu::program::ShaderError;
use crate::gpu::texture::TextureError;

/// Errors produced by the cubewalk crate.
#[derive(Debug)]
pub enum CubewalkError {
    /// Shader compilation, linking, or source read failure.
    Shader(ShaderError),
    /// Window or GL context creation failure.
    Context(ContextError),
    /// Cube geometry upload failure.
    Mesh(MeshError),
    /// Texture decode or upload failure.
    Texture(TextureError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for CubewalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shader(e) => write!(f, "shader error: {e}"),
            Self::Context(e) => write!(f, "context error: {e}"),
            Self::Mesh(e) => write!(f, "mesh error: {e}"),
            Self::Texture(e) => write!(f, "texture error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for CubewalkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shader(e) => Some(e),
            Self::Context(e) => Some(e),
            Self::Mesh(e) => Some(e),
            Self::Texture(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<ShaderError> for CubewalkError {
    fn from(e: ShaderError) -> Self {
        Self::Shader(e)
    }
}

impl From<ContextError> for CubewalkError {
    fn from(e: ContextError) -> Self {
        Self::Context(e)
    }
}

impl From<MeshError> for CubewalkError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}

impl From<TextureError> for CubewalkError {
    fn from(e: TextureError) -> Self {
        Self::Texture(e)
    }
}

impl From<std::io::Error> for CubewalkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
