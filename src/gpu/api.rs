//! The backend seam for the shader program lifecycle.
//!
//! [`ShaderApi`] covers exactly the primitives
//! [`ShaderProgram`](crate::gpu::ShaderProgram) needs: shader object
//! create/source/compile/status/log, program create/attach/link/
//! status/log, deletion, binding, and uniform lookup/writes. The real
//! implementation is [`GlDevice`](crate::gpu::GlDevice); tests use a
//! recording mock with resource counters. Components receive the backend
//! explicitly; there is no ambient global context.

use std::fmt;

use glam::Mat4;

/// Identifies a pipeline stage for compilation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage.
    Vertex,
    /// Fragment stage.
    Fragment,
}

impl ShaderStage {
    /// Lowercase stage name for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a uniform write.
///
/// An unknown uniform name is a GPU-level no-op by design; it is surfaced
/// as [`Self::Missing`] so the caller can notice without the hot path ever
/// raising an error or allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Missing status means the uniform name does not exist in the program"]
pub enum UniformStatus {
    /// The value was written to the program's uniform.
    Applied,
    /// The name does not resolve to a location; nothing was written.
    Missing,
}

impl UniformStatus {
    /// `true` when the name did not resolve to a uniform location.
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Shader compile/link/uniform primitives of a GL-style backend.
///
/// Object creation can be refused by the backend (returning the driver's
/// message); compilation and linking report success separately from the
/// submission call, with a retrievable diagnostic log, matching the
/// poll-after-submit model of the underlying API.
pub trait ShaderApi {
    /// Opaque per-stage shader object handle.
    type Shader: Copy;
    /// Opaque linked program handle.
    type Program: Copy;
    /// Opaque uniform location.
    type Uniform: Clone;

    /// Allocate a shader object for `stage`.
    fn create_shader(&self, stage: ShaderStage)
        -> Result<Self::Shader, String>;
    /// Replace the source of a shader object.
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// Submit a shader object for compilation.
    fn compile_shader(&self, shader: Self::Shader);
    /// Poll the compile status of a shader object.
    fn compile_succeeded(&self, shader: Self::Shader) -> bool;
    /// Retrieve the compile diagnostic log (may carry trailing padding).
    fn shader_log(&self, shader: Self::Shader) -> String;
    /// Delete a shader object.
    fn delete_shader(&self, shader: Self::Shader);

    /// Allocate a program object.
    fn create_program(&self) -> Result<Self::Program, String>;
    /// Attach a compiled shader object to a program.
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Detach a shader object from a program.
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// Submit a program for linking.
    fn link_program(&self, program: Self::Program);
    /// Poll the link status of a program.
    fn link_succeeded(&self, program: Self::Program) -> bool;
    /// Retrieve the link diagnostic log (may carry trailing padding).
    fn program_log(&self, program: Self::Program) -> String;
    /// Delete a program object.
    fn delete_program(&self, program: Self::Program);
    /// Bind a program as current for subsequent draws.
    fn use_program(&self, program: Self::Program);

    /// Resolve a uniform name against `program` (independent of which
    /// program is currently bound). `None` for unknown names.
    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::Uniform>;
    /// Write an `i32` to a resolved location on the bound program.
    fn set_uniform_i32(&self, location: &Self::Uniform, value: i32);
    /// Write an `f32` to a resolved location on the bound program.
    fn set_uniform_f32(&self, location: &Self::Uniform, value: f32);
    /// Write a column-major 4x4 matrix to a resolved location on the
    /// bound program.
    fn set_uniform_mat4(&self, location: &Self::Uniform, value: &Mat4);
}
