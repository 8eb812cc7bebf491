//! glow-backed implementation of [`ShaderApi`].

use glam::Mat4;
use glow::HasContext;

use crate::gpu::api::{ShaderApi, ShaderStage};

impl ShaderStage {
    /// GL enum for this stage.
    pub(crate) const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Owns the loaded [`glow::Context`] and exposes it through the
/// [`ShaderApi`] seam.
///
/// All GL entry points are `unsafe` at the glow level because they
/// require a current context on the calling thread; the surrounding
/// single-threaded frame discipline guarantees that, so each wrapper
/// confines the `unsafe` to one call.
pub struct GlDevice {
    gl: glow::Context,
}

impl GlDevice {
    /// Wrap a loaded glow context.
    #[must_use]
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Direct access to the underlying context, for the buffer/texture/
    /// draw glue that sits outside the [`ShaderApi`] seam.
    #[must_use]
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }
}

impl ShaderApi for GlDevice {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type Uniform = glow::NativeUniformLocation;

    fn create_shader(
        &self,
        stage: ShaderStage,
    ) -> Result<Self::Shader, String> {
        unsafe { self.gl.create_shader(stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn compile_succeeded(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn link_succeeded(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&self, program: Self::Program) {
        unsafe { self.gl.use_program(Some(program)) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::Uniform> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn set_uniform_i32(&self, location: &Self::Uniform, value: i32) {
        unsafe { self.gl.uniform_1_i32(Some(location), value) }
    }

    fn set_uniform_f32(&self, location: &Self::Uniform, value: f32) {
        unsafe { self.gl.uniform_1_f32(Some(location), value) }
    }

    fn set_uniform_mat4(&self, location: &Self::Uniform, value: &Mat4) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                Some(location),
                false,
                &value.to_cols_array(),
            );
        }
    }
}
