//! Shader program lifecycle: compile, link, bind, uniform writes, delete.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::gpu::api::{ShaderApi, ShaderStage, UniformStatus};

/// Errors from shader program construction.
///
/// All variants are fatal to construction: there is no partial or
/// degraded program, and nothing is leaked on the failure paths.
#[derive(Debug)]
pub enum ShaderError {
    /// A stage failed to compile; carries the stage tag and the trimmed
    /// driver log.
    Compile {
        /// Which stage failed.
        stage: ShaderStage,
        /// Compiler diagnostic log, trimmed of trailing padding.
        log: String,
    },
    /// Both stages compiled but the program failed to link.
    Link {
        /// Linker diagnostic log, trimmed of trailing padding.
        log: String,
    },
    /// The backend refused to allocate a shader or program object.
    Allocate(String),
    /// A shader source file could not be read.
    Source {
        /// Which stage the file was for.
        stage: ShaderStage,
        /// The path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed:\n{log}")
            }
            Self::Link { log } => {
                write!(f, "shader program linking failed:\n{log}")
            }
            Self::Allocate(msg) => {
                write!(f, "shader object allocation failed: {msg}")
            }
            Self::Source { stage, path, source } => write!(
                f,
                "failed to read {stage} shader source {}: {source}",
                path.display()
            ),
        }
    }
}

impl Error for ShaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Strip the trailing NUL padding and whitespace some drivers append to
/// their info logs.
fn trim_log(log: &str) -> String {
    log.trim_end_matches(['\0', '\n', '\r', ' ']).to_owned()
}

/// Compile one stage, deleting the shader object on failure.
fn compile_stage<A: ShaderApi>(
    api: &A,
    stage: ShaderStage,
    source: &str,
) -> Result<A::Shader, ShaderError> {
    let shader = api.create_shader(stage).map_err(ShaderError::Allocate)?;
    api.shader_source(shader, source);
    api.compile_shader(shader);
    if api.compile_succeeded(shader) {
        Ok(shader)
    } else {
        let log = trim_log(&api.shader_log(shader));
        api.delete_shader(shader);
        Err(ShaderError::Compile { stage, log })
    }
}

/// A linked GPU shader program and its uniform-location cache.
///
/// The wrapped handle is valid for the whole life of the value:
/// construction either fully succeeds or returns an error, and the only
/// release path is [`delete`](Self::delete), which consumes the value.
/// The backend is passed into every operation rather than stored, so a
/// program never outlives or hides the context it was created on.
pub struct ShaderProgram<A: ShaderApi> {
    program: A::Program,
    // Negative lookups are cached too: a name the program does not
    // export costs one backend query ever, then stays a cheap no-op.
    locations: FxHashMap<String, Option<A::Uniform>>,
}

impl<A: ShaderApi> ShaderProgram<A> {
    /// Compile both stages and link them into a program.
    ///
    /// The vertex stage is compiled first; a vertex failure is reported
    /// without touching the fragment source. The intermediate stage
    /// objects are detached and deleted as soon as the program is linked,
    /// and every failure path deletes whatever objects it created.
    pub fn from_sources(
        api: &A,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, ShaderError> {
        let vertex = compile_stage(api, ShaderStage::Vertex, vertex_src)?;
        let fragment =
            match compile_stage(api, ShaderStage::Fragment, fragment_src) {
                Ok(shader) => shader,
                Err(err) => {
                    api.delete_shader(vertex);
                    return Err(err);
                }
            };

        let program = match api.create_program() {
            Ok(program) => program,
            Err(msg) => {
                api.delete_shader(vertex);
                api.delete_shader(fragment);
                return Err(ShaderError::Allocate(msg));
            }
        };

        api.attach_shader(program, vertex);
        api.attach_shader(program, fragment);
        api.link_program(program);

        // The stage objects are dead weight once linking has been
        // submitted, whatever the outcome.
        api.detach_shader(program, vertex);
        api.detach_shader(program, fragment);
        api.delete_shader(vertex);
        api.delete_shader(fragment);

        if !api.link_succeeded(program) {
            let log = trim_log(&api.program_log(program));
            api.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        log::debug!("shader program compiled and linked");
        Ok(Self {
            program,
            locations: FxHashMap::default(),
        })
    }

    /// Read the two stage sources from disk and construct.
    pub fn from_files(
        api: &A,
        vertex_path: &Path,
        fragment_path: &Path,
    ) -> Result<Self, ShaderError> {
        let read = |stage: ShaderStage, path: &Path| {
            std::fs::read_to_string(path).map_err(|source| {
                ShaderError::Source {
                    stage,
                    path: path.to_owned(),
                    source,
                }
            })
        };
        let vertex_src = read(ShaderStage::Vertex, vertex_path)?;
        let fragment_src = read(ShaderStage::Fragment, fragment_path)?;
        Self::from_sources(api, &vertex_src, &fragment_src)
    }

    /// Bind this program as current for subsequent draw calls.
    ///
    /// Global pipeline state; the render loop owns the call sequencing.
    pub fn bind(&self, api: &A) {
        api.use_program(self.program);
    }

    /// Resolve a uniform name through the per-program cache.
    fn location(&mut self, api: &A, name: &str) -> Option<A::Uniform> {
        if let Some(cached) = self.locations.get(name) {
            return cached.clone();
        }
        let location = api.uniform_location(self.program, name);
        let _ = self.locations.insert(name.to_owned(), location.clone());
        location
    }

    /// Write a boolean uniform (as 0/1).
    pub fn set_bool(
        &mut self,
        api: &A,
        name: &str,
        value: bool,
    ) -> UniformStatus {
        self.set_i32(api, name, i32::from(value))
    }

    /// Write an integer uniform.
    pub fn set_i32(
        &mut self,
        api: &A,
        name: &str,
        value: i32,
    ) -> UniformStatus {
        match self.location(api, name) {
            Some(location) => {
                api.set_uniform_i32(&location, value);
                UniformStatus::Applied
            }
            None => UniformStatus::Missing,
        }
    }

    /// Write a float uniform.
    pub fn set_f32(
        &mut self,
        api: &A,
        name: &str,
        value: f32,
    ) -> UniformStatus {
        match self.location(api, name) {
            Some(location) => {
                api.set_uniform_f32(&location, value);
                UniformStatus::Applied
            }
            None => UniformStatus::Missing,
        }
    }

    /// Write a 4x4 matrix uniform (column-major).
    pub fn set_mat4(
        &mut self,
        api: &A,
        name: &str,
        value: &Mat4,
    ) -> UniformStatus {
        match self.location(api, name) {
            Some(location) => {
                api.set_uniform_mat4(&location, value);
                UniformStatus::Applied
            }
            None => UniformStatus::Missing,
        }
    }

    /// Release the program handle.
    ///
    /// Consumes the value, so the release happens exactly once and no
    /// call can observe a deleted program.
    pub fn delete(self, api: &A) {
        api.delete_program(self.program);
    }
}
