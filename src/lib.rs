// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics code casts between integer widths at the GL boundary and
// compares floats against exact constants; these pedantic lints fight
// that constantly.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

//! Real-time demo that renders a small field of textured, spinning cubes
//! under a first-person camera, on an OpenGL 3.3 core context.
//!
//! The two load-bearing pieces are [`gpu::ShaderProgram`], which owns the
//! compile/link/uniform lifecycle of a GPU program behind the narrow
//! [`gpu::ShaderApi`] seam, and [`camera::Camera`], which turns
//! keyboard/mouse/scroll input into an orthonormal view basis. Everything
//! else (window and context creation, geometry upload, texture loading,
//! the frame loop) is deliberately thin glue around those two.
//!
//! # Key entry points
//!
//! - [`Viewer`] - opens the window and runs the frame loop
//! - [`camera::Camera`] - first-person camera model
//! - [`gpu::ShaderProgram`] - shader program lifecycle and uniforms
//! - [`options::Options`] - runtime configuration (window, camera, scene)

pub mod camera;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod scene;
pub mod viewer;

pub use camera::{Camera, MoveDirection};
pub use error::CubewalkError;
pub use gpu::ShaderProgram;
pub use options::Options;
pub use viewer::Viewer;
