//! Texture decoding and upload for the cube faces.
//!
//! Loads the configured image from disk, mipmapped and repeat-wrapped.
//! A missing file falls back
//! to a generated checkerboard so the demo runs without shipped binary
//! assets; a present-but-undecodable file is an error.

use std::path::{Path, PathBuf};

use glow::HasContext;

use crate::gpu::device::GlDevice;

/// Checkerboard fallback dimensions in pixels.
const FALLBACK_SIZE: u32 = 64;
/// Checkerboard square edge in pixels.
const FALLBACK_SQUARE: u32 = 8;

/// Errors from texture decode or upload.
#[derive(Debug)]
pub enum TextureError {
    /// The file exists but could not be decoded.
    Decode {
        /// The path that failed to decode.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },
    /// The backend refused to allocate a texture object.
    Allocate(String),
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { path, message } => write!(
                f,
                "failed to decode texture {}: {message}",
                path.display()
            ),
            Self::Allocate(msg) => {
                write!(f, "texture allocation failed: {msg}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

/// A 2D texture uploaded with mipmaps.
pub struct Texture {
    handle: glow::NativeTexture,
}

impl Texture {
    /// Load from `path`, or fall back to the generated checkerboard when
    /// the file does not exist.
    pub fn load_or_fallback(
        device: &GlDevice,
        path: &Path,
    ) -> Result<Self, TextureError> {
        if path.exists() {
            let decoded = image::open(path).map_err(|e| {
                TextureError::Decode {
                    path: path.to_owned(),
                    message: e.to_string(),
                }
            })?;
            let rgba = decoded.to_rgba8();
            Self::from_rgba8(device, rgba.width(), rgba.height(), &rgba)
        } else {
            log::warn!(
                "texture {} not found, using generated checkerboard",
                path.display()
            );
            let pixels = checkerboard();
            Self::from_rgba8(device, FALLBACK_SIZE, FALLBACK_SIZE, &pixels)
        }
    }

    /// Upload raw RGBA8 pixels and generate mipmaps.
    pub fn from_rgba8(
        device: &GlDevice,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<Self, TextureError> {
        let gl = device.raw();
        unsafe {
            let handle =
                gl.create_texture().map_err(TextureError::Allocate)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(handle));
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::REPEAT as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::REPEAT as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR_MIPMAP_LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);
            gl.bind_texture(glow::TEXTURE_2D, None);
            Ok(Self { handle })
        }
    }

    /// Bind to texture unit 0.
    pub fn bind(&self, device: &GlDevice) {
        let gl = device.raw();
        unsafe {
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.handle));
        }
    }

    /// Release the texture object.
    pub fn delete(self, device: &GlDevice) {
        unsafe { device.raw().delete_texture(self.handle) }
    }
}

/// Two-tone RGBA checkerboard used when no texture file is present.
fn checkerboard() -> Vec<u8> {
    let light = [205u8, 170, 125, 255];
    let dark = [90u8, 60, 40, 255];
    let mut pixels =
        Vec::with_capacity((FALLBACK_SIZE * FALLBACK_SIZE * 4) as usize);
    for y in 0..FALLBACK_SIZE {
        for x in 0..FALLBACK_SIZE {
            let even = ((x / FALLBACK_SQUARE) + (y / FALLBACK_SQUARE)) % 2
                == 0;
            pixels.extend_from_slice(if even { &light } else { &dark });
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_covers_the_full_fallback_area() {
        let pixels = checkerboard();
        assert_eq!(
            pixels.len(),
            (FALLBACK_SIZE * FALLBACK_SIZE * 4) as usize
        );
    }

    #[test]
    fn checkerboard_alternates_between_squares() {
        let pixels = checkerboard();
        let pixel = |x: u32, y: u32| {
            let offset = ((y * FALLBACK_SIZE + x) * 4) as usize;
            &pixels[offset..offset + 4]
        };
        // Opposite corners of adjacent squares differ; same square
        // matches.
        assert_eq!(pixel(0, 0), pixel(1, 1));
        assert_ne!(pixel(0, 0), pixel(FALLBACK_SQUARE, 0));
        assert_ne!(pixel(0, 0), pixel(0, FALLBACK_SQUARE));
        assert_eq!(
            pixel(0, 0),
            pixel(FALLBACK_SQUARE, FALLBACK_SQUARE)
        );
    }

    #[test]
    fn checkerboard_is_fully_opaque() {
        let pixels = checkerboard();
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}
