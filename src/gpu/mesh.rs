//! Cube geometry: an interleaved position+uv vertex table and its
//! VAO/VBO upload.

use glow::HasContext;

use crate::gpu::device::GlDevice;

/// Vertices per cube (6 faces, 2 triangles each, no index buffer).
pub const CUBE_VERTEX_COUNT: i32 = 36;

/// Floats per vertex: xyz position + uv.
const FLOATS_PER_VERTEX: usize = 5;

/// Byte stride of one vertex.
const VERTEX_STRIDE: i32 = (FLOATS_PER_VERTEX * 4) as i32;

/// Unit cube centered on the origin, wound per face, with per-face
/// texture coordinates.
#[rustfmt::skip]
const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT as usize * FLOATS_PER_VERTEX] = [
    // back face
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,
    // front face
    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    // left face
    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,
    // right face
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    // bottom face
    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    // top face
    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

/// VAO/VBO allocation failure, carrying the driver's message.
#[derive(Debug)]
pub struct MeshError(pub(crate) String);

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cube mesh allocation failed: {}", self.0)
    }
}

impl std::error::Error for MeshError {}

/// The uploaded cube: one VAO and one static VBO.
pub struct CubeMesh {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
}

impl CubeMesh {
    /// Upload the cube vertex table and record the attribute layout:
    /// location 0 = vec3 position, location 1 = vec2 uv.
    pub fn upload(device: &GlDevice) -> Result<Self, MeshError> {
        let gl = device.raw();
        unsafe {
            let vao = gl.create_vertex_array().map_err(MeshError)?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(msg) => {
                    gl.delete_vertex_array(vao);
                    return Err(MeshError(msg));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&CUBE_VERTICES),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                0,
            );
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(
                1,
                2,
                glow::FLOAT,
                false,
                VERTEX_STRIDE,
                12,
            );
            gl.enable_vertex_attrib_array(1);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self { vao, vbo })
        }
    }

    /// Bind the VAO for drawing.
    pub fn bind(&self, device: &GlDevice) {
        unsafe { device.raw().bind_vertex_array(Some(self.vao)) }
    }

    /// Draw the 36 cube vertices. The VAO must be bound.
    pub fn draw(&self, device: &GlDevice) {
        unsafe {
            device.raw().draw_arrays(
                glow::TRIANGLES,
                0,
                CUBE_VERTEX_COUNT,
            );
        }
    }

    /// Release the VAO and VBO.
    pub fn delete(self, device: &GlDevice) {
        let gl = device.raw();
        unsafe {
            gl.delete_buffer(self.vbo);
            gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_table_has_expected_shape() {
        assert_eq!(
            CUBE_VERTICES.len(),
            CUBE_VERTEX_COUNT as usize * FLOATS_PER_VERTEX
        );
    }

    #[test]
    fn positions_stay_on_the_unit_cube() {
        for vertex in CUBE_VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            for &coord in &vertex[..3] {
                assert!(coord == 0.5 || coord == -0.5);
            }
            for &uv in &vertex[3..] {
                assert!(uv == 0.0 || uv == 1.0);
            }
        }
    }

    #[test]
    fn all_eight_corners_are_present() {
        let mut corners = std::collections::HashSet::new();
        for vertex in CUBE_VERTICES.chunks_exact(FLOATS_PER_VERTEX) {
            let key = (
                vertex[0].to_bits(),
                vertex[1].to_bits(),
                vertex[2].to_bits(),
            );
            let _ = corners.insert(key);
        }
        assert_eq!(corners.len(), 8);
    }
}
