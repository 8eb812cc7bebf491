//! The cube field: per-cube placement and spin.

use glam::{Mat4, Vec3};

use crate::options::SceneOptions;

/// Static tilt step between neighboring cubes, in degrees.
const TILT_STEP_DEG: f32 = 20.0;

/// Default cube placements.
const DEFAULT_POSITIONS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(0.2, -0.9, 0.0),
    Vec3::new(-5.0, 3.0, 4.0),
];

/// A small field of cubes, each with a static tilt proportional to its
/// index plus a shared continuous spin.
pub struct CubeField {
    positions: Vec<Vec3>,
    spin_axis: Vec3,
    spin_speed_deg: f32,
}

impl CubeField {
    /// Build the default field with the spin rate from `options`.
    #[must_use]
    pub fn new(options: &SceneOptions) -> Self {
        Self {
            positions: DEFAULT_POSITIONS.to_vec(),
            spin_axis: Vec3::new(1.0, 0.3, 0.5).normalize(),
            spin_speed_deg: options.spin_speed,
        }
    }

    /// Number of cubes in the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` when the field holds no cubes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Model matrix for cube `index` at `elapsed` seconds.
    ///
    /// Pure in `elapsed`: the same time always yields the same matrix.
    #[must_use]
    pub fn model_matrix(&self, index: usize, elapsed: f32) -> Mat4 {
        let angle = (TILT_STEP_DEG * index as f32
            + self.spin_speed_deg * elapsed)
            .to_radians();
        Mat4::from_translation(self.positions[index])
            * Mat4::from_axis_angle(self.spin_axis, angle)
    }

    /// Model matrices for every cube at `elapsed` seconds.
    pub fn model_matrices(
        &self,
        elapsed: f32,
    ) -> impl Iterator<Item = Mat4> + '_ {
        (0..self.positions.len())
            .map(move |index| self.model_matrix(index, elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> CubeField {
        CubeField::new(&SceneOptions::default())
    }

    #[test]
    fn model_matrix_is_pure_in_elapsed_time() {
        let field = field();
        let a = field.model_matrix(1, 2.5).to_cols_array();
        let b = field.model_matrix(1, 2.5).to_cols_array();
        assert_eq!(a, b);
    }

    #[test]
    fn cubes_have_distinct_tilts_at_time_zero() {
        let field = field();
        let first = field.model_matrix(0, 0.0);
        let second = field.model_matrix(1, 0.0);
        assert_ne!(first.to_cols_array(), second.to_cols_array());
    }

    #[test]
    fn translation_column_matches_cube_position() {
        let field = field();
        let matrix = field.model_matrix(2, 0.0);
        let translation = matrix.w_axis.truncate();
        assert_eq!(translation, DEFAULT_POSITIONS[2]);
    }

    #[test]
    fn spin_advances_with_time() {
        let field = field();
        let early = field.model_matrix(0, 0.0).to_cols_array();
        let late = field.model_matrix(0, 1.0).to_cols_array();
        assert_ne!(early, late);
    }

    #[test]
    fn zero_spin_speed_freezes_the_field() {
        let options = SceneOptions {
            spin_speed: 0.0,
            ..SceneOptions::default()
        };
        let field = CubeField::new(&options);
        let early = field.model_matrix(0, 0.0).to_cols_array();
        let late = field.model_matrix(0, 10.0).to_cols_array();
        assert_eq!(early, late);
    }

    #[test]
    fn matrices_iterator_covers_every_cube() {
        let field = field();
        assert_eq!(field.model_matrices(0.0).count(), field.len());
        assert!(!field.is_empty());
    }
}
