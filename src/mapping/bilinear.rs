use cgmath::Vector2;

use crate::mapping::{self, AxisMapping};

/// Number of source samples surrounding a destination pixel.
pub const CORNERS: usize = 4;

/// The mapping of one destination pixel onto the source grid, one `AxisMapping` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilinearMapping {
    pub x: AxisMapping,
    pub y: AxisMapping,
}

impl BilinearMapping {
    pub fn new(
        destination: Vector2<f64>,
        source_extent: Vector2<f64>,
        destination_extent: Vector2<f64>,
    ) -> Self {
        Self {
            x: mapping::upper(destination.x, source_extent.x, destination_extent.x),
            y: mapping::upper(destination.y, source_extent.y, destination_extent.y),
        }
    }

    /// Weights of the four corners, in the order of `corner_offset`.
    pub fn weights(&self) -> [f64; CORNERS] {
        let rx = self.x.interpolation_ratio;
        let ry = self.y.interpolation_ratio;
        [
            (1.0 - rx) * (1.0 - ry),
            rx * (1.0 - ry),
            (1.0 - rx) * ry,
            rx * ry,
        ]
    }

    /// Source index of the given corner.
    /// `None` if the index of either axis is not finite or does not fit into an `i64`.
    pub fn corner(&self, corner: usize) -> Option<Vector2<i64>> {
        let offset = corner_offset(corner);
        let x = self.x.base_index_i64()?.checked_add(offset.x)?;
        let y = self.y.base_index_i64()?.checked_add(offset.y)?;
        Some(Vector2::new(x, y))
    }

    pub fn corner_in_bounds(&self, corner: usize, source_width: u32, source_height: u32) -> bool {
        match self.corner(corner) {
            Some(index) => {
                0 <= index.x
                    && index.x < source_width as i64
                    && 0 <= index.y
                    && index.y < source_height as i64
            }
            None => false,
        }
    }
}

/// Offset of a corner from the base index: 0 -> (0, 0), 1 -> (1, 0), 2 -> (0, 1), 3 -> (1, 1).
pub fn corner_offset(corner: usize) -> Vector2<i64> {
    let corner = corner & 3;
    Vector2::new((corner & 1) as i64, (corner >> 1) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mapping() -> BilinearMapping {
        // x: base_coord 0.125, y: base_coord -0.1875
        BilinearMapping::new(
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(4.0, 8.0),
        )
    }

    #[test]
    fn axes_are_mapped_independently() {
        let mapping = sample_mapping();
        assert_eq!(mapping.x, mapping::upper(2.0, 1.0, 4.0));
        assert_eq!(mapping.y, mapping::upper(2.0, 1.0, 8.0));
    }

    #[test]
    fn corner_offsets() {
        assert_eq!(corner_offset(0), Vector2::new(0, 0));
        assert_eq!(corner_offset(1), Vector2::new(1, 0));
        assert_eq!(corner_offset(2), Vector2::new(0, 1));
        assert_eq!(corner_offset(3), Vector2::new(1, 1));
        assert_eq!(corner_offset(5), Vector2::new(1, 0));
    }

    #[test]
    fn weights_sum_to_one() {
        let mapping = sample_mapping();
        let weights = mapping.weights();
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        // rx = 0.125, ry = 0.1875
        assert_eq!(weights[0], 0.875 * 0.8125);
        assert_eq!(weights[1], 0.125 * 0.8125);
        assert_eq!(weights[2], 0.875 * 0.1875);
        assert_eq!(weights[3], 0.125 * 0.1875);
    }

    #[test]
    fn corners_around_base() {
        let mapping = sample_mapping();
        assert_eq!(mapping.corner(0), Some(Vector2::new(0, -1)));
        assert_eq!(mapping.corner(3), Some(Vector2::new(1, 0)));
    }

    #[test]
    fn out_of_bounds_corners() {
        let mapping = sample_mapping();
        // source grid of 1x1: only (0, 0) exists, which is corner 2
        assert!(!mapping.corner_in_bounds(0, 1, 1));
        assert!(!mapping.corner_in_bounds(1, 1, 1));
        assert!(mapping.corner_in_bounds(2, 1, 1));
        assert!(!mapping.corner_in_bounds(3, 1, 1));
    }

    #[test]
    fn huge_coordinates_have_no_corners() {
        let mapping = BilinearMapping::new(
            Vector2::new(1e19, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
        );
        for corner in 0..CORNERS {
            assert_eq!(mapping.corner(corner), None);
            assert!(!mapping.corner_in_bounds(corner, u32::MAX, u32::MAX));
        }
    }

    #[test]
    fn upper_corner_at_the_edge_of_i64() {
        let base = 9223372036854774784.0;
        let mapping = BilinearMapping::new(
            Vector2::new(base, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(1.0, 1.0),
        );
        assert_eq!(
            mapping.corner(1),
            Some(Vector2::new(9223372036854774785, 0))
        );
    }

    #[test]
    fn non_finite_mapping_has_no_corners() {
        let mapping = BilinearMapping::new(
            Vector2::new(2.0, 2.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 4.0),
        );
        assert_eq!(mapping.corner(0), None);
        assert!(!mapping.corner_in_bounds(0, 10, 10));
    }
}
