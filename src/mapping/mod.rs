pub mod bilinear;

use std::fmt;

/// The mapping of one destination index onto the source axis.
///
/// `base_index` is kept as a float holding an integral value, so that a
/// non-finite `base_coordinate` (e.g. from a zero destination extent)
/// carries through instead of being squashed into an integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMapping {
    pub base_coordinate: f64,
    pub base_index: f64,
    pub interpolation_ratio: f64,
}

/// Maps `destination_index` of a grid with `destination_extent` cells onto a grid
/// with `source_extent` cells, with cell centers aligned.
///
/// Note: the ratio is taken relative to the truncated coordinate and then
/// multiplied by the sign of the coordinate. For a negative, non-integer
/// coordinate this is NOT `base_coordinate - base_index`,
/// e.g. -0.1875 gives a ratio of 0.1875 and not 0.8125.
pub fn upper(destination_index: f64, source_extent: f64, destination_extent: f64) -> AxisMapping {
    let base_coordinate = ((destination_index + 0.5) * source_extent / destination_extent) - 0.5;
    let base_index = base_coordinate.floor();
    let interpolation_ratio = (base_coordinate - base_coordinate.trunc()) * sign(base_coordinate);
    AxisMapping {
        base_coordinate,
        base_index,
        interpolation_ratio,
    }
}

impl AxisMapping {
    /// The second sample of the interpolation pair.
    pub fn upper_index(&self) -> f64 {
        self.base_index + 1.0
    }

    /// Weight of the sample at `base_index`.
    pub fn lower_weight(&self) -> f64 {
        1.0 - self.interpolation_ratio
    }

    /// Weight of the sample at `upper_index`.
    pub fn upper_weight(&self) -> f64 {
        self.interpolation_ratio
    }

    /// The base index as an integer, `None` if it is not finite or does not fit into an `i64`.
    pub fn base_index_i64(&self) -> Option<i64> {
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if self.base_index >= i64::MIN as f64 && self.base_index < i64::MAX as f64 {
            Some(self.base_index as i64)
        } else {
            None
        }
    }

    pub fn is_finite(&self) -> bool {
        self.base_coordinate.is_finite()
            && self.base_index.is_finite()
            && self.interpolation_ratio.is_finite()
    }
}

impl fmt::Display for AxisMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "base_coord: {}, bilinear_base: {}, ratio: {}",
            self.base_coordinate, self.base_index, self.interpolation_ratio
        )
    }
}

/// -1, 0 or 1 depending on the sign of the value.
/// Unlike `f64::signum` a (signed) zero stays zero and NaN stays NaN.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}
