use cgmath::Vector2;
use image::{ImageBuffer, Luma};

use crate::mapping::bilinear::{BilinearMapping, CORNERS};

pub struct Linear {
    image: ImageBuffer<Luma<f32>, Vec<f32>>,
}
impl Linear {
    pub fn new(image: ImageBuffer<Luma<f32>, Vec<f32>>) -> Self {
        Self { image }
    }

    /// Bilinear interpolation of pixel (x, y) of a destination image with the given size.
    /// Corners that fall outside the source image are skipped and the remaining weights are
    /// renormalized. Returns `None` if no corner is usable.
    pub fn upsample_pixel(
        &self,
        x: u32,
        y: u32,
        destination_width: u32,
        destination_height: u32,
    ) -> Option<f32> {
        let (width, height) = self.image.dimensions();
        let mapping = BilinearMapping::new(
            Vector2::new(x as f64, y as f64),
            Vector2::new(width as f64, height as f64),
            Vector2::new(destination_width as f64, destination_height as f64),
        );
        let weights = mapping.weights();

        let mut value = 0.0;
        let mut total_weight = 0.0;
        for corner in 0..CORNERS {
            if !mapping.corner_in_bounds(corner, width, height) {
                continue;
            }
            // in bounds, so the corner exists and is non-negative
            let index = mapping.corner(corner)?;
            let sample = self.image.get_pixel(index.x as u32, index.y as u32)[0];
            value += weights[corner] * sample as f64;
            total_weight += weights[corner];
        }

        if total_weight > 0.0 {
            Some((value / total_weight) as f32)
        } else {
            None
        }
    }
}
