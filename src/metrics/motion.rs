//! Directional motion-blur estimate.
//!
//! Sums absolute central differences along x and along y over interior
//! pixels. Motion blur smears one direction, collapsing its gradient sum;
//! the ratio of the dominant sum to the weaker one grows accordingly.
use crate::image::{ImageF64, ImageView};
use crate::metrics::EPS;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct MotionBlurMetric {
    /// `max(sum_x, sum_y) / (min(sum_x, sum_y) + ε)`.
    pub ratio: f64,
    pub has_motion_blur: bool,
}

pub fn motion_blur(intensity: &ImageF64, threshold: f64) -> MotionBlurMetric {
    let (w, h) = (intensity.w, intensity.h);
    debug_assert!(w >= 3 && h >= 3);

    let row_sums = |y: usize| -> (f64, f64) {
        let above = intensity.row(y - 1);
        let row = intensity.row(y);
        let below = intensity.row(y + 1);
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for x in 1..w - 1 {
            sum_x += (row[x + 1] - row[x - 1]).abs();
            sum_y += (below[x] - above[x]).abs();
        }
        (sum_x, sum_y)
    };

    let (sum_x, sum_y) = {
        #[cfg(feature = "parallel")]
        {
            (1..h - 1)
                .into_par_iter()
                .map(row_sums)
                .reduce(|| (0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1))
        }
        #[cfg(not(feature = "parallel"))]
        {
            (1..h - 1)
                .map(row_sums)
                .fold((0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1))
        }
    };

    let ratio = sum_x.max(sum_y) / (sum_x.min(sum_y) + EPS);
    MotionBlurMetric {
        ratio,
        has_motion_blur: ratio > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_keeps_ratio_finite() {
        let mut img = ImageF64::new(8, 8);
        img.data.fill(90.0);
        let metric = motion_blur(&img, 3.0);
        assert_eq!(metric.ratio, 0.0);
        assert!(!metric.has_motion_blur);
    }

    #[test]
    fn horizontal_stripes_flag_directional_bias() {
        // Rows alternate 0/200: all gradient energy is vertical.
        let mut img = ImageF64::new(16, 16);
        for y in 0..16 {
            if y % 2 == 1 {
                for x in 0..16 {
                    img.set(x, y, 200.0);
                }
            }
        }
        let metric = motion_blur(&img, 3.0);
        assert!(metric.has_motion_blur, "ratio={}", metric.ratio);
    }

    #[test]
    fn diagonal_ramp_is_direction_balanced() {
        let mut img = ImageF64::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                img.set(x, y, (x + y) as f64 * 5.0);
            }
        }
        let metric = motion_blur(&img, 3.0);
        assert!((metric.ratio - 1.0).abs() < 1e-6, "ratio={}", metric.ratio);
        assert!(!metric.has_motion_blur);
    }
}
