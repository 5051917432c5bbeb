//! Local-variance noise estimate.
//!
//! Each interior pixel is compared against the mean of its 8 neighbours; the
//! score is the mean squared deviation. Smooth regions contribute nothing,
//! isolated speckle contributes quadratically.
use crate::image::{ImageF64, ImageView};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct NoiseMetric {
    /// Mean squared deviation from the 8-neighbour mean, interior pixels.
    pub score: f64,
    pub has_noise: bool,
}

pub fn noise(intensity: &ImageF64, threshold: f64) -> NoiseMetric {
    let (w, h) = (intensity.w, intensity.h);
    debug_assert!(w >= 3 && h >= 3);

    let row_dev_sq = |y: usize| -> f64 {
        let above = intensity.row(y - 1);
        let row = intensity.row(y);
        let below = intensity.row(y + 1);
        let mut acc = 0.0;
        for x in 1..w - 1 {
            let neighbours = above[x - 1]
                + above[x]
                + above[x + 1]
                + row[x - 1]
                + row[x + 1]
                + below[x - 1]
                + below[x]
                + below[x + 1];
            let dev = row[x] - neighbours / 8.0;
            acc += dev * dev;
        }
        acc
    };

    let sum_sq = {
        #[cfg(feature = "parallel")]
        {
            (1..h - 1).into_par_iter().map(row_dev_sq).sum::<f64>()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (1..h - 1).map(row_dev_sq).sum::<f64>()
        }
    };

    let score = sum_sq / ((w - 2) * (h - 2)) as f64;
    NoiseMetric {
        score,
        has_noise: score > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_image_has_zero_noise() {
        let mut img = ImageF64::new(9, 9);
        img.data.fill(77.0);
        let metric = noise(&img, 500.0);
        assert_eq!(metric.score, 0.0);
        assert!(!metric.has_noise);
    }

    #[test]
    fn single_speckle_raises_the_score() {
        let mut img = ImageF64::new(9, 9);
        img.set(4, 4, 255.0);
        let metric = noise(&img, 500.0);
        // Centre deviates by 255 from an all-zero neighbourhood.
        assert!(metric.score > 0.0);
        let centre_dev = 255.0f64;
        assert!(metric.score < centre_dev * centre_dev);
    }

    #[test]
    fn dense_speckle_flags_noise() {
        let mut img = ImageF64::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                if (x + y) % 2 == 0 {
                    img.set(x, y, 255.0);
                }
            }
        }
        let metric = noise(&img, 500.0);
        assert!(metric.has_noise, "score={}", metric.score);
    }
}
