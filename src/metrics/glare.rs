//! Glare detection by brightness thresholding.
//!
//! A pixel counts as glare when its intensity reaches `bright_threshold`;
//! the metric is the total count. Decreasing the threshold can only grow the
//! area (monotonicity relied on by callers sweeping thresholds).
use crate::image::ImageF64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct GlareMetric {
    /// Number of pixels at or above the brightness threshold.
    pub area: usize,
    pub has_glare: bool,
}

pub fn glare(intensity: &ImageF64, bright_threshold: f64, area_threshold: usize) -> GlareMetric {
    let area = {
        #[cfg(feature = "parallel")]
        {
            intensity
                .data
                .par_chunks(intensity.w.max(1))
                .map(|row| row.iter().filter(|&&v| v >= bright_threshold).count())
                .sum()
        }
        #[cfg(not(feature = "parallel"))]
        {
            intensity
                .data
                .iter()
                .filter(|&&v| v >= bright_threshold)
                .count()
        }
    };

    GlareMetric {
        area,
        has_glare: area > area_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_image() -> ImageF64 {
        let mut img = ImageF64::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                img.set(x, y, (x * 16) as f64);
            }
        }
        img
    }

    #[test]
    fn counts_bright_pixels() {
        let img = ramp_image();
        // Columns 15 (240) and above qualify at the default threshold.
        let metric = glare(&img, 240.0, 10);
        assert_eq!(metric.area, 16);
        assert!(metric.has_glare);
    }

    #[test]
    fn area_grows_as_threshold_drops() {
        let img = ramp_image();
        let mut previous = 0usize;
        for t in (0..=255).rev().step_by(5) {
            let area = glare(&img, t as f64, usize::MAX).area;
            assert!(area >= previous, "area shrank at threshold {t}");
            previous = area;
        }
    }
}
