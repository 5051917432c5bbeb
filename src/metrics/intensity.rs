//! Grayscale intensity extraction.
//!
//! Each pixel maps to the unweighted channel average `(R+G+B)/3`. The
//! resulting plane is computed once per check and shared read-only by the
//! blur, motion, glare, noise and banding kernels.
use crate::image::{ImageF64, RgbImageU8};

#[cfg(not(feature = "parallel"))]
use crate::image::ImageViewMut;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub fn intensity_from_rgb(rgb: &RgbImageU8<'_>) -> ImageF64 {
    let mut out = ImageF64::new(rgb.w, rgb.h);
    let w = rgb.w;

    #[cfg(feature = "parallel")]
    {
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, dst)| convert_row(rgb.row(y), dst));
    }
    #[cfg(not(feature = "parallel"))]
    for y in 0..rgb.h {
        convert_row(rgb.row(y), out.row_mut(y));
    }

    out
}

#[inline]
fn convert_row(src: &[u8], dst: &mut [f64]) {
    for (x, px) in dst.iter_mut().enumerate() {
        let i = 3 * x;
        *px = (src[i] as f64 + src[i + 1] as f64 + src[i + 2] as f64) / 3.0;
    }
}
