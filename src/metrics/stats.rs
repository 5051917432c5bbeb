//! Scalar reductions over flat sample buffers.
//!
//! The parallel variants partition the buffer into contiguous chunks, reduce
//! each chunk independently and combine the partial sums afterwards — no
//! shared accumulator, no locking inside the loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Chunk length for parallel reductions. Large enough to amortise the
/// per-task overhead, small enough to keep all workers busy.
#[cfg(feature = "parallel")]
const CHUNK: usize = 1 << 14;

pub fn sum(data: &[f64]) -> f64 {
    #[cfg(feature = "parallel")]
    {
        data.par_chunks(CHUNK)
            .map(|c| c.iter().sum::<f64>())
            .sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.iter().sum()
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum(data) / data.len() as f64
}

/// Population variance around the mean (two-pass).
pub fn variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let sq = {
        #[cfg(feature = "parallel")]
        {
            data.par_chunks(CHUNK)
                .map(|c| c.iter().map(|&v| (v - m) * (v - m)).sum::<f64>())
                .sum::<f64>()
        }
        #[cfg(not(feature = "parallel"))]
        {
            data.iter().map(|&v| (v - m) * (v - m)).sum::<f64>()
        }
    };
    sq / data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance_of_known_samples() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&data), 5.0);
        assert_eq!(variance(&data), 4.0);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(variance(&[]), 0.0);
    }
}
