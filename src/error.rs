//! Error taxonomy for the checker entry points.
//!
//! The kernel metrics themselves are pure and cannot fail on well-formed
//! input; only input validation at the pipeline boundary raises. Either a
//! complete report is produced or one of these errors is returned before any
//! computation begins.

/// Reasons why a quality check may be rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityError {
    /// Pixel buffer is empty or one of the dimensions is zero.
    InvalidInput { width: usize, height: usize },
    /// Declared geometry requires more bytes than the buffer holds.
    BufferTooSmall { required: usize, actual: usize },
    /// Image smaller than the 3×3 neighbourhood the blur, motion-blur and
    /// noise kernels evaluate.
    DegenerateImage {
        width: usize,
        height: usize,
        minimum: usize,
    },
}

impl std::fmt::Display for QualityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityError::InvalidInput { width, height } => {
                write!(f, "invalid input image ({width}x{height})")
            }
            QualityError::BufferTooSmall { required, actual } => {
                write!(f, "pixel buffer too small ({actual} bytes, need {required})")
            }
            QualityError::DegenerateImage {
                width,
                height,
                minimum,
            } => write!(
                f,
                "image {width}x{height} below the {minimum}x{minimum} kernel minimum"
            ),
        }
    }
}

impl std::error::Error for QualityError {}
