//! Error types for pixfind.

use thiserror::Error;

/// Result alias for pixfind operations.
pub type PixFindResult<T> = std::result::Result<T, PixFindError>;

/// Errors that can occur before a search starts.
///
/// A started scan never fails; "not found" is reported through
/// [`crate::Location::NotFound`], not through this type.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PixFindError {
    /// The clip rectangle is smaller than the needle in at least one axis.
    #[error(
        "clip {clip_width}x{clip_height} cannot contain needle {needle_width}x{needle_height}"
    )]
    InvalidClipDimensions {
        needle_width: usize,
        needle_height: usize,
        clip_width: usize,
        clip_height: usize,
    },
    /// A needle or haystack buffer is shorter than its declared layout requires.
    #[error("buffer too small: need {needed} pixels, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The clip rectangle does not fit inside the haystack rows.
    #[error("clip ({x}, {y}, {width}x{height}) exceeds haystack rows of stride {stride}")]
    ClipOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        stride: usize,
    },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The requested feature was not compiled in.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
    /// Image decoding failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
