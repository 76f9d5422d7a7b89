//! Pixel buffer views and owned buffers.
//!
//! `PixelView` is a borrowed 2D view into a 1D buffer of 32-bit pixel codes
//! with an explicit stride. The stride counts elements between the starts of
//! consecutive rows, so a stride larger than the width represents padded rows
//! (the usual layout of a captured framebuffer). Pixel codes are opaque: the
//! view never interprets channels.

use crate::region::ClipRect;
use crate::util::{PixFindError, PixFindResult};

mod owned;

#[cfg(feature = "image-io")]
pub mod io;

pub use owned::OwnedPixels;

/// Borrowed 2D pixel view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    data: &'a [u32],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [u32], width: usize, height: usize) -> PixFindResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [u32], width: usize, height: usize, stride: usize) -> PixFindResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(PixFindError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the view width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the view height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u32] {
        self.data
    }

    /// Returns true when rows are tightly packed (`stride == width`).
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    /// Returns the clip rectangle covering the whole view.
    pub fn full_rect(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [u32]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns a zero-copy view of `rect` into the same backing buffer.
    pub fn sub_view(&self, rect: ClipRect) -> PixFindResult<PixelView<'a>> {
        let out_of_bounds = PixFindError::ClipOutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            stride: self.stride,
        };
        let end_x = rect.right().ok_or(out_of_bounds.clone())?;
        let end_y = rect.bottom().ok_or(out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }
        let start = rect
            .y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(rect.x))
            .ok_or(out_of_bounds.clone())?;
        let data = self.data.get(start..).ok_or(out_of_bounds)?;
        PixelView::new(data, rect.width, rect.height, self.stride)
    }
}

/// Returns the number of elements a `width x height` layout with `stride` spans.
pub(crate) fn required_len(width: usize, height: usize, stride: usize) -> PixFindResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixFindError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(PixFindError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(PixFindError::InvalidDimensions { width, height })
}

/// Decodes a raw byte region into native-endian pixel codes.
pub(crate) fn pixels_from_ne_bytes(bytes: &[u8]) -> PixFindResult<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(PixFindError::InvalidInput(
            "byte length must be a multiple of 4",
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| u32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strided_rows_skip_padding() {
        let data = [1, 2, 9, 3, 4, 9];
        let view = PixelView::new(&data, 2, 2, 3).unwrap();
        assert_eq!(view.row(0), Some(&[1, 2][..]));
        assert_eq!(view.row(1), Some(&[3, 4][..]));
        assert_eq!(view.row(2), None);
        assert_eq!(view.get(1, 1), Some(4));
        assert_eq!(view.get(2, 0), None);
    }

    #[test]
    fn last_row_may_omit_padding() {
        let data = [1, 2, 9, 3, 4];
        assert!(PixelView::new(&data, 2, 2, 3).is_ok());
    }

    #[test]
    fn sub_view_keeps_stride() {
        let data: Vec<u32> = (0..16).collect();
        let view = PixelView::from_slice(&data, 4, 4).unwrap();
        let sub = view.sub_view(ClipRect::new(1, 2, 2, 2)).unwrap();
        assert_eq!(sub.stride(), 4);
        assert_eq!(sub.row(0), Some(&[9, 10][..]));
        assert_eq!(sub.row(1), Some(&[13, 14][..]));
    }

    #[test]
    fn sub_view_rejects_overhang() {
        let data = [0u32; 16];
        let view = PixelView::from_slice(&data, 4, 4).unwrap();
        let err = view.sub_view(ClipRect::new(3, 0, 2, 1)).unwrap_err();
        assert!(matches!(err, PixFindError::ClipOutOfBounds { .. }));
    }

    #[test]
    fn ne_bytes_requires_whole_pixels() {
        assert_eq!(
            pixels_from_ne_bytes(&[0, 0, 0]),
            Err(PixFindError::InvalidInput(
                "byte length must be a multiple of 4"
            ))
        );
        let px = 0xA1B2_C3D4u32;
        assert_eq!(pixels_from_ne_bytes(&px.to_ne_bytes()), Ok(vec![px]));
    }
}
