use crate::image::{pixels_from_ne_bytes, PixelView};
use crate::util::{PixFindError, PixFindResult};

/// Owned, tightly packed pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedPixels {
    data: Vec<u32>,
    width: usize,
    height: usize,
}

impl OwnedPixels {
    /// Wraps a row-major buffer holding exactly `width * height` pixels.
    pub fn new(data: Vec<u32>, width: usize, height: usize) -> PixFindResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixFindError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(PixFindError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(PixFindError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(PixFindError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Decodes a tightly packed byte region of native-endian pixel codes.
    pub fn from_ne_bytes(bytes: &[u8], width: usize, height: usize) -> PixFindResult<Self> {
        Self::new(pixels_from_ne_bytes(bytes)?, width, height)
    }

    /// Copies a possibly strided view into a packed buffer.
    pub fn from_view(view: PixelView<'_>) -> Self {
        let mut data = Vec::with_capacity(view.width() * view.height());
        for y in 0..view.height() {
            if let Some(row) = view.row(y) {
                data.extend_from_slice(row);
            }
        }
        Self {
            data,
            width: view.width(),
            height: view.height(),
        }
    }

    /// Returns a borrowed view with `stride == width`.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the packed pixel data.
    pub fn data(&self) -> &[u32] {
        &self.data
    }
}
