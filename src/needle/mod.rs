//! Needle storage.

use crate::image::{OwnedPixels, PixelView};
use crate::util::PixFindResult;

/// Owned needle pattern in tightly packed row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Needle {
    pixels: OwnedPixels,
    first_pixel: u32,
}

impl Needle {
    /// Creates a needle from a contiguous buffer of exactly `width * height` pixels.
    pub fn new(data: Vec<u32>, width: usize, height: usize) -> PixFindResult<Self> {
        Ok(Self::from_pixels(OwnedPixels::new(data, width, height)?))
    }

    /// Wraps an existing owned buffer.
    pub fn from_pixels(pixels: OwnedPixels) -> Self {
        // OwnedPixels rejects zero-sized buffers.
        let first_pixel = pixels.data()[0];
        Self {
            pixels,
            first_pixel,
        }
    }

    /// Copies a possibly strided view into a needle.
    pub fn from_view(view: PixelView<'_>) -> Self {
        Self::from_pixels(OwnedPixels::from_view(view))
    }

    /// Decodes a tightly packed byte region of native-endian pixel codes.
    pub fn from_ne_bytes(bytes: &[u8], width: usize, height: usize) -> PixFindResult<Self> {
        Ok(Self::from_pixels(OwnedPixels::from_ne_bytes(
            bytes, width, height,
        )?))
    }

    /// Returns a borrowed view of the needle data.
    pub fn view(&self) -> PixelView<'_> {
        self.pixels.view()
    }

    /// Returns the needle width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Returns the needle height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Returns the cached top-left pixel that `Searcher` broadcasts to the prefilter.
    pub fn first_pixel(&self) -> u32 {
        self.first_pixel
    }

    /// Returns the packed pixel data.
    pub fn data(&self) -> &[u32] {
        self.pixels.data()
    }
}
