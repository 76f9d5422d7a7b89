//! Convenience helpers for loading pixel buffers via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. RGBA8 pixels are packed
//! into `u32` codes as little-endian `[r, g, b, a]`; needle and haystack must
//! both come through the same packing for equality to hold.

use crate::image::OwnedPixels;
use crate::needle::Needle;
use crate::util::{PixFindError, PixFindResult};
use std::path::Path;

/// Packs one RGBA8 pixel into a pixel code.
#[inline]
pub fn pack_rgba(rgba: [u8; 4]) -> u32 {
    u32::from_le_bytes(rgba)
}

/// Creates an owned pixel buffer from an RGBA image.
pub fn pixels_from_rgba_image(img: &image::RgbaImage) -> PixFindResult<OwnedPixels> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| pack_rgba(p.0)).collect();
    OwnedPixels::new(data, width, height)
}

/// Loads an image from disk as a needle.
pub fn load_rgba_needle<P: AsRef<Path>>(path: P) -> PixFindResult<Needle> {
    Ok(Needle::from_pixels(load_rgba_pixels(path)?))
}

/// Loads an image from disk and converts it to packed RGBA pixel codes.
pub fn load_rgba_pixels<P: AsRef<Path>>(path: P) -> PixFindResult<OwnedPixels> {
    let img = image::open(path).map_err(|err| PixFindError::ImageIo {
        reason: err.to_string(),
    })?;
    pixels_from_rgba_image(&img.to_rgba8())
}
