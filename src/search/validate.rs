//! Up-front bounds validation.
//!
//! Every check here runs before the first haystack pixel is read, so a scan
//! that starts always runs to completion.

use crate::region::ClipRect;
use crate::util::{PixFindError, PixFindResult};

/// Checks that the clip can contain the needle and the buffers are large enough.
///
/// Clip dimensions are checked first, so a clip smaller than the needle is
/// reported as [`PixFindError::InvalidClipDimensions`] whatever the buffers
/// hold. `haystack_len` is only compared against `clip_width * clip_height`
/// here; the stride-aware check lives in [`validate_layout`].
pub fn validate(
    needle_width: usize,
    needle_height: usize,
    clip_width: usize,
    clip_height: usize,
    needle_len: usize,
    haystack_len: usize,
) -> PixFindResult<()> {
    if clip_width < needle_width || clip_height < needle_height {
        return Err(PixFindError::InvalidClipDimensions {
            needle_width,
            needle_height,
            clip_width,
            clip_height,
        });
    }

    // An overflowing area cannot be covered by any buffer.
    let needle_needed = needle_width.checked_mul(needle_height).unwrap_or(usize::MAX);
    if needle_len < needle_needed {
        return Err(PixFindError::BufferTooSmall {
            needed: needle_needed,
            got: needle_len,
        });
    }

    let clip_needed = clip_width.checked_mul(clip_height).unwrap_or(usize::MAX);
    if haystack_len < clip_needed {
        return Err(PixFindError::BufferTooSmall {
            needed: clip_needed,
            got: haystack_len,
        });
    }
    Ok(())
}

/// Checks that every pixel the scan can touch lies inside the haystack buffer.
///
/// The last index read is `(clip.y + clip.height - 1) * stride + clip.x +
/// clip.width - 1`; a clip wider than the stride would wrap into the next row.
pub fn validate_layout(stride: usize, clip: ClipRect, haystack_len: usize) -> PixFindResult<()> {
    let out_of_bounds = PixFindError::ClipOutOfBounds {
        x: clip.x,
        y: clip.y,
        width: clip.width,
        height: clip.height,
        stride,
    };
    let right = clip.right().ok_or(out_of_bounds.clone())?;
    let bottom = clip.bottom().ok_or(out_of_bounds.clone())?;
    if right > stride || clip.width == 0 || clip.height == 0 {
        return Err(out_of_bounds);
    }
    let needed = (bottom - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(right))
        .ok_or(out_of_bounds)?;
    if haystack_len < needed {
        return Err(PixFindError::BufferTooSmall {
            needed,
            got: haystack_len,
        });
    }
    Ok(())
}

/// Runs every pre-scan check in order.
pub(crate) fn check_search(
    needle_width: usize,
    needle_height: usize,
    needle_len: usize,
    haystack_len: usize,
    stride: usize,
    clip: ClipRect,
) -> PixFindResult<()> {
    if needle_width == 0 || needle_height == 0 {
        return Err(PixFindError::InvalidDimensions {
            width: needle_width,
            height: needle_height,
        });
    }
    validate(
        needle_width,
        needle_height,
        clip.width,
        clip.height,
        needle_len,
        haystack_len,
    )?;
    validate_layout(stride, clip, haystack_len)
}
