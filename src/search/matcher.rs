//! Full-needle comparison at a single placement.

use crate::image::PixelView;
use crate::kernel::LaneKernel;

/// Compares one haystack row segment against one needle row.
///
/// Full lanes are compared first; the tail shorter than a lane falls back to
/// single-pixel comparisons. Returns on the first mismatch.
#[inline]
pub(crate) fn row_equal<K: LaneKernel>(hay_row: &[u32], needle_row: &[u32]) -> bool {
    debug_assert_eq!(hay_row.len(), needle_row.len());
    let mut hay_chunks = hay_row.chunks_exact(K::LANES);
    let mut needle_chunks = needle_row.chunks_exact(K::LANES);
    for (hay, needle) in (&mut hay_chunks).zip(&mut needle_chunks) {
        if !K::lanes_equal(hay, needle) {
            return false;
        }
    }
    for (hay, needle) in hay_chunks
        .remainder()
        .iter()
        .zip(needle_chunks.remainder())
    {
        if hay != needle {
            return false;
        }
    }
    true
}

/// Returns true if the whole needle matches the haystack with its top-left at `(x, y)`.
///
/// Haystack rows are addressed as `(y + dy) * stride + x`; needle rows come
/// from the needle view. A placement that would read past the end of
/// `haystack` is reported as a mismatch.
pub fn matches_at<K: LaneKernel>(
    needle: PixelView<'_>,
    haystack: &[u32],
    stride: usize,
    x: usize,
    y: usize,
) -> bool {
    let width = needle.width();
    for dy in 0..needle.height() {
        let Some(needle_row) = needle.row(dy) else {
            return false;
        };
        let Some(start) = (y + dy).checked_mul(stride).and_then(|v| v.checked_add(x)) else {
            return false;
        };
        let Some(hay_row) = haystack.get(start..start.saturating_add(width)) else {
            return false;
        };
        if !row_equal::<K>(hay_row, needle_row) {
            return false;
        }
    }
    true
}
