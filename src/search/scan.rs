//! Row-major scan over a clip rectangle.
//!
//! Candidates are visited row by row. Within a row, full lanes of candidate
//! columns go through the lane prefilter, which rejects a whole lane when no
//! haystack pixel in it equals the needle's first pixel. Columns left over
//! after the last full lane go straight to the full matcher.

use crate::image::PixelView;
use crate::kernel::LaneKernel;
use crate::region::{ClipRect, Location};
use crate::search::matcher::matches_at;

/// Counters collected during a scan, reported through tracing.
///
/// Only counted when the `tracing` feature (or a test build) needs them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ScanStats {
    /// Lanes whose prefilter found at least one first-pixel hit.
    pub lane_hits: usize,
    /// Placements handed to the full matcher.
    pub full_checks: usize,
}

impl ScanStats {
    #[inline(always)]
    fn lane_hit(&mut self) {
        #[cfg(any(test, feature = "tracing"))]
        {
            self.lane_hits += 1;
        }
    }

    #[inline(always)]
    fn full_check(&mut self) {
        #[cfg(any(test, feature = "tracing"))]
        {
            self.full_checks += 1;
        }
    }
}

/// Runs the lane prefilter at `(x, y)` and verifies the surviving offsets.
///
/// Offsets are tried in ascending order so the leftmost match in the lane
/// wins. Offsets whose first pixel differs from the needle cannot match and
/// are not handed to the full matcher.
#[inline]
fn scan_lane<K: LaneKernel>(
    needle: PixelView<'_>,
    haystack: &[u32],
    stride: usize,
    splat: K::Splat,
    x: usize,
    y: usize,
    stats: &mut ScanStats,
) -> Option<usize> {
    let mut mask = K::eq_mask(&haystack[y * stride + x..], splat);
    if mask == 0 {
        return None;
    }
    stats.lane_hit();
    while mask != 0 {
        let offset = mask.trailing_zeros() as usize;
        stats.full_check();
        if matches_at::<K>(needle, haystack, stride, x + offset, y) {
            return Some(x + offset);
        }
        mask &= mask - 1;
    }
    None
}

/// Scans every placement of `needle` inside `clip` and returns the first match.
///
/// `first_pixel` is the needle's top-left pixel; it is broadcast once and
/// drives the prefilter. Callers must have run the bounds validator for
/// `needle`, `haystack`, `stride` and `clip`; every lane read then stays
/// inside the clip rows.
pub(crate) fn scan<K: LaneKernel>(
    needle: PixelView<'_>,
    first_pixel: u32,
    haystack: &[u32],
    stride: usize,
    clip: ClipRect,
    stats: &mut ScanStats,
) -> Location {
    debug_assert_eq!(needle.get(0, 0), Some(first_pixel));
    // Last valid top-left corner, inclusive.
    let end_x = clip.x + clip.width - needle.width();
    let end_y = clip.y + clip.height - needle.height();
    let splat = K::splat(first_pixel);

    for y in clip.y..=end_y {
        let mut x = clip.x;
        // A lane starting at x covers candidates x..x + LANES, all <= end_x.
        while x + K::LANES <= end_x + 1 {
            if let Some(found_x) = scan_lane::<K>(needle, haystack, stride, splat, x, y, stats) {
                return Location::Found { x: found_x, y };
            }
            x += K::LANES;
        }
        while x <= end_x {
            stats.full_check();
            if matches_at::<K>(needle, haystack, stride, x, y) {
                return Location::Found { x, y };
            }
            x += 1;
        }
    }
    Location::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::scalar::ScalarKernel;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Portable four-lane kernel so multi-lane paths run without `simd`.
    struct Quad;

    impl LaneKernel for Quad {
        const LANES: usize = 4;
        type Splat = u32;

        fn splat(value: u32) -> u32 {
            value
        }

        fn eq_mask(pixels: &[u32], splat: u32) -> u32 {
            pixels[..4]
                .iter()
                .enumerate()
                .fold(0, |mask, (i, &p)| mask | (((p == splat) as u32) << i))
        }

        fn lanes_equal(a: &[u32], b: &[u32]) -> bool {
            a[..4] == b[..4]
        }
    }

    fn run<K: LaneKernel>(
        needle: &[u32],
        nw: usize,
        nh: usize,
        haystack: &[u32],
        stride: usize,
        clip: ClipRect,
    ) -> (Location, ScanStats) {
        let needle = PixelView::from_slice(needle, nw, nh).unwrap();
        let first = needle.get(0, 0).unwrap();
        let mut stats = ScanStats::default();
        let loc = scan::<K>(needle, first, haystack, stride, clip, &mut stats);
        (loc, stats)
    }

    fn brute_force(
        needle: &[u32],
        nw: usize,
        nh: usize,
        haystack: &[u32],
        stride: usize,
        clip: ClipRect,
    ) -> Location {
        for y in clip.y..=clip.y + clip.height - nh {
            for x in clip.x..=clip.x + clip.width - nw {
                let hit = (0..nh).all(|dy| {
                    (0..nw).all(|dx| haystack[(y + dy) * stride + x + dx] == needle[dy * nw + dx])
                });
                if hit {
                    return Location::Found { x, y };
                }
            }
        }
        Location::NotFound
    }

    #[test]
    fn last_placement_in_clip_is_visited() {
        let mut haystack = vec![0u32; 16];
        haystack[3 * 4 + 3] = 1;
        let (loc, _) = run::<ScalarKernel>(&[1], 1, 1, &haystack, 4, ClipRect::new(0, 0, 4, 4));
        assert_eq!(loc, Location::Found { x: 3, y: 3 });
    }

    #[test]
    fn prefilter_skips_rows_without_first_pixel() {
        let haystack = vec![0u32; 64];
        let (loc, stats) =
            run::<ScalarKernel>(&[1, 1], 2, 1, &haystack, 8, ClipRect::new(0, 0, 8, 8));
        assert_eq!(loc, Location::NotFound);
        assert_eq!(stats.full_checks, 0);
        assert_eq!(stats.lane_hits, 0);
    }

    #[test]
    fn matches_outside_clip_are_ignored() {
        let mut haystack = vec![0u32; 36];
        haystack[0] = 7;
        haystack[4 * 6 + 4] = 7;
        let (loc, _) = run::<ScalarKernel>(&[7], 1, 1, &haystack, 6, ClipRect::new(1, 1, 4, 4));
        assert_eq!(loc, Location::Found { x: 4, y: 4 });
    }

    #[test]
    fn lane_hit_at_last_offset() {
        // 10 candidates: lanes at 0 and 4, tail at 8..=9.
        let mut haystack = vec![0u32; 10];
        haystack[3] = 6;
        let (loc, stats) = run::<Quad>(&[6], 1, 1, &haystack, 10, ClipRect::new(0, 0, 10, 1));
        assert_eq!(loc, Location::Found { x: 3, y: 0 });
        assert_eq!(stats.lane_hits, 1);
        assert_eq!(stats.full_checks, 1);
    }

    #[test]
    fn lane_tries_offsets_left_to_right() {
        // First pixel hits at offsets 1 and 2; only offset 2 is a full match.
        let haystack = [0, 6, 6, 8, 0, 0];
        let (loc, stats) = run::<Quad>(&[6, 8], 2, 1, &haystack, 6, ClipRect::new(0, 0, 6, 1));
        assert_eq!(loc, Location::Found { x: 2, y: 0 });
        assert_eq!(stats.full_checks, 2);
    }

    #[test]
    fn hit_only_in_tail() {
        let mut haystack = vec![0u32; 10];
        haystack[9] = 6;
        let (loc, stats) = run::<Quad>(&[6], 1, 1, &haystack, 10, ClipRect::new(0, 0, 10, 1));
        assert_eq!(loc, Location::Found { x: 9, y: 0 });
        assert_eq!(stats.lane_hits, 0);
        assert_eq!(stats.full_checks, 2);
    }

    #[test]
    fn clip_one_lane_of_candidates_wide() {
        // needle width 3, clip width 3 + 4 - 1: exactly one full lane, no tail.
        let mut haystack = vec![1u32; 2 * 8];
        let row = 8;
        for dx in 0..3 {
            haystack[row + 1 + 3 + dx] = 5 + dx as u32;
        }
        let clip = ClipRect::new(1, 1, 6, 1);
        let (loc, stats) = run::<Quad>(&[5, 6, 7], 3, 1, &haystack, 8, clip);
        assert_eq!(loc, Location::Found { x: 4, y: 1 });
        assert_eq!(stats.lane_hits, 1);

        let miss = vec![1u32; 2 * 8];
        let (loc, stats) = run::<Quad>(&[5, 6, 7], 3, 1, &miss, 8, clip);
        assert_eq!(loc, Location::NotFound);
        assert_eq!(stats.full_checks, 0);
    }

    #[test]
    fn four_lane_kernel_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1000 {
            let width = rng.random_range(1..=30);
            let height = rng.random_range(1..=6);
            let stride = width + rng.random_range(0..=4);
            let len = (height - 1) * stride + width;
            let haystack: Vec<u32> = (0..len).map(|_| rng.random_range(0..3)).collect();

            let cw = rng.random_range(1..=width);
            let ch = rng.random_range(1..=height);
            let clip = ClipRect::new(
                rng.random_range(0..=width - cw),
                rng.random_range(0..=height - ch),
                cw,
                ch,
            );
            let nw = rng.random_range(1..=cw.min(9));
            let nh = rng.random_range(1..=ch.min(2));
            let needle: Vec<u32> = (0..nw * nh).map(|_| rng.random_range(0..3)).collect();

            let expected = brute_force(&needle, nw, nh, &haystack, stride, clip);
            let (quad, _) = run::<Quad>(&needle, nw, nh, &haystack, stride, clip);
            let (scalar, _) = run::<ScalarKernel>(&needle, nw, nh, &haystack, stride, clip);
            assert_eq!(quad, expected);
            assert_eq!(scalar, expected);
        }
    }

    #[cfg(feature = "simd")]
    #[test]
    fn wide_lanes_report_leftmost_hit_and_use_tail() {
        use crate::kernel::simd::WideKernel;

        // Row of 12 candidates for a 1x1 needle: one full lane plus a 4-wide tail.
        let mut haystack = vec![0u32; 12];
        haystack[5] = 3;
        haystack[6] = 3;
        let clip = ClipRect::new(0, 0, 12, 1);
        let (loc, stats) = run::<WideKernel>(&[3], 1, 1, &haystack, 12, clip);
        assert_eq!(loc, Location::Found { x: 5, y: 0 });
        assert_eq!(stats.lane_hits, 1);

        let mut tail = vec![0u32; 12];
        tail[10] = 3;
        let (loc, stats) = run::<WideKernel>(&[3], 1, 1, &tail, 12, clip);
        assert_eq!(loc, Location::Found { x: 10, y: 0 });
        assert_eq!(stats.lane_hits, 0);
    }
}
