//! SIMD-accelerated kernel using the `wide` crate.
//!
//! Lane masks come back from `simd_eq` as all-ones/all-zeros lanes and are
//! collapsed to one bit per lane with `to_bitmask`.

use crate::kernel::LaneKernel;
use wide::u32x8;

const LANES: usize = 8;
const ALL_LANES: u32 = (1 << LANES) - 1;

/// Load 8 pixel codes into a u32x8.
#[inline]
fn load_u32x8(slice: &[u32]) -> u32x8 {
    let mut lanes = [0u32; LANES];
    lanes.copy_from_slice(&slice[..LANES]);
    u32x8::from(lanes)
}

/// Eight-lane kernel.
pub struct WideKernel;

impl LaneKernel for WideKernel {
    const LANES: usize = LANES;
    type Splat = u32x8;

    #[inline]
    fn splat(value: u32) -> u32x8 {
        u32x8::splat(value)
    }

    #[inline]
    fn eq_mask(pixels: &[u32], splat: u32x8) -> u32 {
        load_u32x8(pixels).simd_eq(splat).to_bitmask() as u32
    }

    #[inline]
    fn lanes_equal(a: &[u32], b: &[u32]) -> bool {
        load_u32x8(a).simd_eq(load_u32x8(b)).to_bitmask() as u32 == ALL_LANES
    }
}
