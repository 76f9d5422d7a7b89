//! Scalar reference kernel.

use crate::kernel::LaneKernel;

/// Portable kernel comparing one pixel per lane.
pub struct ScalarKernel;

impl LaneKernel for ScalarKernel {
    const LANES: usize = 1;
    type Splat = u32;

    #[inline]
    fn splat(value: u32) -> u32 {
        value
    }

    #[inline]
    fn eq_mask(pixels: &[u32], splat: u32) -> u32 {
        (pixels[0] == splat) as u32
    }

    #[inline]
    fn lanes_equal(a: &[u32], b: &[u32]) -> bool {
        a[0] == b[0]
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKernel;
    use crate::kernel::LaneKernel;

    #[test]
    fn eq_mask_tests_first_pixel_only() {
        let splat = ScalarKernel::splat(7);
        assert_eq!(ScalarKernel::eq_mask(&[7, 0], splat), 1);
        assert_eq!(ScalarKernel::eq_mask(&[0, 7], splat), 0);
    }
}
