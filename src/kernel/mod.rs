//! Lane kernels for exact pixel comparison.
//!
//! A kernel fixes the lane width `L` used by the prefilter and the full
//! matcher. The scalar kernel (`L = 1`) is always available; the `wide`
//! kernel (`L = 8`) is compiled in with the `simd` feature. Both produce the
//! same results, only throughput differs.

/// Lane-parallel equality over 32-bit pixel codes.
pub trait LaneKernel {
    /// Number of pixels compared per lane operation.
    const LANES: usize;

    /// A pixel value broadcast to every lane.
    type Splat: Copy;

    /// Broadcasts `value` to every lane.
    fn splat(value: u32) -> Self::Splat;

    /// Bitmask of the lanes in `pixels[..LANES]` equal to `splat`.
    ///
    /// Bit `i` corresponds to `pixels[i]`. `pixels` must hold at least
    /// `LANES` elements.
    fn eq_mask(pixels: &[u32], splat: Self::Splat) -> u32;

    /// Returns true if `a[..LANES]` and `b[..LANES]` are equal in every lane.
    fn lanes_equal(a: &[u32], b: &[u32]) -> bool;
}

/// Kernel selection for a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum KernelChoice {
    /// `Wide` when the `simd` feature is enabled, otherwise `Scalar`.
    #[default]
    Auto,
    /// Portable single-pixel lanes.
    Scalar,
    /// Eight-pixel lanes via the `wide` crate.
    Wide,
}

impl KernelChoice {
    /// Resolves `Auto` against the compiled feature set.
    pub fn resolve(self) -> KernelChoice {
        match self {
            KernelChoice::Auto if cfg!(feature = "simd") => KernelChoice::Wide,
            KernelChoice::Auto => KernelChoice::Scalar,
            other => other,
        }
    }

    /// Lane width of the resolved kernel.
    pub fn lanes(self) -> usize {
        match self.resolve() {
            KernelChoice::Wide => 8,
            _ => 1,
        }
    }
}

pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;
