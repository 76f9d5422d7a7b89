//! Low-level building blocks for custom scan loops.
//!
//! These expose the lane kernels, the full matcher and the layout check used
//! by [`crate::search`]. `matches_at` does not validate its inputs beyond
//! refusing to read past the haystack; run [`validate_layout`] first when
//! building a loop on top of it.

pub use crate::kernel::scalar::ScalarKernel;
#[cfg(feature = "simd")]
pub use crate::kernel::simd::WideKernel;
pub use crate::kernel::LaneKernel;
pub use crate::search::matcher::matches_at;
pub use crate::search::validate::{validate, validate_layout};
