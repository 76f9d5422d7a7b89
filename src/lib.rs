//! pixfind locates a small pixel pattern (the needle) inside a larger pixel
//! buffer (the haystack), such as a captured screen framebuffer.
//!
//! Pixels are opaque 32-bit codes compared by exact bitwise equality; the
//! channel layout is up to the caller as long as needle and haystack agree.
//! A search returns the top-left corner of the first match in row-major
//! order within a clip rectangle, or [`Location::NotFound`].
//!
//! The scan broadcasts the needle's first pixel once, rejects whole lanes of
//! candidate columns that do not contain it, and runs a full comparison with
//! early exit only on the survivors. Lane width comes from the selected
//! kernel: 1 for the portable scalar kernel, 8 with the `simd` feature.
//!
//! ```
//! use pixfind::{search, Location};
//!
//! let hit = 0xFF00_FF00;
//! let mut haystack = vec![0u32; 16];
//! for (x, y) in [(2, 1), (3, 1), (2, 2), (3, 2)] {
//!     haystack[y * 4 + x] = hit;
//! }
//! let needle = [hit; 4];
//! let loc = search(&needle, 2, 2, &haystack, 4, 0, 0, 4, 4).unwrap();
//! assert_eq!(loc, Location::Found { x: 2, y: 1 });
//! ```

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod needle;
pub mod region;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{OwnedPixels, PixelView};
pub use kernel::KernelChoice;
pub use needle::Needle;
pub use region::{ClipRect, Location};
pub use search::validate::validate;
pub use search::{search, search_bytes, search_view, SearchConfig, Searcher};
pub use util::{PixFindError, PixFindResult};
