//! Exact needle search.
//!
//! All entry points funnel into one algorithm: validate the inputs, then scan
//! the clip rectangle in row-major order with the selected lane kernel and
//! return the first placement where every needle pixel equals the haystack
//! pixel beneath it.

use crate::image::{pixels_from_ne_bytes, PixelView};
use crate::kernel::scalar::ScalarKernel;
use crate::kernel::KernelChoice;
use crate::needle::Needle;
use crate::region::{ClipRect, Location};
use crate::trace::{trace_event, trace_span};
use crate::util::{PixFindError, PixFindResult};

pub(crate) mod matcher;
pub(crate) mod scan;
pub mod validate;

use scan::{scan, ScanStats};
use validate::check_search;

/// Configuration for a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Lane kernel used by the prefilter and the full matcher.
    pub kernel: KernelChoice,
}

impl SearchConfig {
    /// Checks that the requested kernel is compiled in.
    pub fn validate(&self) -> PixFindResult<()> {
        if self.kernel == KernelChoice::Wide && !cfg!(feature = "simd") {
            return Err(PixFindError::NotImplemented(
                "wide kernel requires the `simd` feature",
            ));
        }
        Ok(())
    }
}

/// Searches a flat haystack for the first exact occurrence of a flat needle.
///
/// `needle` is tightly packed (`needle_width` pixels per row). `haystack` rows
/// start every `haystack_stride` pixels. Only placements lying entirely
/// inside the clip rectangle are considered.
#[allow(clippy::too_many_arguments)]
pub fn search(
    needle: &[u32],
    needle_width: usize,
    needle_height: usize,
    haystack: &[u32],
    haystack_stride: usize,
    clip_x: usize,
    clip_y: usize,
    clip_width: usize,
    clip_height: usize,
) -> PixFindResult<Location> {
    let clip = ClipRect::new(clip_x, clip_y, clip_width, clip_height);
    search_flat(
        &SearchConfig::default(),
        needle,
        needle_width,
        needle_height,
        None,
        haystack,
        haystack_stride,
        clip,
    )
}

/// Like [`search`], over raw byte regions holding native-endian pixel codes.
///
/// Both regions are decoded into pixel codes before the scan; their lengths
/// must be multiples of 4.
#[allow(clippy::too_many_arguments)]
pub fn search_bytes(
    needle: &[u8],
    needle_width: usize,
    needle_height: usize,
    haystack: &[u8],
    haystack_stride: usize,
    clip_x: usize,
    clip_y: usize,
    clip_width: usize,
    clip_height: usize,
) -> PixFindResult<Location> {
    let needle = pixels_from_ne_bytes(needle)?;
    let haystack = pixels_from_ne_bytes(haystack)?;
    search(
        &needle,
        needle_width,
        needle_height,
        &haystack,
        haystack_stride,
        clip_x,
        clip_y,
        clip_width,
        clip_height,
    )
}

/// Searches `clip` of a bounded haystack view for a needle view.
///
/// `clip` is expressed in the haystack view's coordinates and must lie inside
/// it. The needle view may be strided.
pub fn search_view(
    needle: PixelView<'_>,
    haystack: PixelView<'_>,
    clip: ClipRect,
) -> PixFindResult<Location> {
    search_view_with(&SearchConfig::default(), needle, None, haystack, clip)
}

fn search_view_with(
    config: &SearchConfig,
    needle: PixelView<'_>,
    first_pixel: Option<u32>,
    haystack: PixelView<'_>,
    clip: ClipRect,
) -> PixFindResult<Location> {
    check_search(
        needle.width(),
        needle.height(),
        needle.as_slice().len(),
        haystack.as_slice().len(),
        haystack.stride(),
        clip,
    )?;
    let inside = clip.right().is_some_and(|r| r <= haystack.width())
        && clip.bottom().is_some_and(|b| b <= haystack.height());
    if !inside {
        return Err(PixFindError::ClipOutOfBounds {
            x: clip.x,
            y: clip.y,
            width: clip.width,
            height: clip.height,
            stride: haystack.stride(),
        });
    }
    run(
        config,
        needle,
        first_pixel,
        haystack.as_slice(),
        haystack.stride(),
        clip,
    )
}

#[allow(clippy::too_many_arguments)]
fn search_flat(
    config: &SearchConfig,
    needle: &[u32],
    needle_width: usize,
    needle_height: usize,
    first_pixel: Option<u32>,
    haystack: &[u32],
    haystack_stride: usize,
    clip: ClipRect,
) -> PixFindResult<Location> {
    check_search(
        needle_width,
        needle_height,
        needle.len(),
        haystack.len(),
        haystack_stride,
        clip,
    )?;
    let needle = PixelView::from_slice(needle, needle_width, needle_height)?;
    run(config, needle, first_pixel, haystack, haystack_stride, clip)
}

/// Dispatches a validated search to the configured kernel.
///
/// `first_pixel` is the needle's cached top-left pixel when the caller has
/// one; otherwise it is read from the view.
fn run(
    config: &SearchConfig,
    needle: PixelView<'_>,
    first_pixel: Option<u32>,
    haystack: &[u32],
    stride: usize,
    clip: ClipRect,
) -> PixFindResult<Location> {
    config.validate()?;
    let kernel = config.kernel.resolve();
    let _span = trace_span!(
        "pixfind_search",
        needle_width = needle.width(),
        needle_height = needle.height(),
        clip_width = clip.width,
        clip_height = clip.height,
        lanes = kernel.lanes()
    )
    .entered();

    let Some(first_pixel) = first_pixel.or_else(|| needle.get(0, 0)) else {
        return Ok(Location::NotFound);
    };
    let mut stats = ScanStats::default();
    let location = match kernel {
        KernelChoice::Wide => scan_wide(needle, first_pixel, haystack, stride, clip, &mut stats)?,
        _ => scan::<ScalarKernel>(needle, first_pixel, haystack, stride, clip, &mut stats),
    };

    trace_event!(
        "search_result",
        found = location.is_found(),
        lane_hits = stats.lane_hits,
        full_checks = stats.full_checks
    );
    Ok(location)
}

#[cfg(feature = "simd")]
fn scan_wide(
    needle: PixelView<'_>,
    first_pixel: u32,
    haystack: &[u32],
    stride: usize,
    clip: ClipRect,
    stats: &mut ScanStats,
) -> PixFindResult<Location> {
    Ok(scan::<crate::kernel::simd::WideKernel>(
        needle,
        first_pixel,
        haystack,
        stride,
        clip,
        stats,
    ))
}

#[cfg(not(feature = "simd"))]
fn scan_wide(
    _needle: PixelView<'_>,
    _first_pixel: u32,
    _haystack: &[u32],
    _stride: usize,
    _clip: ClipRect,
    _stats: &mut ScanStats,
) -> PixFindResult<Location> {
    Err(PixFindError::NotImplemented(
        "wide kernel requires the `simd` feature",
    ))
}

/// Reusable searcher owning a needle and a configuration.
pub struct Searcher {
    needle: Needle,
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the default configuration.
    pub fn new(needle: Needle) -> Self {
        Self {
            needle,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the needle being searched for.
    pub fn needle(&self) -> &Needle {
        &self.needle
    }

    /// Searches the whole haystack view.
    pub fn find(&self, haystack: PixelView<'_>) -> PixFindResult<Location> {
        self.find_in(haystack, haystack.full_rect())
    }

    /// Searches `clip` of the haystack view.
    pub fn find_in(&self, haystack: PixelView<'_>, clip: ClipRect) -> PixFindResult<Location> {
        search_view_with(
            &self.config,
            self.needle.view(),
            Some(self.needle.first_pixel()),
            haystack,
            clip,
        )
    }

    /// Searches a flat haystack with an explicit stride and clip rectangle.
    pub fn find_flat(
        &self,
        haystack: &[u32],
        stride: usize,
        clip: ClipRect,
    ) -> PixFindResult<Location> {
        search_flat(
            &self.config,
            self.needle.data(),
            self.needle.width(),
            self.needle.height(),
            Some(self.needle.first_pixel()),
            haystack,
            stride,
            clip,
        )
    }
}
