//! Clip rectangles and search results.

/// Sub-region of the haystack coordinate space to search within.
///
/// A match is only reported when the whole needle placement lies inside the
/// rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClipRect {
    /// Left edge in pixels.
    pub x: usize,
    /// Top edge in pixels.
    pub y: usize,
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
}

impl ClipRect {
    /// Creates a clip rectangle.
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, or `None` on overflow.
    pub fn right(&self) -> Option<usize> {
        self.x.checked_add(self.width)
    }

    /// Exclusive bottom edge, or `None` on overflow.
    pub fn bottom(&self) -> Option<usize> {
        self.y.checked_add(self.height)
    }
}

/// Outcome of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// Top-left corner of the first match in row-major order.
    Found { x: usize, y: usize },
    /// The clip rectangle was exhausted without a match.
    NotFound,
}

impl Location {
    /// Signed sentinel reported for [`Location::NotFound`].
    pub const NOT_FOUND_SENTINEL: (i64, i64) = (-1, -1);

    /// Returns true if a match was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Location::Found { .. })
    }

    /// Returns the match coordinates, if any.
    pub fn coords(&self) -> Option<(usize, usize)> {
        match *self {
            Location::Found { x, y } => Some((x, y)),
            Location::NotFound => None,
        }
    }

    /// Returns `(x, y)`, or `(-1, -1)` when nothing was found.
    pub fn to_signed(&self) -> (i64, i64) {
        match *self {
            Location::Found { x, y } => (x as i64, y as i64),
            Location::NotFound => Self::NOT_FOUND_SENTINEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_sentinel() {
        assert_eq!(Location::NotFound.to_signed(), (-1, -1));
        assert!(!Location::NotFound.is_found());
        assert_eq!(Location::NotFound.coords(), None);
    }

    #[test]
    fn found_reports_coordinates() {
        let loc = Location::Found { x: 2, y: 1 };
        assert!(loc.is_found());
        assert_eq!(loc.coords(), Some((2, 1)));
        assert_eq!(loc.to_signed(), (2, 1));
    }

    #[test]
    fn edges_detect_overflow() {
        assert_eq!(ClipRect::new(usize::MAX, 0, 1, 1).right(), None);
        assert_eq!(ClipRect::new(1, 2, 3, 4).bottom(), Some(6));
    }
}
