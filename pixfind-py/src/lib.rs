//! Python bindings for the pixfind exact pixel search library.
//!
//! Pixel buffers are 2D `uint32` numpy arrays (height x width) in C order.

use numpy::{PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use pixfind::{
    ClipRect, KernelChoice, Location as RustLocation, Needle as RustNeedle, PixFindError,
    PixelView, SearchConfig, Searcher as RustSearcher,
};

/// Convert a PixFindError to a Python exception.
fn to_py_err(err: PixFindError) -> PyErr {
    match err {
        PixFindError::NotImplemented(_) | PixFindError::ImageIo { .. } => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_kernel(kernel: &str) -> PyResult<KernelChoice> {
    match kernel.to_lowercase().as_str() {
        "auto" => Ok(KernelChoice::Auto),
        "scalar" => Ok(KernelChoice::Scalar),
        "wide" => Ok(KernelChoice::Wide),
        _ => Err(PyValueError::new_err(
            "kernel must be 'auto', 'scalar' or 'wide'",
        )),
    }
}

fn clip_from_tuple(clip: Option<(usize, usize, usize, usize)>, view: &PixelView<'_>) -> ClipRect {
    match clip {
        Some((x, y, width, height)) => ClipRect::new(x, y, width, height),
        None => view.full_rect(),
    }
}

/// Search result; `x` and `y` are -1 when nothing was found.
#[pyclass]
#[derive(Clone)]
pub struct Location {
    /// True if the needle was found.
    #[pyo3(get)]
    pub found: bool,
    /// Top-left x coordinate of the match.
    #[pyo3(get)]
    pub x: i64,
    /// Top-left y coordinate of the match.
    #[pyo3(get)]
    pub y: i64,
}

#[pymethods]
impl Location {
    fn __repr__(&self) -> String {
        format!(
            "Location(found={}, x={}, y={})",
            if self.found { "True" } else { "False" },
            self.x,
            self.y
        )
    }

    fn __bool__(&self) -> bool {
        self.found
    }
}

impl From<RustLocation> for Location {
    fn from(loc: RustLocation) -> Self {
        let (x, y) = loc.to_signed();
        Self {
            found: loc.is_found(),
            x,
            y,
        }
    }
}

/// A needle pattern to search for.
#[pyclass]
pub struct Needle {
    inner: RustNeedle,
}

#[pymethods]
impl Needle {
    /// Create a needle from a 2D uint32 numpy array (height x width).
    #[new]
    fn new(pixels: PyReadonlyArray2<'_, u32>) -> PyResult<Self> {
        let shape = pixels.shape();
        let height = shape[0];
        let width = shape[1];
        let data: Vec<u32> = pixels.as_slice()?.to_vec();
        let inner = RustNeedle::new(data, width, height).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Load a needle from an image file, packing RGBA8 pixels into uint32.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let inner = pixfind::io::load_rgba_needle(path).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Needle width in pixels.
    #[getter]
    fn width(&self) -> usize {
        self.inner.width()
    }

    /// Needle height in pixels.
    #[getter]
    fn height(&self) -> usize {
        self.inner.height()
    }

    fn __repr__(&self) -> String {
        format!("Needle({}x{})", self.inner.width(), self.inner.height())
    }
}

/// Reusable searcher for one needle.
#[pyclass]
pub struct Searcher {
    inner: RustSearcher,
}

#[pymethods]
impl Searcher {
    /// Create a searcher.
    ///
    /// Args:
    ///     needle: Needle to search for
    ///     kernel: "auto", "scalar" or "wide" (default: "auto")
    #[new]
    #[pyo3(signature = (needle, kernel = "auto"))]
    fn new(needle: &Needle, kernel: &str) -> PyResult<Self> {
        let config = SearchConfig {
            kernel: parse_kernel(kernel)?,
        };
        config.validate().map_err(to_py_err)?;
        let inner = RustSearcher::new(needle.inner.clone()).with_config(config);
        Ok(Self { inner })
    }

    /// Find the first match in a haystack array.
    ///
    /// Args:
    ///     haystack: 2D uint32 numpy array (height x width)
    ///     clip: Optional (x, y, width, height) search region
    #[pyo3(signature = (haystack, clip = None))]
    fn find(
        &self,
        haystack: PyReadonlyArray2<'_, u32>,
        clip: Option<(usize, usize, usize, usize)>,
    ) -> PyResult<Location> {
        let shape = haystack.shape();
        let view = PixelView::from_slice(haystack.as_slice()?, shape[1], shape[0])
            .map_err(to_py_err)?;
        let clip = clip_from_tuple(clip, &view);
        let loc = self.inner.find_in(view, clip).map_err(to_py_err)?;
        Ok(loc.into())
    }

    fn __repr__(&self) -> String {
        let needle = self.inner.needle();
        format!("Searcher(needle={}x{})", needle.width(), needle.height())
    }
}

/// Find the first exact occurrence of `needle` in `haystack`.
///
/// Args:
///     needle: 2D uint32 numpy array (height x width)
///     haystack: 2D uint32 numpy array (height x width)
///     clip: Optional (x, y, width, height) search region
///     kernel: "auto", "scalar" or "wide" (default: "auto")
///
/// Returns:
///     Location with found, x and y
#[pyfunction]
#[pyo3(signature = (needle, haystack, clip = None, kernel = "auto"))]
fn search(
    needle: PyReadonlyArray2<'_, u32>,
    haystack: PyReadonlyArray2<'_, u32>,
    clip: Option<(usize, usize, usize, usize)>,
    kernel: &str,
) -> PyResult<Location> {
    let needle = Needle::new(needle)?;
    let searcher = Searcher::new(&needle, kernel)?;
    searcher.find(haystack, clip)
}

/// Python module for pixfind.
#[pymodule]
fn _pixfind(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Location>()?;
    m.add_class::<Needle>()?;
    m.add_class::<Searcher>()?;
    m.add_function(wrap_pyfunction!(search, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
