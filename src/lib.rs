#![doc = include_str!("../README.md")]

pub mod config;
pub mod convolution;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod histogram;
pub mod image;
pub mod pipeline;
pub mod tone;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::image::{RgbaImage, RgbaView};
pub use crate::pipeline::{Operation, OperationReport};

// Edge detection.
pub use crate::edges::{canny, canny_with_report, laplacian, prewitt, sobel, CannyParams};

// Contrast enhancement.
pub use crate::histogram::{clahe, clahe_with_report, equalize, get_histogram, ClaheParams};

// Tone curves.
pub use crate::tone::{brightness, contrast, gamma_correction, sigmoid_contrast};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_pipelines::prelude::*;
///
/// # fn main() -> pixel_pipelines::Result<()> {
/// let (w, h) = (16usize, 16usize);
/// let data = vec![128u8; w * h * 4];
/// let view = RgbaView::new(w, h, &data)?;
///
/// let edges = canny(view, &CannyParams::default())?;
/// let enhanced = clahe(view, &ClaheParams::new(2.0, 4))?;
/// assert_eq!(edges.as_bytes().len(), enhanced.as_bytes().len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::{canny, laplacian, prewitt, sobel, CannyParams};
    pub use crate::histogram::{clahe, equalize, get_histogram, ClaheParams};
    pub use crate::image::{RgbaImage, RgbaView};
    pub use crate::tone::{gamma_correction, sigmoid_contrast};
}
