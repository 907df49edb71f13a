//! Convolution engine and the operators built directly on it.
//!
//! - `blur`/`gaussian_blur`: clamped sampling, every pixel processed.
//! - `sharpen`: per-channel, interior pixels only.
//! - `emboss`: channel-mean relief around mid-gray, interior pixels only.

pub mod engine;
pub mod kernel;

pub use engine::{convolve, convolve_plane, BorderMode};
pub use kernel::Kernel;

use crate::error::Result;
use crate::image::{mean_plane, RgbaImage, RgbaView};

/// 3×3 box blur with edge-clamped sampling.
pub fn blur(src: RgbaView<'_>) -> Result<RgbaImage> {
    convolve(src, &Kernel::box_blur3(), BorderMode::Clamp)
}

/// 3×3 binomial blur with edge-clamped sampling.
pub fn gaussian_blur(src: RgbaView<'_>) -> Result<RgbaImage> {
    convolve(src, &Kernel::gaussian3(), BorderMode::Clamp)
}

/// Unsharp cross kernel; border pixels keep zero RGB.
pub fn sharpen(src: RgbaView<'_>, amount: f32) -> Result<RgbaImage> {
    let kernel = Kernel::sharpen(amount)?;
    convolve(src, &kernel, BorderMode::Skip)
}

/// Grayscale relief of the unweighted channel mean, offset to 128.
pub fn emboss(src: RgbaView<'_>, strength: f32) -> Result<RgbaImage> {
    let kernel = Kernel::emboss().with_strength(strength)?;
    let plane = mean_plane(src);
    let response = convolve_plane(&plane, &kernel, BorderMode::Skip);
    Ok(engine::replicate_gray(src, &response))
}
