//! Simplified Canny: box blur → Sobel → dual-threshold classification.
//!
//! There is no non-maximum suppression and no hysteresis tracking; every
//! pixel is classified on its own magnitude:
//!
//! - `mag > high`        → `Strong`, written as opaque white (255)
//! - `low < mag <= high` → `Weak`, written as opaque mid-gray (128)
//! - otherwise           → `Suppressed`, transparent black by default
//!
//! Threshold ordering is not enforced. With `low > high` the weak band is
//! empty and only strong pixels survive.
use super::grad::sobel_gradients;
use crate::convolution::{convolve, BorderMode, Kernel};
use crate::diagnostics::TimingBreakdown;
use crate::error::{ensure_finite, Result};
use crate::image::rgba::CHANNELS;
use crate::image::{luma_plane, ImageView, RgbaImage, RgbaView};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const STRONG_EDGE: u8 = 255;
pub const WEAK_EDGE: u8 = 128;

/// Per-pixel outcome of the dual-threshold stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    Strong,
    Weak,
    Suppressed,
}

impl EdgeClass {
    #[inline]
    pub fn classify(magnitude: f32, low: f32, high: f32) -> Self {
        if magnitude > high {
            EdgeClass::Strong
        } else if magnitude > low {
            EdgeClass::Weak
        } else {
            EdgeClass::Suppressed
        }
    }
}

/// Alpha written for suppressed pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressedAlpha {
    /// Fully transparent, matching a zero-filled output buffer.
    #[default]
    Transparent,
    /// Keep the source pixel's alpha.
    Source,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    pub low_threshold: f32,
    pub high_threshold: f32,
    pub suppressed_alpha: SuppressedAlpha,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
            suppressed_alpha: SuppressedAlpha::Transparent,
        }
    }
}

impl CannyParams {
    pub fn new(low_threshold: f32, high_threshold: f32) -> Self {
        Self {
            low_threshold,
            high_threshold,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_finite("low_threshold", self.low_threshold)?;
        ensure_finite("high_threshold", self.high_threshold)?;
        if self.low_threshold > self.high_threshold {
            warn!(
                "canny: low threshold {} exceeds high threshold {}; weak band is empty",
                self.low_threshold, self.high_threshold
            );
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyReport {
    pub strong: usize,
    pub weak: usize,
    pub suppressed: usize,
    pub timing: TimingBreakdown,
}

fn render(class: EdgeClass, source_alpha: u8, policy: SuppressedAlpha) -> [u8; 4] {
    match class {
        EdgeClass::Strong => [STRONG_EDGE, STRONG_EDGE, STRONG_EDGE, 255],
        EdgeClass::Weak => [WEAK_EDGE, WEAK_EDGE, WEAK_EDGE, 255],
        EdgeClass::Suppressed => match policy {
            SuppressedAlpha::Transparent => [0, 0, 0, 0],
            SuppressedAlpha::Source => [0, 0, 0, source_alpha],
        },
    }
}

/// Run the pipeline and also return per-class counts and stage timings.
pub fn canny_with_report(src: RgbaView<'_>, params: &CannyParams) -> Result<(RgbaImage, CannyReport)> {
    params.validate()?;
    let (w, h) = (src.width(), src.height());
    let mut timing = TimingBreakdown::default();

    let blurred = timing.time("blur", || {
        convolve(src, &Kernel::box_blur3(), BorderMode::Clamp)
    })?;
    let grad = timing.time("gradient", || sobel_gradients(&luma_plane(blurred.as_view())));

    let classes: Vec<EdgeClass> = timing.time("classify", || {
        grad.mag
            .data
            .par_iter()
            .map(|&m| EdgeClass::classify(m, params.low_threshold, params.high_threshold))
            .collect()
    });

    let out = timing.time("render", || {
        let mut out = RgbaImage::blank(w, h);
        let row_bytes = out.row_bytes();
        out.as_bytes_mut()
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, dst)| {
                for (x, px) in dst.chunks_exact_mut(CHANNELS).enumerate() {
                    let class = classes[y * w + x];
                    px.copy_from_slice(&render(class, src.alpha(x, y), params.suppressed_alpha));
                }
            });
        out
    });

    let mut report = CannyReport {
        timing: timing.finish(),
        ..CannyReport::default()
    };
    for class in &classes {
        match class {
            EdgeClass::Strong => report.strong += 1,
            EdgeClass::Weak => report.weak += 1,
            EdgeClass::Suppressed => report.suppressed += 1,
        }
    }
    debug!(
        "canny: {}x{} strong={} weak={} suppressed={} in {:.3} ms",
        w, h, report.strong, report.weak, report.suppressed, report.timing.total_ms
    );
    Ok((out, report))
}

pub fn canny(src: RgbaView<'_>, params: &CannyParams) -> Result<RgbaImage> {
    canny_with_report(src, params).map(|(img, _)| img)
}
