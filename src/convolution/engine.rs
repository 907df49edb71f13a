//! Kernel application over RGBA buffers and intensity planes.
//!
//! Two border policies:
//! - `BorderMode::Clamp` samples with coordinates clamped into the image, so
//!   every pixel (borders included) gets a response. Used by smoothing.
//! - `BorderMode::Skip` only evaluates pixels at least one kernel radius
//!   from every edge. Border pixels keep zero RGB. Used by sharpen/emboss.
//!
//! Alpha is copied from the source for every pixel under both policies.
//! Rows are independent and evaluated in parallel.
use super::kernel::Kernel;
use crate::error::Result;
use crate::image::rgba::{ALPHA, CHANNELS};
use crate::image::{ImageF32, ImageView, RgbaImage, RgbaView};
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Leave pixels within the kernel radius of an edge unprocessed.
    Skip,
    /// Replicate edge samples so every pixel is processed.
    #[default]
    Clamp,
}

#[inline]
fn is_interior(x: usize, y: usize, w: usize, h: usize, r: usize) -> bool {
    x >= r && y >= r && x + r < w && y + r < h
}

#[inline]
fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convolve each of R, G, B independently; alpha passes through.
pub fn convolve(src: RgbaView<'_>, kernel: &Kernel, border: BorderMode) -> Result<RgbaImage> {
    let (w, h) = (src.width(), src.height());
    let r = kernel.radius();
    let mut out = RgbaImage::blank(w, h);
    let row_bytes = out.row_bytes();

    out.as_bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, dst)| {
            let src_row = src.row(y);
            for x in 0..w {
                let o = x * CHANNELS;
                dst[o + ALPHA] = src_row[o + ALPHA];
                let process = match border {
                    BorderMode::Clamp => true,
                    BorderMode::Skip => is_interior(x, y, w, h, r),
                };
                if !process {
                    continue;
                }
                for c in 0..ALPHA {
                    let v = kernel.respond(x as isize, y as isize, |sx, sy| {
                        src.pixel_clamped(sx, sy)[c] as f32
                    });
                    dst[o + c] = to_channel(v);
                }
            }
        });

    Ok(out)
}

/// Convolve a single-channel plane, returning unclamped responses.
///
/// Under `BorderMode::Skip` border samples are `None`.
pub fn convolve_plane(plane: &ImageF32, kernel: &Kernel, border: BorderMode) -> Vec<Option<f32>> {
    let (w, h) = (plane.w, plane.h);
    let r = kernel.radius();
    let mut out = vec![None; w * h];
    if w == 0 || h == 0 {
        return out;
    }

    out.par_chunks_mut(w).enumerate().for_each(|(y, dst)| {
        for (x, slot) in dst.iter_mut().enumerate() {
            if border == BorderMode::Skip && !is_interior(x, y, w, h, r) {
                continue;
            }
            *slot = Some(kernel.respond(x as isize, y as isize, |sx, sy| {
                plane.get_clamped(sx, sy)
            }));
        }
    });
    out
}

/// Write a per-pixel intensity into R, G and B, keeping the source alpha.
///
/// `None` leaves RGB at zero.
pub(crate) fn replicate_gray(src: RgbaView<'_>, values: &[Option<f32>]) -> RgbaImage {
    let w = src.width();
    let mut out = RgbaImage::blank(w, src.height());
    let row_bytes = out.row_bytes();
    out.as_bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, dst)| {
            let src_row = src.row(y);
            for x in 0..w {
                let o = x * CHANNELS;
                if let Some(v) = values[y * w + x] {
                    let g = to_channel(v);
                    dst[o] = g;
                    dst[o + 1] = g;
                    dst[o + 2] = g;
                }
                dst[o + ALPHA] = src_row[o + ALPHA];
            }
        });
    out
}
