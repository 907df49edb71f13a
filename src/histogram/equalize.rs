//! Whole-image histogram equalization.
//!
//! One luma histogram over every pixel, a classic `cdf_min`-normalised LUT,
//! and the same LUT applied to each of R, G and B. Applying a luma-derived
//! table per channel can shift colour balance on saturated images.
use super::bins::Histogram;
use super::lut::Lut;
use crate::error::Result;
use crate::image::{RgbaImage, RgbaView};
use log::debug;

/// Luma histogram of the whole buffer; bins sum to `width × height`.
pub fn get_histogram(src: RgbaView<'_>) -> Histogram {
    Histogram::from_luma(src)
}

/// Equalization LUT for `src`, identity when every pixel shares one luma.
pub fn equalization_lut(src: RgbaView<'_>) -> Lut {
    let hist = get_histogram(src);
    let total = hist.total();
    match Lut::from_cdf_min(&hist.cdf(), total) {
        Some(lut) => lut,
        None => {
            debug!("equalize: single-intensity image of {total} px, using identity LUT");
            Lut::identity()
        }
    }
}

pub fn equalize(src: RgbaView<'_>) -> Result<RgbaImage> {
    Ok(equalization_lut(src).apply_rgb(src))
}
