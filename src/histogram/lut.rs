//! 256-entry lookup tables and their application to RGB channels.
use super::bins::{Cdf, BINS};
use crate::image::rgba::{ALPHA, CHANNELS};
use crate::image::{RgbaImage, RgbaView};
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    table: [u8; BINS],
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl Lut {
    pub fn identity() -> Self {
        Self::from_fn(|i| i as f64)
    }

    /// Tabulate `f(i)` for i in 0..=255, rounding and clamping into [0, 255].
    pub fn from_fn(mut f: impl FnMut(u8) -> f64) -> Self {
        let mut table = [0u8; BINS];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = f(i as u8).round().clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    /// Normalise by the CDF's own span: `(cdf[i] − cdf[0]) / (cdf[255] − cdf[0])`.
    ///
    /// `None` when the span is zero (all mass in bin 0, or none at all).
    pub fn from_cdf_span(cdf: &Cdf) -> Option<Self> {
        let lo = cdf.first();
        let span = cdf.last().checked_sub(lo).filter(|&s| s > 0)? as f64;
        Some(Self::from_fn(|i| (cdf.get(i) - lo) as f64 / span * 255.0))
    }

    /// Classic equalisation: `(cdf[i] − cdf_min) / (total − cdf_min)`.
    ///
    /// `None` when every pixel shares one intensity.
    pub fn from_cdf_min(cdf: &Cdf, total: u64) -> Option<Self> {
        let cdf_min = cdf.min_nonzero();
        let span = total.checked_sub(cdf_min).filter(|&s| s > 0)? as f64;
        Some(Self::from_fn(|i| {
            (cdf.get(i) as f64 - cdf_min as f64) / span * 255.0
        }))
    }

    #[inline]
    pub fn map(&self, v: u8) -> u8 {
        self.table[v as usize]
    }

    pub fn is_monotone(&self) -> bool {
        self.table.windows(2).all(|w| w[0] <= w[1])
    }

    /// Map R, G and B through the table into a new image; alpha is copied.
    pub fn apply_rgb(&self, src: RgbaView<'_>) -> RgbaImage {
        let mut out = src.to_image();
        self.apply_rgb_in_place(&mut out);
        out
    }

    /// Map R, G and B in place, leaving alpha untouched.
    pub fn apply_rgb_in_place(&self, img: &mut RgbaImage) {
        let row_bytes = img.row_bytes();
        img.as_bytes_mut()
            .par_chunks_mut(row_bytes)
            .for_each(|row| {
                for px in row.chunks_exact_mut(CHANNELS) {
                    for c in &mut px[..ALPHA] {
                        *c = self.table[*c as usize];
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::Histogram;

    #[test]
    fn identity_maps_every_value_to_itself() {
        let lut = Lut::identity();
        assert!((0..=255u8).all(|v| lut.map(v) == v));
    }

    #[test]
    fn span_lut_is_none_for_mass_in_bin_zero() {
        let mut hist = Histogram::new();
        hist.accumulate(0);
        assert!(Lut::from_cdf_span(&hist.cdf()).is_none());
    }

    #[test]
    fn span_lut_stretches_to_full_range() {
        let mut hist = Histogram::new();
        hist.accumulate(0);
        hist.accumulate(100);
        let lut = Lut::from_cdf_span(&hist.cdf()).unwrap();
        assert_eq!(lut.map(0), 0);
        assert_eq!(lut.map(99), 0);
        assert_eq!(lut.map(100), 255);
        assert!(lut.is_monotone());
    }

    #[test]
    fn min_lut_spreads_two_levels() {
        let mut hist = Histogram::new();
        for _ in 0..3 {
            hist.accumulate(60);
        }
        hist.accumulate(90);
        let lut = Lut::from_cdf_min(&hist.cdf(), hist.total()).unwrap();
        assert_eq!(lut.map(10), 0);
        assert_eq!(lut.map(60), 0);
        assert_eq!(lut.map(90), 255);
    }

    #[test]
    fn apply_keeps_alpha() {
        let img = RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]).unwrap();
        let lut = Lut::from_fn(|i| 255.0 - i as f64);
        let out = lut.apply_rgb(img.as_view());
        assert_eq!(out.pixel(0, 0), [245, 235, 225, 40]);
    }
}
