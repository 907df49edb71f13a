use super::tiles::TileRegion;
use crate::image::{luma_u8, ImageView, RgbaView};

pub const BINS: usize = 256;

/// 256-bin intensity histogram; bins always sum to the pixel count it was
/// built from, until `clip` discards mass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    bins: [u32; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: [0; BINS] }
    }
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounded perceptual luma of every pixel in `region`.
    pub fn from_luma_region(view: RgbaView<'_>, region: &TileRegion) -> Self {
        let mut hist = Self::new();
        let bytes = view.as_bytes();
        let w = view.width();
        for y in region.y1..region.y2 {
            let start = (y * w + region.x1) * 4;
            let end = (y * w + region.x2) * 4;
            for px in bytes[start..end].chunks_exact(4) {
                hist.accumulate(luma_u8(px[0], px[1], px[2]));
            }
        }
        hist
    }

    /// Rounded perceptual luma of the whole buffer.
    pub fn from_luma(view: RgbaView<'_>) -> Self {
        let mut hist = Self::new();
        for px in view.as_bytes().chunks_exact(4) {
            hist.accumulate(luma_u8(px[0], px[1], px[2]));
        }
        hist
    }

    #[inline]
    pub fn accumulate(&mut self, value: u8) {
        self.bins[value as usize] += 1;
    }

    pub fn bins(&self) -> &[u32; BINS] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&b| b as u64).sum()
    }

    /// Mean count over all 256 bins.
    pub fn mean(&self) -> f64 {
        self.total() as f64 / BINS as f64
    }

    /// Cap every bin at `limit` and return the discarded mass.
    ///
    /// The excess is dropped, not redistributed over the other bins.
    pub fn clip(&mut self, limit: u32) -> u64 {
        let mut excess = 0u64;
        for bin in self.bins.iter_mut() {
            if *bin > limit {
                excess += (*bin - limit) as u64;
                *bin = limit;
            }
        }
        excess
    }

    pub fn cdf(&self) -> Cdf {
        let mut acc = [0u64; BINS];
        let mut running = 0u64;
        for (dst, &b) in acc.iter_mut().zip(self.bins.iter()) {
            running += b as u64;
            *dst = running;
        }
        Cdf { acc }
    }
}

/// Running sum of a histogram.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cdf {
    acc: [u64; BINS],
}

impl Cdf {
    #[inline]
    pub fn get(&self, i: u8) -> u64 {
        self.acc[i as usize]
    }

    pub fn first(&self) -> u64 {
        self.acc[0]
    }

    pub fn last(&self) -> u64 {
        self.acc[BINS - 1]
    }

    /// Smallest non-zero cumulative count, or 0 for an empty histogram.
    pub fn min_nonzero(&self) -> u64 {
        self.acc.iter().copied().find(|&v| v > 0).unwrap_or(0)
    }

    pub fn values(&self) -> &[u64; BINS] {
        &self.acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbaImage;

    #[test]
    fn clip_caps_without_redistribution() {
        let mut hist = Histogram::new();
        for _ in 0..10 {
            hist.accumulate(7);
        }
        hist.accumulate(9);
        let excess = hist.clip(3);
        assert_eq!(excess, 7);
        assert_eq!(hist.bins()[7], 3);
        assert_eq!(hist.bins()[9], 1);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn cdf_is_monotone_and_ends_at_total() {
        let mut hist = Histogram::new();
        for v in [0u8, 3, 3, 200, 255] {
            hist.accumulate(v);
        }
        let cdf = hist.cdf();
        assert!(cdf.values().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cdf.first(), 1);
        assert_eq!(cdf.get(3), 3);
        assert_eq!(cdf.last(), 5);
    }

    #[test]
    fn region_histogram_counts_only_the_region() {
        let mut img = RgbaImage::new(4, 2).unwrap();
        img.set_pixel(3, 1, [255, 255, 255, 255]);
        let region = TileRegion::new(2, 0, 4, 2);
        let hist = Histogram::from_luma_region(img.as_view(), &region);
        assert_eq!(hist.total(), 4);
        assert_eq!(hist.bins()[255], 1);
        assert_eq!(hist.bins()[0], 3);
    }

    #[test]
    fn min_nonzero_skips_leading_empty_bins() {
        let mut hist = Histogram::new();
        hist.accumulate(10);
        hist.accumulate(10);
        assert_eq!(hist.cdf().min_nonzero(), 2);
        assert_eq!(Histogram::new().cdf().min_nonzero(), 0);
    }
}
