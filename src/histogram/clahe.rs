//! Tiled contrast-limited histogram equalization.
//!
//! Per tile:
//! 1. 256-bin histogram of rounded perceptual luma.
//! 2. Clip every bin at `max(1, round(clip_limit × mean_bin_count))`; the
//!    excess is discarded.
//! 3. LUT from the clipped CDF normalised by its own span
//!    (`cdf[0]`..`cdf[255]`). A zero span maps to the identity.
//! 4. Each of R, G, B is looked up with its own value; alpha is copied.
//!
//! Tiles are equalized independently with no interpolation across tile
//! borders, so block seams are expected. LUTs are derived in parallel per
//! tile and applied in parallel per row.
use super::bins::Histogram;
use super::lut::Lut;
use super::tiles::TileGrid;
use crate::diagnostics::TimingBreakdown;
use crate::error::{ensure_finite, Error, Result};
use crate::image::rgba::{ALPHA, CHANNELS};
use crate::image::{ImageView, RgbaImage, RgbaView};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaheParams {
    /// Multiplier on the mean bin count; 2.0–4.0 is typical.
    pub clip_limit: f32,
    /// Tiles per axis; 4–16 is typical.
    pub grid_size: usize,
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: 2.0,
            grid_size: 8,
        }
    }
}

impl ClaheParams {
    pub fn new(clip_limit: f32, grid_size: usize) -> Self {
        Self {
            clip_limit,
            grid_size,
        }
    }

    fn validate(&self) -> Result<()> {
        let clip = ensure_finite("clip_limit", self.clip_limit)?;
        if clip <= 0.0 {
            return Err(Error::OutOfRange {
                name: "clip_limit",
                value: clip as f64,
                expected: "a positive real",
            });
        }
        if self.grid_size == 0 {
            return Err(Error::OutOfRange {
                name: "grid_size",
                value: 0.0,
                expected: "a positive integer",
            });
        }
        if clip < 1.0 {
            warn!("clahe: clip limit {clip} < 1.0 flattens every tile");
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaheReport {
    pub tiles: usize,
    /// Tiles whose clipped CDF had zero span and fell back to identity.
    pub degenerate_tiles: usize,
    /// Histogram mass discarded by clipping, summed over tiles.
    pub clipped_mass: u64,
    pub timing: TimingBreakdown,
}

struct TileLut {
    lut: Lut,
    degenerate: bool,
    clipped: u64,
}

/// Bin cap for a tile histogram.
#[inline]
pub fn clip_threshold(hist: &Histogram, clip_limit: f32) -> u32 {
    let limit = (clip_limit as f64 * hist.mean()).round();
    (limit as u32).max(1)
}

fn tile_lut(hist: &mut Histogram, clip_limit: f32) -> TileLut {
    let limit = clip_threshold(hist, clip_limit);
    let clipped = hist.clip(limit);
    match Lut::from_cdf_span(&hist.cdf()) {
        Some(lut) => TileLut {
            lut,
            degenerate: false,
            clipped,
        },
        None => TileLut {
            lut: Lut::identity(),
            degenerate: true,
            clipped,
        },
    }
}

pub fn clahe_with_report(src: RgbaView<'_>, params: &ClaheParams) -> Result<(RgbaImage, ClaheReport)> {
    params.validate()?;
    let (w, h) = (src.width(), src.height());
    let grid = TileGrid::partition(w, h, params.grid_size)?;
    let mut timing = TimingBreakdown::default();

    let luts: Vec<TileLut> = timing.time("tile_luts", || {
        grid.regions()
            .par_iter()
            .map(|region| {
                let mut hist = Histogram::from_luma_region(src, region);
                tile_lut(&mut hist, params.clip_limit)
            })
            .collect()
    });

    let out = timing.time("remap", || {
        let mut out = RgbaImage::blank(w, h);
        let row_bytes = out.row_bytes();
        out.as_bytes_mut()
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, dst)| {
                let src_row = src.row(y);
                for (x, (o, s)) in dst
                    .chunks_exact_mut(CHANNELS)
                    .zip(src_row.chunks_exact(CHANNELS))
                    .enumerate()
                {
                    let lut = &luts[grid.tile_index(x, y)].lut;
                    for c in 0..ALPHA {
                        o[c] = lut.map(s[c]);
                    }
                    o[ALPHA] = s[ALPHA];
                }
            });
        out
    });

    let report = ClaheReport {
        tiles: luts.len(),
        degenerate_tiles: luts.iter().filter(|t| t.degenerate).count(),
        clipped_mass: luts.iter().map(|t| t.clipped).sum(),
        timing: timing.finish(),
    };
    debug!(
        "clahe: {}x{} grid={} tiles={} ({}x{} px) degenerate={} clipped={}",
        w,
        h,
        params.grid_size,
        report.tiles,
        grid.tile_w,
        grid.tile_h,
        report.degenerate_tiles,
        report.clipped_mass
    );
    Ok((out, report))
}

pub fn clahe(src: RgbaView<'_>, params: &ClaheParams) -> Result<RgbaImage> {
    clahe_with_report(src, params).map(|(img, _)| img)
}
