//! Grid partition of a buffer into disjoint half-open tiles.
//!
//! Tile size is `ceil(width / grid) × ceil(height / grid)`. Tiles on the last
//! row/column are clipped to the buffer instead of padded, and grid cells
//! that would start past the edge are dropped, so the union of the regions
//! is exactly the buffer.
use crate::error::{Error, Result};
use serde::Serialize;

/// Half-open rectangle `[x1, x2) × [y1, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileRegion {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl TileRegion {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Self {
        debug_assert!(x1 < x2 && y1 < y2, "tile region must be non-empty");
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.x2 - self.x1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y2 - self.y1
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }
}

#[derive(Clone, Debug)]
pub struct TileGrid {
    pub tile_w: usize,
    pub tile_h: usize,
    pub cols: usize,
    pub rows: usize,
    regions: Vec<TileRegion>,
}

impl TileGrid {
    /// Partition a `width × height` buffer into at most `grid × grid` tiles.
    pub fn partition(width: usize, height: usize, grid: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }
        if grid == 0 {
            return Err(Error::OutOfRange {
                name: "grid_size",
                value: 0.0,
                expected: "a positive integer",
            });
        }
        let tile_w = width.div_ceil(grid);
        let tile_h = height.div_ceil(grid);
        let cols = width.div_ceil(tile_w);
        let rows = height.div_ceil(tile_h);

        let mut regions = Vec::with_capacity(cols * rows);
        for ty in 0..rows {
            let y1 = ty * tile_h;
            let y2 = (y1 + tile_h).min(height);
            for tx in 0..cols {
                let x1 = tx * tile_w;
                let x2 = (x1 + tile_w).min(width);
                regions.push(TileRegion::new(x1, y1, x2, y2));
            }
        }

        Ok(Self {
            tile_w,
            tile_h,
            cols,
            rows,
            regions,
        })
    }

    pub fn regions(&self) -> &[TileRegion] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Index into `regions()` of the tile covering `(x, y)`.
    #[inline]
    pub fn tile_index(&self, x: usize, y: usize) -> usize {
        (y / self.tile_h) * self.cols + x / self.tile_w
    }
}
