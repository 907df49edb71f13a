//! Histogram engines: bins, CDF, lookup tables, tile grid, CLAHE and global
//! equalization.

pub mod bins;
pub mod clahe;
pub mod equalize;
pub mod lut;
pub mod tiles;

pub use bins::{Cdf, Histogram, BINS};
pub use clahe::{clahe, clahe_with_report, ClaheParams, ClaheReport};
pub use equalize::{equalization_lut, equalize, get_histogram};
pub use lut::Lut;
pub use tiles::{TileGrid, TileRegion};
