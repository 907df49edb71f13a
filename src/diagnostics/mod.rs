//! Per-call stage timings attached to the pipeline reports.
pub mod timing;

pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
