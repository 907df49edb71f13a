//! Edge detection: gradients, derivative edge maps and simplified Canny.
//!
//! State flow is linear:
//! `RGBA → intensity plane → (gx, gy) → magnitude [→ direction] → RGBA`.
//!
//! - Gradient computation (Sobel/Prewitt/Scharr) returning `gx`, `gy`,
//!   magnitude and direction planes.
//! - Sobel/Prewitt/Laplacian edge maps replicated into R, G, B with the
//!   source alpha.
//! - Canny built from a 3×3 box blur, Sobel and per-pixel dual thresholds.
//!
//! Borders are handled by clamping indices (replicate).

pub mod canny;
pub mod grad;
pub mod operators;

pub use canny::{canny, canny_with_report, CannyParams, CannyReport, EdgeClass, SuppressedAlpha};
pub use grad::{image_gradients, prewitt_gradients, sobel_gradients, Grad, GradientKernel};
pub use operators::{gradient_edges, laplacian, laplacian_with_kernel, prewitt, sobel};
