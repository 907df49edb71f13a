//! Image gradients (Sobel/Prewitt/Scharr) with magnitude and direction.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with border clamping, so every
//!   pixel including the outer frame gets a response.
//! - Outputs per-pixel `gx`, `gy`, `mag = sqrt(gx^2+gy^2)` and
//!   `dir = atan2(gy, gx)` in [−π, π].
//!
//! Magnitudes are left unclamped here; the operators clamp when writing
//! pixels and Canny thresholds the raw value.
//!
//! Complexity: O(W·H) per pass, rows evaluated in parallel.
use crate::image::{ImageF32, ImageView};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const PREWITT_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
const PREWITT_KERNEL_Y: Kernel3 = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKernel {
    #[default]
    Sobel,
    Prewitt,
    /// Better rotational symmetry than Sobel.
    Scharr,
}

impl GradientKernel {
    fn pair(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            GradientKernel::Sobel => (&SOBEL_KERNEL_X, &SOBEL_KERNEL_Y),
            GradientKernel::Prewitt => (&PREWITT_KERNEL_X, &PREWITT_KERNEL_Y),
            GradientKernel::Scharr => (&SCHARR_KERNEL_X, &SCHARR_KERNEL_Y),
        }
    }
}

/// Per-pixel gradient planes.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
    /// Direction `atan2(gy, gx)` in radians
    pub dir: ImageF32,
}

fn gradients_with_kernels(l: &ImageF32, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    let mut dir = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag, dir };
    }

    gx.data
        .par_chunks_mut(w)
        .zip(gy.data.par_chunks_mut(w))
        .zip(mag.data.par_chunks_mut(w))
        .zip(dir.data.par_chunks_mut(w))
        .enumerate()
        .for_each(|(y, (((out_gx, out_gy), out_mag), out_dir))| {
            let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
            let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
            for x in 0..w {
                let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

                let mut sum_x = 0.0;
                let mut sum_y = 0.0;
                for (ky, yy_row) in rows.iter().enumerate() {
                    let kx_row = &kernel_x[ky];
                    let ky_row = &kernel_y[ky];
                    sum_x += yy_row[x_idx[0]] * kx_row[0]
                        + yy_row[x_idx[1]] * kx_row[1]
                        + yy_row[x_idx[2]] * kx_row[2];
                    sum_y += yy_row[x_idx[0]] * ky_row[0]
                        + yy_row[x_idx[1]] * ky_row[1]
                        + yy_row[x_idx[2]] * ky_row[2];
                }

                out_gx[x] = sum_x;
                out_gy[x] = sum_y;
                out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
                out_dir[x] = sum_y.atan2(sum_x);
            }
        });

    Grad { gx, gy, mag, dir }
}

/// Compute gradients of a single-channel plane with the chosen kernel pair.
pub fn image_gradients(l: &ImageF32, kernel: GradientKernel) -> Grad {
    let (kx, ky) = kernel.pair();
    gradients_with_kernels(l, kx, ky)
}

/// Compute Sobel gradients on a single-channel float plane.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    image_gradients(l, GradientKernel::Sobel)
}

/// Compute Prewitt gradients (unweighted 3×3 central differences).
pub fn prewitt_gradients(l: &ImageF32) -> Grad {
    image_gradients(l, GradientKernel::Prewitt)
}
