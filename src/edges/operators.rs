//! First- and second-derivative edge maps written back as gray RGBA.
//!
//! Sobel/Prewitt reduce neighbours with perceptual luma; Laplacian reduces
//! them with the unweighted channel mean. Output R = G = B = clamped
//! magnitude, alpha copied from the input.
use super::grad::{image_gradients, GradientKernel};
use crate::convolution::engine::replicate_gray;
use crate::convolution::{convolve_plane, BorderMode, Kernel};
use crate::error::{Error, Result};
use crate::image::{luma_plane, mean_plane, RgbaImage, RgbaView};
use log::debug;

/// Gradient magnitude of the luma plane for the given kernel pair.
pub fn gradient_edges(src: RgbaView<'_>, kernel: GradientKernel) -> Result<RgbaImage> {
    let plane = luma_plane(src);
    let grad = image_gradients(&plane, kernel);
    let values: Vec<Option<f32>> = grad.mag.data.iter().map(|&m| Some(m)).collect();
    debug!(
        "gradient_edges: kernel={:?} size={}x{}",
        kernel, plane.w, plane.h
    );
    Ok(replicate_gray(src, &values))
}

pub fn sobel(src: RgbaView<'_>) -> Result<RgbaImage> {
    gradient_edges(src, GradientKernel::Sobel)
}

pub fn prewitt(src: RgbaView<'_>) -> Result<RgbaImage> {
    gradient_edges(src, GradientKernel::Prewitt)
}

/// Absolute 4-neighbour Laplacian of the channel mean.
pub fn laplacian(src: RgbaView<'_>) -> Result<RgbaImage> {
    laplacian_with_kernel(src, &Kernel::laplacian4())
}

/// Absolute response of an arbitrary second-derivative kernel.
///
/// The kernel's strength and offset apply before the absolute value.
pub fn laplacian_with_kernel(src: RgbaView<'_>, kernel: &Kernel) -> Result<RgbaImage> {
    if kernel.radius() == 0 {
        return Err(Error::KernelSize {
            size: kernel.size(),
        });
    }
    let plane = mean_plane(src);
    let response = convolve_plane(&plane, kernel, BorderMode::Clamp);
    let values: Vec<Option<f32>> = response.into_iter().map(|v| v.map(f32::abs)).collect();
    Ok(replicate_gray(src, &values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(w: usize, h: usize, split_x: usize) -> RgbaImage {
        let mut img = RgbaImage::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                let v = if x < split_x { 0 } else { 255 };
                img.set_pixel(x, y, [v, v, v, 200]);
            }
        }
        img
    }

    #[test]
    fn sobel_saturates_next_to_step() {
        let img = split(5, 5, 2);
        let out = sobel(img.as_view()).unwrap();
        for y in 0..5 {
            assert_eq!(out.pixel(0, y), [0, 0, 0, 200]);
            assert_eq!(out.pixel(1, y), [255, 255, 255, 200]);
            assert_eq!(out.pixel(2, y), [255, 255, 255, 200]);
            assert_eq!(out.pixel(4, y), [0, 0, 0, 200]);
        }
    }

    #[test]
    fn laplacian_is_zero_on_flat_and_strong_on_step() {
        let img = split(6, 3, 3);
        let out = laplacian(img.as_view()).unwrap();
        assert_eq!(out.pixel(0, 1)[0], 0);
        assert_eq!(out.pixel(2, 1)[0], 255);
        assert_eq!(out.pixel(3, 1)[0], 255);
        assert_eq!(out.pixel(5, 1)[0], 0);
    }

    #[test]
    fn laplacian_rejects_point_kernel() {
        let img = split(3, 3, 1);
        let k = Kernel::new(1, vec![1.0]).unwrap();
        assert!(laplacian_with_kernel(img.as_view(), &k).is_err());
    }
}
