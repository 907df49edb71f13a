//! Intensity reductions of an RGB triple.
//!
//! Two flavours coexist on purpose: gradient operators and the histogram
//! engines use perceptual luma, while Laplacian and the generic kernels use
//! the unweighted channel mean.
use super::f32::ImageF32;
use super::rgba::RgbaView;
use super::traits::ImageView;

pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Luma rounded to the nearest histogram bin.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    luma(r, g, b).round().clamp(0.0, 255.0) as u8
}

#[inline]
pub fn mean_rgb(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}

fn reduce_plane(view: RgbaView<'_>, f: impl Fn(u8, u8, u8) -> f32) -> ImageF32 {
    let mut plane = ImageF32::new(view.width(), view.height());
    for (y, row) in view.rows().enumerate() {
        let dst = &mut plane.data[y * view.width()..(y + 1) * view.width()];
        for (out, px) in dst.iter_mut().zip(row.chunks_exact(4)) {
            *out = f(px[0], px[1], px[2]);
        }
    }
    plane
}

/// Per-pixel perceptual luma as a float plane.
pub fn luma_plane(view: RgbaView<'_>) -> ImageF32 {
    reduce_plane(view, luma)
}

/// Per-pixel unweighted RGB mean as a float plane.
pub fn mean_plane(view: RgbaView<'_>) -> ImageF32 {
    reduce_plane(view, mean_rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::RgbaImage;

    #[test]
    fn weights_sum_to_one() {
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert_eq!(luma_u8(128, 128, 128), 128);
        assert_eq!(luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn luma_and_mean_differ_on_colour() {
        assert_eq!(luma_u8(255, 0, 0), 76);
        assert!((mean_rgb(255, 0, 0) - 85.0).abs() < 1e-4);
    }

    #[test]
    fn planes_follow_pixel_layout() {
        let mut img = RgbaImage::new(2, 1).unwrap();
        img.set_pixel(1, 0, [0, 255, 0, 255]);
        let plane = luma_plane(img.as_view());
        assert_eq!(plane.get(0, 0), 0.0);
        assert!((plane.get(1, 0) - 149.685).abs() < 1e-3);
        let mean = mean_plane(img.as_view());
        assert!((mean.get(1, 0) - 85.0).abs() < 1e-4);
    }
}
