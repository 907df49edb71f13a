#![allow(dead_code)]

use pixel_pipelines::RgbaImage;

/// Builds an RGBA image from a per-pixel generator.
pub fn rgba_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> [u8; 4]) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&f(x, y));
        }
    }
    RgbaImage::from_raw(width, height, data).expect("valid synthetic buffer")
}

/// Opaque-ish image, black for `x < split_x` and white from there on.
pub fn split_black_white(width: usize, height: usize, split_x: usize, alpha: u8) -> RgbaImage {
    rgba_from_fn(width, height, |x, _| {
        let v = if x < split_x { 0 } else { 255 };
        [v, v, v, alpha]
    })
}

pub fn uniform_gray(width: usize, height: usize, value: u8) -> RgbaImage {
    rgba_from_fn(width, height, |_, _| [value, value, value, 255])
}

/// Colourful, non-uniform content with a varying alpha channel.
pub fn textured(width: usize, height: usize) -> RgbaImage {
    rgba_from_fn(width, height, |x, y| {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        let b = (((x * 7 + y * 13) % 32) * 8) as u8;
        let a = (((x + y) % 4) * 60 + 15) as u8;
        [r, g, b, a]
    })
}

/// High-contrast checkerboard of two gray levels.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> RgbaImage {
    assert!(cell > 0, "cell size must be positive");
    rgba_from_fn(width, height, |x, y| {
        let v = if ((x / cell) + (y / cell)) & 1 == 0 { 32 } else { 220 };
        [v, v, v, 255]
    })
}

pub fn alpha_channel(img: &RgbaImage) -> Vec<u8> {
    img.as_bytes().chunks_exact(4).map(|p| p[3]).collect()
}

pub fn mean_rgb(img: &RgbaImage) -> f64 {
    let mut sum = 0u64;
    let mut n = 0u64;
    for px in img.as_bytes().chunks_exact(4) {
        sum += px[0] as u64 + px[1] as u64 + px[2] as u64;
        n += 3;
    }
    sum as f64 / n as f64
}
