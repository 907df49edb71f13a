//! Interleaved RGBA8 buffers: a validated borrowed view and an owned image.
//!
//! Layout is row-major with four channels per pixel (R, G, B, A) and no row
//! padding, so `len == width * height * 4` always holds. Construction is the
//! only place that check happens; every operation downstream trusts it.
use super::traits::ImageView;
use crate::error::{Error, Result};

pub const CHANNELS: usize = 4;
pub const ALPHA: usize = 3;

/// Byte length of a `width × height` RGBA8 buffer, rejecting empty or
/// overflowing dimensions.
fn byte_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroDimension { width, height });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(Error::BufferLength {
            width,
            height,
            expected: usize::MAX,
            actual: 0,
        })
}

fn validate(width: usize, height: usize, len: usize) -> Result<()> {
    let expected = byte_len(width, height).map_err(|e| match e {
        Error::BufferLength { expected, .. } => Error::BufferLength {
            width,
            height,
            expected,
            actual: len,
        },
        other => other,
    })?;
    if expected != len {
        return Err(Error::BufferLength {
            width,
            height,
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Borrowed RGBA8 buffer handed over by the codec side.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    w: usize,
    h: usize,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Wrap a raw buffer, checking dimensions and length.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        validate(width, height, data.len())?;
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.w + x) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Pixel lookup with coordinates clamped to the valid range.
    #[inline]
    pub fn pixel_clamped(&self, x: isize, y: isize) -> [u8; 4] {
        let cx = x.clamp(0, self.w as isize - 1) as usize;
        let cy = y.clamp(0, self.h as isize - 1) as usize;
        self.pixel(cx, cy)
    }

    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.data[(y * self.w + x) * CHANNELS + ALPHA]
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage {
            w: self.w,
            h: self.h,
            data: self.data.to_vec(),
        }
    }
}

impl<'a> ImageView for RgbaView<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn channels(&self) -> usize {
        CHANNELS
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }
}

/// Owned RGBA8 image produced by every operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Zero-filled image (transparent black).
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            w: width,
            h: height,
            data: vec![0; len],
        })
    }

    /// Zero-filled output sized like an already validated source.
    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self {
            w: width,
            h: height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Take ownership of a raw buffer, checking dimensions and length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        validate(width, height, data.len())?;
        Ok(Self {
            w: width,
            h: height,
            data,
        })
    }

    pub fn as_view(&self) -> RgbaView<'_> {
        RgbaView {
            w: self.w,
            h: self.h,
            data: &self.data,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.as_view().pixel(x, y)
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; 4]) {
        let i = (y * self.w + x) * CHANNELS;
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// Bytes per row, the chunk size for row-parallel writers.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.w * CHANNELS
    }
}

impl ImageView for RgbaImage {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn channels(&self) -> usize {
        CHANNELS
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w * CHANNELS;
        &self.data[start..start + self.w * CHANNELS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_rejects_bad_lengths() {
        let data = vec![0u8; 15];
        assert!(matches!(
            RgbaView::new(2, 2, &data),
            Err(Error::BufferLength {
                expected: 16,
                actual: 15,
                ..
            })
        ));
        assert!(matches!(
            RgbaView::new(0, 2, &[]),
            Err(Error::ZeroDimension { .. })
        ));
    }

    #[test]
    fn clamped_pixel_stays_in_bounds() {
        let mut img = RgbaImage::new(2, 2).unwrap();
        img.set_pixel(1, 1, [9, 8, 7, 6]);
        let view = img.as_view();
        assert_eq!(view.pixel_clamped(5, 5), [9, 8, 7, 6]);
        assert_eq!(view.pixel_clamped(-3, 0), [0, 0, 0, 0]);
        assert_eq!(view.alpha(1, 1), 6);
    }

    #[test]
    fn rows_cover_interleaved_channels() {
        let img = RgbaImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(img.row(0).len(), 8);
        assert_eq!(img.rows().count(), 1);
        assert_eq!(img.row_bytes(), 8);
    }

    #[test]
    fn new_rejects_empty_and_overflowing_dimensions() {
        assert!(matches!(
            RgbaImage::new(0, 3),
            Err(Error::ZeroDimension { width: 0, height: 3 })
        ));
        assert!(matches!(
            RgbaImage::new(5, 0),
            Err(Error::ZeroDimension { .. })
        ));
        assert!(matches!(
            RgbaImage::new(usize::MAX, 2),
            Err(Error::BufferLength { .. })
        ));
        let img = RgbaImage::new(3, 2).unwrap();
        assert_eq!(img.as_bytes(), &[0u8; 24][..]);
    }
}
