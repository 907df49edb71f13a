//! Tone curves applied through precomputed 256-entry LUTs.
//!
//! Every curve acts identically on R, G and B and leaves alpha untouched.
//! Results are fresh copies; the source view is never written.
use crate::error::{ensure_finite, Error, Result};
use crate::histogram::Lut;
use crate::image::{RgbaImage, RgbaView};

fn out_of_range(name: &'static str, value: f32, expected: &'static str) -> Error {
    Error::OutOfRange {
        name,
        value: value as f64,
        expected,
    }
}

/// Power curve `255 · (i/255)^gamma`.
///
/// `gamma < 1` lifts shadows and brightens, `gamma > 1` darkens.
pub fn gamma_lut(gamma: f32) -> Result<Lut> {
    let g = ensure_finite("gamma", gamma)?;
    if g <= 0.0 {
        return Err(out_of_range("gamma", g, "a real > 0"));
    }
    let g = g as f64;
    Ok(Lut::from_fn(|i| (i as f64 / 255.0).powf(g) * 255.0))
}

pub fn gamma_correction(src: RgbaView<'_>, gamma: f32) -> Result<RgbaImage> {
    Ok(gamma_lut(gamma)?.apply_rgb(src))
}

#[inline]
fn logistic(x: f64, k: f64) -> f64 {
    1.0 / (1.0 + (-k * (x - 0.5)).exp())
}

/// S-curve around mid-gray with slope `exp(|contrast| · 4)`.
///
/// Positive contrast maps through the normalised logistic, negative contrast
/// through its inverse. Zero is the identity.
pub fn sigmoid_lut(contrast: f32) -> Result<Lut> {
    let c = ensure_finite("contrast", contrast)?;
    if !(-1.0..=1.0).contains(&c) {
        return Err(out_of_range("contrast", c, "a real in [-1, 1]"));
    }
    if c == 0.0 {
        return Ok(Lut::identity());
    }
    let k = (c.abs() as f64 * 4.0).exp();
    let lo = logistic(0.0, k);
    let hi = logistic(1.0, k);
    let span = hi - lo;
    let lut = if c > 0.0 {
        Lut::from_fn(|i| (logistic(i as f64 / 255.0, k) - lo) / span * 255.0)
    } else {
        Lut::from_fn(|i| {
            let y = lo + (i as f64 / 255.0) * span;
            (0.5 - (1.0 / y - 1.0).ln() / k) * 255.0
        })
    };
    Ok(lut)
}

/// Sigmoidal contrast; `contrast == 0` returns a bit-exact copy.
pub fn sigmoid_contrast(src: RgbaView<'_>, contrast: f32) -> Result<RgbaImage> {
    let lut = sigmoid_lut(contrast)?;
    if contrast == 0.0 {
        return Ok(src.to_image());
    }
    Ok(lut.apply_rgb(src))
}

/// Additive offset in [-255, 255].
pub fn brightness(src: RgbaView<'_>, delta: f32) -> Result<RgbaImage> {
    let d = ensure_finite("delta", delta)?;
    if !(-255.0..=255.0).contains(&d) {
        return Err(out_of_range("delta", d, "a real in [-255, 255]"));
    }
    let d = d as f64;
    Ok(Lut::from_fn(|i| i as f64 + d).apply_rgb(src))
}

/// Linear stretch around 128; `factor` 0 gives flat gray, 1 the identity.
pub fn contrast(src: RgbaView<'_>, factor: f32) -> Result<RgbaImage> {
    let f = ensure_finite("factor", factor)?;
    if f < 0.0 {
        return Err(out_of_range("factor", f, "a real >= 0"));
    }
    let f = f as f64;
    Ok(Lut::from_fn(|i| (i as f64 - 128.0) * f + 128.0).apply_rgb(src))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_endpoints_are_fixed() {
        for g in [0.25, 0.5, 1.0, 2.2, 5.0] {
            let lut = gamma_lut(g).unwrap();
            assert_eq!(lut.map(0), 0);
            assert_eq!(lut.map(255), 255);
            assert!(lut.is_monotone());
        }
    }

    #[test]
    fn gamma_one_is_identity() {
        assert_eq!(gamma_lut(1.0).unwrap(), Lut::identity());
    }

    #[test]
    fn gamma_rejects_non_positive_and_nan() {
        assert!(gamma_lut(0.0).is_err());
        assert!(gamma_lut(-2.0).is_err());
        assert!(gamma_lut(f32::NAN).is_err());
    }

    #[test]
    fn sigmoid_direction_follows_sign() {
        let up = sigmoid_lut(0.5).unwrap();
        let down = sigmoid_lut(-0.5).unwrap();
        assert!(up.map(200) > 200 && up.map(50) < 50);
        assert!(down.map(200) < 200 && down.map(50) > 50);
        assert!(up.is_monotone() && down.is_monotone());
        assert_eq!(up.map(0), 0);
        assert_eq!(down.map(255), 255);
    }

    #[test]
    fn sigmoid_rejects_out_of_range() {
        assert!(sigmoid_lut(1.01).is_err());
        assert!(sigmoid_lut(-1.5).is_err());
        assert!(sigmoid_lut(f32::INFINITY).is_err());
        assert!(sigmoid_lut(1.0).is_ok());
    }

    #[test]
    fn brightness_and_contrast_clamp() {
        let img = RgbaImage::from_raw(1, 1, vec![250, 10, 128, 9]).unwrap();
        let b = brightness(img.as_view(), 20.0).unwrap();
        assert_eq!(b.pixel(0, 0), [255, 30, 148, 9]);
        let c = contrast(img.as_view(), 2.0).unwrap();
        assert_eq!(c.pixel(0, 0), [255, 0, 128, 9]);
        assert!(contrast(img.as_view(), -1.0).is_err());
        assert!(brightness(img.as_view(), 300.0).is_err());
    }
}
