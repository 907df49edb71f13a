//! Square convolution kernels with a strength multiplier and additive offset.
use crate::error::{ensure_finite, Error, Result};

/// Odd-sized square coefficient matrix in row-major order.
///
/// The engine evaluates `sum(coeff * sample) * strength + offset` for every
/// output sample; `offset` re-centres signed responses (emboss uses 128).
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    coeffs: Vec<f32>,
    strength: f32,
    offset: f32,
}

impl Kernel {
    pub fn new(size: usize, coeffs: Vec<f32>) -> Result<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(Error::KernelSize { size });
        }
        if coeffs.len() != size * size {
            return Err(Error::KernelCoefficients {
                size,
                expected: size * size,
                actual: coeffs.len(),
            });
        }
        for &c in &coeffs {
            ensure_finite("kernel coefficient", c)?;
        }
        Ok(Self {
            size,
            coeffs,
            strength: 1.0,
            offset: 0.0,
        })
    }

    fn from_3x3(coeffs: [f32; 9]) -> Self {
        Self {
            size: 3,
            coeffs: coeffs.to_vec(),
            strength: 1.0,
            offset: 0.0,
        }
    }

    pub fn with_strength(mut self, strength: f32) -> Result<Self> {
        self.strength = ensure_finite("strength", strength)?;
        Ok(self)
    }

    pub fn with_offset(mut self, offset: f32) -> Result<Self> {
        self.offset = ensure_finite("offset", offset)?;
        Ok(self)
    }

    /// Uniform 3×3 average.
    pub fn box_blur3() -> Self {
        Self::from_3x3([1.0 / 9.0; 9])
    }

    /// Binomial 3×3 approximation of a Gaussian (`[1,2,1]ᵀ·[1,2,1] / 16`).
    pub fn gaussian3() -> Self {
        let c = 1.0 / 16.0;
        Self::from_3x3([c, 2.0 * c, c, 2.0 * c, 4.0 * c, 2.0 * c, c, 2.0 * c, c])
    }

    /// Cross-shaped unsharp kernel; `amount == 0` is the identity.
    pub fn sharpen(amount: f32) -> Result<Self> {
        let a = ensure_finite("amount", amount)?;
        Ok(Self::from_3x3([
            0.0,
            -a,
            0.0,
            -a,
            1.0 + 4.0 * a,
            -a,
            0.0,
            -a,
            0.0,
        ]))
    }

    /// Diagonal relief kernel re-centred on mid-gray.
    pub fn emboss() -> Self {
        let mut k = Self::from_3x3([-2.0, -1.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 2.0]);
        k.offset = 128.0;
        k
    }

    /// 4-neighbour second derivative.
    pub fn laplacian4() -> Self {
        Self::from_3x3([0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0])
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    #[inline]
    pub fn coeffs(&self) -> &[f32] {
        &self.coeffs
    }

    #[inline]
    pub fn strength(&self) -> f32 {
        self.strength
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Weighted neighbourhood sum around `(x, y)`, before strength and offset.
    #[inline]
    pub(crate) fn weighted_sum(&self, x: isize, y: isize, sample: impl Fn(isize, isize) -> f32) -> f32 {
        let r = self.radius() as isize;
        let mut acc = 0.0;
        let mut k = 0;
        for dy in -r..=r {
            for dx in -r..=r {
                acc += self.coeffs[k] * sample(x + dx, y + dy);
                k += 1;
            }
        }
        acc
    }

    /// Full response: weighted sum scaled by strength plus offset.
    #[inline]
    pub(crate) fn respond(&self, x: isize, y: isize, sample: impl Fn(isize, isize) -> f32) -> f32 {
        self.weighted_sum(x, y, sample) * self.strength + self.offset
    }
}
