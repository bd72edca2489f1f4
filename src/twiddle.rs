//! Precomputed roots of unity and bit-reversal permutations.
//!
//! A [`TwiddleTable`] is built once per transform size and is read-only
//! afterwards, so one table can back any number of concurrent transforms.

use alloc::vec::Vec;

use crate::error::FftError;
use crate::num::{Complex, Float};

/// Build `count` roots `exp(-2πi k / n)` for `k = 0..count`.
///
/// Angles are evaluated in `f64` and narrowed to `T`, so single-precision
/// tables carry only the final rounding.
pub fn roots_of_unity<T: Float>(n: usize, count: usize) -> Vec<Complex<T>> {
    let step = -2.0 * core::f64::consts::PI / n as f64;
    (0..count)
        .map(|k| {
            let (sin, cos) = libm::sincos(step * k as f64);
            Complex::new(T::from_f64(cos), T::from_f64(sin))
        })
        .collect()
}

/// Bit-reversal permutation for a power-of-two `n`: entry `i` holds `i` with
/// its `log2(n)` low bits reversed.
pub fn bit_reversal(n: usize) -> Vec<usize> {
    if n <= 1 {
        return alloc::vec![0; n];
    }
    let shift = usize::BITS - n.trailing_zeros();
    (0..n).map(|i| i.reverse_bits() >> shift).collect()
}

/// Twiddle factors and bit-reversal order for a radix-2 transform of size `n`.
#[derive(Clone, Debug, PartialEq)]
pub struct TwiddleTable<T: Float> {
    n: usize,
    /// `exp(-2πi k / n)` for `k = 0..n/2`.
    roots: Vec<Complex<T>>,
    bit_reversal: Vec<usize>,
}

impl<T: Float> TwiddleTable<T> {
    /// Build the table for a power-of-two size `n >= 1`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n == 0 {
            return Err(FftError::SizeTooSmall { size: 0, min: 1 });
        }
        if !n.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo { size: n });
        }
        Ok(Self {
            n,
            roots: roots_of_unity(n, n / 2),
            bit_reversal: bit_reversal(n),
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Forward root `exp(-2πi k / n)`, `k < n/2`.
    #[inline(always)]
    pub fn root(&self, k: usize) -> Complex<T> {
        self.roots[k]
    }

    pub fn roots(&self) -> &[Complex<T>] {
        &self.roots
    }

    pub fn bit_reversal(&self) -> &[usize] {
        &self.bit_reversal
    }

    /// Reorder `re`/`im` in place into bit-reversed order.
    pub(crate) fn permute(&self, re: &mut [T], im: &mut [T]) {
        for (i, &j) in self.bit_reversal.iter().enumerate() {
            if i < j {
                re.swap(i, j);
                im.swap(i, j);
            }
        }
    }
}
