//! Discrete Hartley Transform (DHT).
//!
//! `H[k] = Σ x[n]·cas(2πkn/N)` with `cas θ = cos θ + sin θ`. The DHT is its
//! own inverse up to a factor of `N`, so [`HartleyTransform::inverse_norm`]
//! runs the forward kernel again and scales by `1/N`.
//!
//! Power-of-two sizes reuse the radix-2 butterflies of [`ComplexFft`]
//! (`H[k] = Re X[k] − Im X[k]`); any other positive size falls back to a
//! precomputed `cas` table and an O(N²) kernel.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{check_len, FftError};
use crate::fft::ComplexFft;
use crate::num::Float;

#[derive(Clone, Debug, PartialEq)]
enum Kernel<T: Float> {
    Radix2(ComplexFft<T>),
    /// `cas(2πk/N)` for `k = 0..N`.
    Direct(Vec<T>),
}

/// Real-to-real Hartley transform of a fixed size.
#[derive(Clone, Debug, PartialEq)]
pub struct HartleyTransform<T: Float> {
    size: usize,
    kernel: Kernel<T>,
}

pub type HartleyTransform32 = HartleyTransform<f32>;
pub type HartleyTransform64 = HartleyTransform<f64>;

impl<T: Float> HartleyTransform<T> {
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::SizeTooSmall { size, min: 1 });
        }
        let kernel = if size.is_power_of_two() {
            Kernel::Radix2(ComplexFft::new(size)?)
        } else {
            let step = 2.0 * core::f64::consts::PI / size as f64;
            Kernel::Direct(
                (0..size)
                    .map(|k| {
                        let (sin, cos) = libm::sincos(step * k as f64);
                        T::from_f64(cos + sin)
                    })
                    .collect(),
            )
        };
        Ok(Self { size, kernel })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether this instance runs the radix-2 path.
    pub fn is_fast(&self) -> bool {
        matches!(self.kernel, Kernel::Radix2(_))
    }

    /// Forward DHT of `array`, in place.
    pub fn direct(&self, array: &mut [T]) -> Result<(), FftError> {
        check_len("array", self.size, array.len())?;
        match &self.kernel {
            Kernel::Radix2(fft) => {
                let mut im = vec![T::zero(); self.size];
                fft.process(array, &mut im, false);
                for (h, &i) in array.iter_mut().zip(im.iter()) {
                    *h -= i;
                }
            }
            Kernel::Direct(cas) => {
                let input = array.to_vec();
                for (k, out) in array.iter_mut().enumerate() {
                    let mut sum = T::zero();
                    let mut idx = 0usize;
                    for &x in &input {
                        sum += x * cas[idx];
                        idx += k;
                        if idx >= self.size {
                            idx -= self.size;
                        }
                    }
                    *out = sum;
                }
            }
        }
        Ok(())
    }

    /// Unscaled inverse: the forward kernel again, so the result is `N·x`.
    pub fn inverse(&self, array: &mut [T]) -> Result<(), FftError> {
        self.direct(array)
    }

    /// Inverse DHT scaled by `1/N`, in place.
    pub fn inverse_norm(&self, array: &mut [T]) -> Result<(), FftError> {
        self.direct(array)?;
        let scale = T::from_f64(1.0 / self.size as f64);
        for v in array.iter_mut() {
            *v *= scale;
        }
        Ok(())
    }
}
