//! Goertzel algorithm: a single DFT bin in O(N).
//!
//! Runs the second-order recurrence
//! `s[n] = x[n] + 2·cos(2πk/N)·s[n-1] − s[n-2]` over the input and combines
//! the last two states with `exp(2πik/N)`:
//! `X[k] = exp(2πik/N)·s[N-1] − s[N-2]`.
//! Cheaper than a full FFT when only a handful of bins are needed (tone
//! detection). Any positive size is allowed.

use alloc::vec::Vec;

use crate::error::{check_len, FftError};
use crate::num::{Complex, Float};

/// Single-bin DFT evaluator for a fixed input length.
#[derive(Clone, Debug, PartialEq)]
pub struct Goertzel<T: Float> {
    size: usize,
    /// `exp(+2πi k / N)` for every bin `k`.
    coefficients: Vec<Complex<T>>,
}

pub type Goertzel32 = Goertzel<f32>;
pub type Goertzel64 = Goertzel<f64>;

impl<T: Float> Goertzel<T> {
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::SizeTooSmall { size, min: 1 });
        }
        let step = 2.0 * core::f64::consts::PI / size as f64;
        let coefficients = (0..size)
            .map(|k| {
                let (sin, cos) = libm::sincos(step * k as f64);
                Complex::new(T::from_f64(cos), T::from_f64(sin))
            })
            .collect();
        Ok(Self { size, coefficients })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The DFT coefficient of `samples` at `bin`.
    pub fn direct(&self, samples: &[T], bin: usize) -> Result<Complex<T>, FftError> {
        check_len("samples", self.size, samples.len())?;
        if bin >= self.size {
            return Err(FftError::BinOutOfRange {
                bin,
                size: self.size,
            });
        }
        let w = self.coefficients[bin];
        let coeff = w.re + w.re;
        let mut s_prev = T::zero();
        let mut s_prev2 = T::zero();
        for &x in samples {
            let s = x + coeff * s_prev - s_prev2;
            s_prev2 = s_prev;
            s_prev = s;
        }
        Ok(Complex::new(w.re * s_prev - s_prev2, w.im * s_prev))
    }

    /// `|X[bin]|`.
    pub fn magnitude(&self, samples: &[T], bin: usize) -> Result<T, FftError> {
        Ok(self.direct(samples, bin)?.norm())
    }

    /// Bin nearest below `frequency` for a signal sampled at `sample_rate`:
    /// `floor(frequency · N / sample_rate)`.
    pub fn bin_for_frequency(&self, frequency: T, sample_rate: T) -> Result<usize, FftError> {
        if !sample_rate.is_finite() || sample_rate <= T::zero() {
            return Err(FftError::InvalidValue {
                detail: "sample rate must be finite and positive",
            });
        }
        if !frequency.is_finite() || frequency < T::zero() {
            return Err(FftError::InvalidValue {
                detail: "frequency must be finite and non-negative",
            });
        }
        let bin = frequency.to_f64() * self.size as f64 / sample_rate.to_f64();
        let bin = libm::floor(bin) as usize;
        if bin >= self.size {
            return Err(FftError::BinOutOfRange {
                bin,
                size: self.size,
            });
        }
        Ok(bin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::ComplexFft64;
    use alloc::vec;

    #[test]
    fn ramp_bin_two_matches_reference() {
        let samples = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x = Goertzel32::new(8).unwrap().direct(&samples, 2).unwrap();
        assert!((x.re + 4.0).abs() < 1e-6, "re = {}", x.re);
        assert!((x.im - 4.0).abs() < 1e-6, "im = {}", x.im);
    }

    #[test]
    fn agrees_with_fft_on_every_bin() {
        let n = 16;
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 * 1.3).sin() + 0.25).collect();
        let mut re = samples.clone();
        let mut im = vec![0.0; n];
        ComplexFft64::new(n)
            .unwrap()
            .direct(&mut re, &mut im)
            .unwrap();
        let g = Goertzel64::new(n).unwrap();
        for k in 0..n {
            let x = g.direct(&samples, k).unwrap();
            assert!((x.re - re[k]).abs() < 1e-9, "bin {k}: {} vs {}", x.re, re[k]);
            assert!((x.im - im[k]).abs() < 1e-9, "bin {k}: {} vs {}", x.im, im[k]);
        }
    }

    #[test]
    fn odd_size_detects_tone() {
        let n = 100;
        let sr = 8000.0;
        let f = 1000.0;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * core::f64::consts::PI * f * i as f64 / sr).sin())
            .collect();
        let g = Goertzel64::new(n).unwrap();
        let bin = g.bin_for_frequency(f, sr).unwrap();
        assert_eq!(bin, 12);
        let on = g.magnitude(&signal, bin).unwrap();
        let off = g.magnitude(&signal, 30).unwrap();
        assert!(on > 10.0 * off, "{on} vs {off}");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            Goertzel32::new(0),
            Err(FftError::SizeTooSmall { .. })
        ));
        let g = Goertzel32::new(4).unwrap();
        assert_eq!(
            g.direct(&[0.0; 4], 4).unwrap_err(),
            FftError::BinOutOfRange { bin: 4, size: 4 }
        );
        assert!(matches!(
            g.direct(&[0.0; 3], 1),
            Err(FftError::LengthMismatch { .. })
        ));
        assert!(matches!(
            g.bin_for_frequency(1.0, 0.0),
            Err(FftError::InvalidValue { .. })
        ));
        assert!(matches!(
            g.bin_for_frequency(10.0, 10.0),
            Err(FftError::BinOutOfRange { .. })
        ));
    }
}
