//! Real-input FFT built on a half-size complex FFT.
//!
//! A length-`N` real signal is packed as `N/2` complex samples
//! (`z[n] = x[2n] + i*x[2n+1]`), transformed with a [`ComplexFft`] of size
//! `N/2`, and unpacked into the `N/2 + 1` bins of the one-sided spectrum via
//! the even/odd decomposition
//!
//! ```text
//! X[k] = ½·(Z[k] + conj Z[m-k]) − ½·i·W^k·(Z[k] − conj Z[m-k]),  W = exp(-2πi/N)
//! ```
//!
//! Bin 0 and bin `N/2` are purely real. The same decomposition also powers a
//! full two-sided complex transform ([`RealFft::direct_complex`]) that runs
//! two half-size FFTs over the even and odd samples.
//!
//! Scaling follows [`ComplexFft`]: `inverse` is scaled by `N`,
//! `inverse_norm` by 1.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{check_len, FftError};
use crate::fft::ComplexFft;
use crate::num::{Complex, Float};
use crate::twiddle::roots_of_unity;

/// Number of real samples packed into one complex value.
pub const STRIDE: usize = 2;

/// Smallest supported transform length.
pub const MIN_LEN: usize = STRIDE;

/// Real-input FFT of a fixed power-of-two size `N >= 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct RealFft<T: Float> {
    size: usize,
    half: ComplexFft<T>,
    /// `exp(-2πi k / N)` for `k = 0..N/2`.
    roots: Vec<Complex<T>>,
}

pub type RealFft32 = RealFft<f32>;
pub type RealFft64 = RealFft<f64>;

impl<T: Float> RealFft<T> {
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size < MIN_LEN {
            return Err(FftError::SizeTooSmall {
                size,
                min: MIN_LEN,
            });
        }
        if !size.is_power_of_two() {
            return Err(FftError::NonPowerOfTwo { size });
        }
        let m = size / STRIDE;
        Ok(Self {
            size,
            half: ComplexFft::new(m)?,
            roots: roots_of_unity(size, m),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of one-sided spectrum bins, `N/2 + 1`.
    pub fn spectrum_len(&self) -> usize {
        self.size / STRIDE + 1
    }

    /// One-sided spectrum of `samples` into `re`/`im` (each `N/2 + 1` long).
    pub fn direct(&self, samples: &[T], re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        let m = self.size / STRIDE;
        check_len("samples", self.size, samples.len())?;
        check_len("re", m + 1, re.len())?;
        check_len("im", m + 1, im.len())?;

        for (i, pair) in samples.chunks_exact(STRIDE).enumerate() {
            re[i] = pair[0];
            im[i] = pair[1];
        }
        self.half.process(&mut re[..m], &mut im[..m], false);

        let half = T::from_f64(0.5);
        let z0 = Complex::new(re[0], im[0]);
        re[0] = z0.re + z0.im;
        im[0] = T::zero();
        re[m] = z0.re - z0.im;
        im[m] = T::zero();

        // Bins k and m-k are computed from the same pair of packed values, so
        // both are produced before either slot is overwritten.
        for k in 1..=m / 2 {
            let j = m - k;
            let zk = Complex::new(re[k], im[k]);
            let zj = Complex::new(re[j], im[j]);
            let xk = self.unpack(zk, zj, k).scale(half);
            let xj = self.unpack(zj, zk, j).scale(half);
            re[k] = xk.re;
            im[k] = xk.im;
            re[j] = xj.re;
            im[j] = xj.im;
        }
        Ok(())
    }

    /// Real signal from a one-sided spectrum, scaled by `N`.
    pub fn inverse(&self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError> {
        self.inverse_scaled(re, im, output, T::one())
    }

    /// Real signal from a one-sided spectrum, scaled by 1.
    pub fn inverse_norm(&self, re: &[T], im: &[T], output: &mut [T]) -> Result<(), FftError> {
        self.inverse_scaled(re, im, output, T::from_f64(1.0 / self.size as f64))
    }

    /// Full two-sided `N`-point transform of complex input, computed as two
    /// half-size FFTs over the even and odd samples.
    pub fn direct_complex(
        &self,
        in_re: &[T],
        in_im: &[T],
        out_re: &mut [T],
        out_im: &mut [T],
    ) -> Result<(), FftError> {
        self.combine_halves(in_re, in_im, out_re, out_im, false)
    }

    /// Unscaled inverse of [`direct_complex`](Self::direct_complex); the
    /// output is `N` times the original signal.
    pub fn inverse_complex(
        &self,
        in_re: &[T],
        in_im: &[T],
        out_re: &mut [T],
        out_im: &mut [T],
    ) -> Result<(), FftError> {
        self.combine_halves(in_re, in_im, out_re, out_im, true)
    }

    /// `|X[k]|` for the `N/2 + 1` one-sided bins, divided by `N` when
    /// `normalize` is set.
    pub fn magnitude_spectrum(
        &self,
        samples: &[T],
        spectrum: &mut [T],
        normalize: bool,
    ) -> Result<(), FftError> {
        let (re, im) = self.one_sided(samples, spectrum)?;
        let scale = self.spectrum_scale(normalize);
        for ((s, &r), &i) in spectrum.iter_mut().zip(re.iter()).zip(im.iter()) {
            *s = (r * r + i * i).sqrt() * scale;
        }
        Ok(())
    }

    /// `|X[k]|²` for the `N/2 + 1` one-sided bins, divided by `N` when
    /// `normalize` is set.
    pub fn power_spectrum(
        &self,
        samples: &[T],
        spectrum: &mut [T],
        normalize: bool,
    ) -> Result<(), FftError> {
        let (re, im) = self.one_sided(samples, spectrum)?;
        let scale = self.spectrum_scale(normalize);
        for ((s, &r), &i) in spectrum.iter_mut().zip(re.iter()).zip(im.iter()) {
            *s = (r * r + i * i) * scale;
        }
        Ok(())
    }

    /// `2·X[k]` from the packed spectrum values `Z[k]` and `Z[m-k]`.
    #[inline(always)]
    fn unpack(&self, zk: Complex<T>, zj: Complex<T>, k: usize) -> Complex<T> {
        let zj = zj.conj();
        let even = zk.add(zj);
        let odd = self.roots[k].mul(zk.sub(zj));
        // even - i*odd
        even.sub(odd.mul_i())
    }

    fn inverse_scaled(
        &self,
        re: &[T],
        im: &[T],
        output: &mut [T],
        scale: T,
    ) -> Result<(), FftError> {
        let m = self.size / STRIDE;
        check_len("re", m + 1, re.len())?;
        check_len("im", m + 1, im.len())?;
        check_len("output", self.size, output.len())?;

        let mut z_re = vec![T::zero(); m];
        let mut z_im = vec![T::zero(); m];
        for k in 0..m {
            let xk = Complex::new(re[k], im[k]);
            let xj = Complex::new(re[m - k], im[m - k]).conj();
            let even = xk.add(xj);
            let odd = xk.sub(xj).mul(self.roots[k].conj());
            // 2·(E + i·O); the half-size inverse then yields N·z.
            let z = even.add(odd.mul_i());
            z_re[k] = z.re;
            z_im[k] = z.im;
        }
        self.half.process(&mut z_re, &mut z_im, true);

        for (i, pair) in output.chunks_exact_mut(STRIDE).enumerate() {
            pair[0] = z_re[i] * scale;
            pair[1] = z_im[i] * scale;
        }
        Ok(())
    }

    fn combine_halves(
        &self,
        in_re: &[T],
        in_im: &[T],
        out_re: &mut [T],
        out_im: &mut [T],
        inverse: bool,
    ) -> Result<(), FftError> {
        let n = self.size;
        let m = n / STRIDE;
        check_len("in_re", n, in_re.len())?;
        check_len("in_im", n, in_im.len())?;
        check_len("out_re", n, out_re.len())?;
        check_len("out_im", n, out_im.len())?;

        // Evens into the lower half, odds into the upper half.
        for i in 0..m {
            out_re[i] = in_re[STRIDE * i];
            out_im[i] = in_im[STRIDE * i];
            out_re[m + i] = in_re[STRIDE * i + 1];
            out_im[m + i] = in_im[STRIDE * i + 1];
        }
        {
            let (even_re, odd_re) = out_re.split_at_mut(m);
            let (even_im, odd_im) = out_im.split_at_mut(m);
            self.half.process(even_re, even_im, inverse);
            self.half.process(odd_re, odd_im, inverse);
        }

        for k in 0..m {
            let w = if inverse {
                self.roots[k].conj()
            } else {
                self.roots[k]
            };
            let e = Complex::new(out_re[k], out_im[k]);
            let t = Complex::new(out_re[m + k], out_im[m + k]).mul(w);
            let lo = e.add(t);
            let hi = e.sub(t);
            out_re[k] = lo.re;
            out_im[k] = lo.im;
            out_re[m + k] = hi.re;
            out_im[m + k] = hi.im;
        }
        Ok(())
    }

    fn one_sided(&self, samples: &[T], spectrum: &[T]) -> Result<(Vec<T>, Vec<T>), FftError> {
        check_len("spectrum", self.spectrum_len(), spectrum.len())?;
        let mut re = vec![T::zero(); self.spectrum_len()];
        let mut im = vec![T::zero(); self.spectrum_len()];
        self.direct(samples, &mut re, &mut im)?;
        Ok((re, im))
    }

    fn spectrum_scale(&self, normalize: bool) -> T {
        if normalize {
            T::from_f64(1.0 / self.size as f64)
        } else {
            T::one()
        }
    }
}
