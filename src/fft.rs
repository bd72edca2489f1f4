//! Complex Fast Fourier Transform.
//!
//! [`ComplexFft`] implements the iterative radix-2
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! over split real/imaginary buffers. An instance is bound to one
//! power-of-two size; its [`TwiddleTable`] is computed at construction and
//! only read afterwards, so a single instance may serve many threads as long
//! as each call supplies its own buffers.
//!
//! Scaling convention: [`ComplexFft::direct`] and [`ComplexFft::inverse`] are
//! both unscaled, so `inverse(direct(x)) == N * x`. Use
//! [`ComplexFft::inverse_norm`] to get `x` back.

use crate::error::{check_len, FftError};
use crate::num::{Complex, Float};
use crate::twiddle::TwiddleTable;

pub use crate::num::{Complex32, Complex64};

/// In-place radix-2 complex FFT of a fixed power-of-two size.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexFft<T: Float> {
    table: TwiddleTable<T>,
}

pub type ComplexFft32 = ComplexFft<f32>;
pub type ComplexFft64 = ComplexFft<f64>;

impl<T: Float> ComplexFft<T> {
    /// Create a transform of `size` points.
    ///
    /// Fails with [`FftError::NonPowerOfTwo`] (or [`FftError::SizeTooSmall`]
    /// for zero) so that a bad size is never discovered at first use.
    pub fn new(size: usize) -> Result<Self, FftError> {
        Ok(Self {
            table: TwiddleTable::new(size)?,
        })
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn twiddles(&self) -> &TwiddleTable<T> {
        &self.table
    }

    /// Unscaled forward transform of `re + i*im`, in place.
    pub fn direct(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        self.check(re, im)?;
        self.process(re, im, false);
        Ok(())
    }

    /// Unscaled inverse transform, in place. The result is `N` times the
    /// signal that produced the spectrum.
    pub fn inverse(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        self.check(re, im)?;
        self.process(re, im, true);
        Ok(())
    }

    /// Inverse transform scaled by `1/N`, in place.
    pub fn inverse_norm(&self, re: &mut [T], im: &mut [T]) -> Result<(), FftError> {
        self.check(re, im)?;
        self.process(re, im, true);
        let scale = self.norm_factor();
        for (r, i) in re.iter_mut().zip(im.iter_mut()) {
            *r *= scale;
            *i *= scale;
        }
        Ok(())
    }

    /// [`direct`](Self::direct) over interleaved complex values.
    pub fn direct_interleaved(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        check_len("data", self.size(), data.len())?;
        self.process_interleaved(data, false);
        Ok(())
    }

    /// [`inverse`](Self::inverse) over interleaved complex values.
    pub fn inverse_interleaved(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        check_len("data", self.size(), data.len())?;
        self.process_interleaved(data, true);
        Ok(())
    }

    /// [`inverse_norm`](Self::inverse_norm) over interleaved complex values.
    pub fn inverse_norm_interleaved(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        check_len("data", self.size(), data.len())?;
        self.process_interleaved(data, true);
        let scale = self.norm_factor();
        for c in data.iter_mut() {
            *c = c.scale(scale);
        }
        Ok(())
    }

    /// Swap the two halves of an even-length array. See [`crate::shift::shift`].
    pub fn shift<U>(array: &mut [U]) -> Result<(), FftError> {
        crate::shift::shift(array)
    }

    fn check(&self, re: &[T], im: &[T]) -> Result<(), FftError> {
        check_len("re", self.size(), re.len())?;
        check_len("im", self.size(), im.len())
    }

    pub(crate) fn norm_factor(&self) -> T {
        T::from_f64(1.0 / self.size() as f64)
    }

    /// Bit-reverse, then log2(N) butterfly stages. The inverse flips the sign
    /// of the imaginary twiddle component.
    ///
    /// Callers guarantee `re.len() == im.len() == self.size()`.
    pub(crate) fn process(&self, re: &mut [T], im: &mut [T], inverse: bool) {
        let n = self.size();
        debug_assert!(re.len() == n && im.len() == n);
        self.table.permute(re, im);

        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let w = self.table.root(k * stride);
                    let w_im = if inverse { -w.im } else { w.im };
                    let a = start + k;
                    let b = a + half;
                    let t_re = re[b] * w.re - im[b] * w_im;
                    let t_im = re[b] * w_im + im[b] * w.re;
                    re[b] = re[a] - t_re;
                    im[b] = im[a] - t_im;
                    re[a] += t_re;
                    im[a] += t_im;
                }
            }
            len <<= 1;
        }
    }

    fn process_interleaved(&self, data: &mut [Complex<T>], inverse: bool) {
        let n = self.size();
        for (i, &j) in self.table.bit_reversal().iter().enumerate() {
            if i < j {
                data.swap(i, j);
            }
        }
        let mut len = 2;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            for start in (0..n).step_by(len) {
                for k in 0..half {
                    let w = self.table.root(k * stride);
                    let w = if inverse { w.conj() } else { w };
                    let u = data[start + k];
                    let v = data[start + k + half].mul(w);
                    data[start + k] = u.add(v);
                    data[start + k + half] = u.sub(v);
                }
            }
            len <<= 1;
        }
    }
}
