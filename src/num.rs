//! Numeric primitives shared by every transform: the [`Float`] abstraction
//! over `f32`/`f64`, the [`Complex`] value type and the owned
//! [`SplitBuffer`] used by the batch helpers.

use alloc::vec;
use alloc::vec::Vec;

/// Minimal float trait for the generic transforms (no_std, trig via `libm`).
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Default
    + Send
    + Sync
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + core::ops::AddAssign
    + core::ops::SubAssign
    + core::ops::MulAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Narrow (or pass through) an `f64`. Tables are computed in `f64` and
    /// converted with this.
    fn from_f64(x: f64) -> Self;
    fn to_f64(self) -> f64;
    fn sqrt(self) -> Self;
    fn is_finite(self) -> bool;
}

/// `f32::is_finite(self)` calls the inherent method, not the trait method;
/// the lint below is a false positive.
#[allow(unconditional_recursion)]
impl Float for f32 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

#[allow(unconditional_recursion)]
impl Float for f64 {
    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
    #[inline(always)]
    fn one() -> Self {
        1.0
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
    #[inline(always)]
    fn to_f64(self) -> f64 {
        self
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Complex value stored as `re`/`im`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    #[inline(always)]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    #[inline(always)]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Multiply by `i`.
    #[inline(always)]
    pub fn mul_i(self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }
    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
    #[inline(always)]
    pub fn norm_sqr(self) -> T {
        self.re * self.re + self.im * self.im
    }
    pub fn norm(self) -> T {
        self.norm_sqr().sqrt()
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

/// Owned split (structure-of-arrays) complex buffer: one `Vec` of real parts
/// and one of imaginary parts, always of equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitBuffer<T: Float> {
    pub re: Vec<T>,
    pub im: Vec<T>,
}

impl<T: Float> SplitBuffer<T> {
    /// # Panics
    /// Panics if `re` and `im` differ in length.
    pub fn new(re: Vec<T>, im: Vec<T>) -> Self {
        assert_eq!(re.len(), im.len());
        Self { re, im }
    }

    pub fn zeros(len: usize) -> Self {
        Self {
            re: vec![T::zero(); len],
            im: vec![T::zero(); len],
        }
    }

    /// A buffer holding `samples` as real parts and zero imaginary parts.
    pub fn from_real(samples: &[T]) -> Self {
        Self {
            re: samples.to_vec(),
            im: vec![T::zero(); samples.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn from_complex(v: &[Complex<T>]) -> Self {
        let mut re = Vec::with_capacity(v.len());
        let mut im = Vec::with_capacity(v.len());
        for c in v {
            re.push(c.re);
            im.push(c.im);
        }
        Self { re, im }
    }

    pub fn to_complex(&self) -> Vec<Complex<T>> {
        self.re
            .iter()
            .zip(self.im.iter())
            .map(|(&re, &im)| Complex::new(re, im))
            .collect()
    }
}

impl<T: Float> From<&[Complex<T>]> for SplitBuffer<T> {
    fn from(v: &[Complex<T>]) -> Self {
        Self::from_complex(v)
    }
}

impl<T: Float> From<SplitBuffer<T>> for Vec<Complex<T>> {
    fn from(buf: SplitBuffer<T>) -> Self {
        buf.to_complex()
    }
}
