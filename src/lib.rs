//! # sigxform - transform engine for audio/DSP front-ends
//!
//! Fixed-size, reusable transform instances that convert sample buffers
//! between the time and frequency domains, in single (`f32`) and double
//! (`f64`) precision:
//!
//! - [`ComplexFft`]: in-place radix-2 Cooley–Tukey FFT over split
//!   real/imaginary buffers.
//! - [`RealFft`]: real-input FFT through a half-size complex FFT, producing
//!   the `N/2 + 1` bins of the one-sided spectrum.
//! - [`Goertzel`]: one DFT bin in O(N).
//! - [`HartleyTransform`]: the real-to-real, self-inverse Hartley transform.
//! - [`shift()`]: `fftshift` for even-length arrays.
//!
//! Every instance precomputes its tables at construction and is immutable
//! afterwards; transforms mutate caller-owned buffers and keep no per-call
//! state, so one instance can be shared across threads as long as each call
//! brings its own buffers. [`FftPlanner`] caches instances by size.
//!
//! ## Scaling
//!
//! `direct` and `inverse` are both unscaled: `inverse(direct(x)) == N·x`.
//! `inverse_norm` divides by `N` and recovers `x`.
//!
//! ## Cargo Features
//!
//! - `std` (default): environment-driven configuration.
//! - `parallel`: rayon-backed [`batch`] execution (implies `std`).
//! - `verbose-logging`: `log` records from the planner and batch helpers.
//!   Transform calls themselves never log.
//!
//! ## Example
//!
//! ```
//! use sigxform::{ComplexFft64, FftError};
//!
//! let fft = ComplexFft64::new(8)?;
//! let mut re = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//! let mut im = [0.0; 8];
//! fft.direct(&mut re, &mut im)?;
//! assert!((re[0] - 28.0).abs() < 1e-12);
//! fft.inverse_norm(&mut re, &mut im)?;
//! assert!((re[7] - 7.0).abs() < 1e-12);
//! # Ok::<(), FftError>(())
//! ```

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Numeric primitives: the `Float` abstraction, `Complex` and `SplitBuffer`.
pub mod num;

/// Error type shared by construction and transform calls.
pub mod error;

/// Roots of unity and bit-reversal tables.
pub mod twiddle;

/// Complex radix-2 FFT.
pub mod fft;

/// Real-input FFT helpers built on a half-size complex FFT.
pub mod rfft;

/// Goertzel algorithm
///
/// Single-bin DFT for tone detection.
pub mod goertzel;

/// Discrete Hartley Transform (DHT)
///
/// Real-valued, self-inverse alternative to the FFT.
pub mod hartley;

/// Spectrum shifting (`fftshift`).
pub mod shift;

/// Size-keyed cache of shared transform instances.
pub mod planner;

/// Batch and multi-frame processing.
pub mod batch;

pub use error::FftError;
pub use fft::{ComplexFft, ComplexFft32, ComplexFft64};
pub use goertzel::{Goertzel, Goertzel32, Goertzel64};
pub use hartley::{HartleyTransform, HartleyTransform32, HartleyTransform64};
pub use num::{Complex, Complex32, Complex64, Float, SplitBuffer};
pub use planner::FftPlanner;
pub use rfft::{RealFft, RealFft32, RealFft64};
pub use shift::shift;
pub use twiddle::TwiddleTable;
