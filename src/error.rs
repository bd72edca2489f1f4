//! Error type shared by every transform in the crate.

use thiserror::Error;

/// Failure modes of transform construction and transform calls.
///
/// Construction errors mean no instance was produced. Call errors are raised
/// before any caller buffer is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// The transform size must be a power of two for this algorithm.
    #[error("transform size {size} is not a power of two")]
    NonPowerOfTwo { size: usize },

    /// The transform size is below the algorithm's minimum.
    #[error("transform size {size} is below the minimum of {min}")]
    SizeTooSmall { size: usize, min: usize },

    /// A caller buffer does not have the length the instance requires.
    #[error("buffer `{buffer}` has length {actual}, expected {expected}")]
    LengthMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// `shift` only accepts even-length arrays.
    #[error("cannot shift an array of odd length {len}")]
    OddLengthShift { len: usize },

    /// A requested frequency bin lies outside `0..size`.
    #[error("bin {bin} is out of range for transform size {size}")]
    BinOutOfRange { bin: usize, size: usize },

    /// A scalar argument (sample rate, frequency) is not usable.
    #[error("invalid argument: {detail}")]
    InvalidValue { detail: &'static str },
}

/// Fail with [`FftError::LengthMismatch`] unless `actual == expected`.
#[inline]
pub(crate) fn check_len(
    buffer: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), FftError> {
    if actual == expected {
        Ok(())
    } else {
        Err(FftError::LengthMismatch {
            buffer,
            expected,
            actual,
        })
    }
}
