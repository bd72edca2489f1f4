//! Spectrum shifting (`fftshift`).

use crate::error::FftError;

/// Swap the first and second halves of `array` in place, moving the
/// zero-frequency bin to the middle.
///
/// Only even lengths are accepted; an odd-length array fails with
/// [`FftError::OddLengthShift`] and is left untouched. An empty array is a
/// no-op.
pub fn shift<T>(array: &mut [T]) -> Result<(), FftError> {
    let len = array.len();
    if len % 2 != 0 {
        return Err(FftError::OddLengthShift { len });
    }
    array.rotate_left(len / 2);
    Ok(())
}
