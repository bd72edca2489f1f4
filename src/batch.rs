//! Batch execution: one shared transform instance over many frames.
//!
//! Every frame is validated before any frame is transformed. With the
//! `parallel` feature, batches with at least [`parallel_batch_threshold`]
//! frames are spread across the rayon pool. Each frame is still processed by
//! exactly one thread, so results match sequential execution bit for bit.

use alloc::vec::Vec;
#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

use crate::error::{check_len, FftError};
use crate::fft::ComplexFft;
use crate::num::{Float, SplitBuffer};
use crate::rfft::RealFft;

/// Frames needed before a batch goes parallel when nothing overrides it.
pub const DEFAULT_PARALLEL_BATCH_THRESHOLD: usize = 8;

/// Environment variable read once to override the default threshold.
pub const PARALLEL_BATCH_THRESHOLD_ENV: &str = "SIGXFORM_PAR_BATCH_THRESHOLD";

/// `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_BATCH_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);

#[cfg(feature = "parallel")]
static PARALLEL_BATCH_THRESHOLD_ENV_VALUE: OnceLock<usize> = OnceLock::new();

/// Set the minimum number of frames for parallel batch execution.
///
/// Passing `0` reverts to the environment variable or the built-in default.
#[cfg(feature = "parallel")]
pub fn set_parallel_batch_threshold(frames: usize) {
    PARALLEL_BATCH_THRESHOLD_OVERRIDE.store(frames, Ordering::Relaxed);
}

/// Effective parallel threshold: explicit override, then
/// [`PARALLEL_BATCH_THRESHOLD_ENV`], then [`DEFAULT_PARALLEL_BATCH_THRESHOLD`].
#[cfg(feature = "parallel")]
pub fn parallel_batch_threshold() -> usize {
    let override_frames = PARALLEL_BATCH_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_frames != 0 {
        return override_frames;
    }
    *PARALLEL_BATCH_THRESHOLD_ENV_VALUE.get_or_init(|| {
        std::env::var(PARALLEL_BATCH_THRESHOLD_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_BATCH_THRESHOLD)
    })
}

/// Without the `parallel` feature batches always run sequentially.
#[cfg(not(feature = "parallel"))]
pub fn parallel_batch_threshold() -> usize {
    usize::MAX
}

#[cfg(feature = "parallel")]
fn for_each_frame<I, F>(items: &mut [I], f: F) -> Result<(), FftError>
where
    I: Send,
    F: Fn(&mut I) -> Result<(), FftError> + Send + Sync,
{
    if items.len() >= parallel_batch_threshold() {
        #[cfg(feature = "verbose-logging")]
        log::trace!("batch: {} frames on the rayon pool", items.len());
        items.par_iter_mut().try_for_each(f)
    } else {
        #[cfg(feature = "verbose-logging")]
        log::trace!("batch: {} frames sequentially", items.len());
        items.iter_mut().try_for_each(f)
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_frame<I, F>(items: &mut [I], f: F) -> Result<(), FftError>
where
    F: Fn(&mut I) -> Result<(), FftError>,
{
    #[cfg(feature = "verbose-logging")]
    log::trace!("batch: {} frames sequentially", items.len());
    items.iter_mut().try_for_each(f)
}

fn check_frames<T: Float>(size: usize, frames: &[SplitBuffer<T>]) -> Result<(), FftError> {
    for frame in frames {
        check_len("re", size, frame.re.len())?;
        check_len("im", size, frame.im.len())?;
    }
    Ok(())
}

/// [`ComplexFft::direct`] on every frame.
pub fn batch_direct<T: Float>(
    fft: &ComplexFft<T>,
    frames: &mut [SplitBuffer<T>],
) -> Result<(), FftError> {
    check_frames(fft.size(), frames)?;
    for_each_frame(frames, |f| fft.direct(&mut f.re, &mut f.im))
}

/// [`ComplexFft::inverse`] on every frame.
pub fn batch_inverse<T: Float>(
    fft: &ComplexFft<T>,
    frames: &mut [SplitBuffer<T>],
) -> Result<(), FftError> {
    check_frames(fft.size(), frames)?;
    for_each_frame(frames, |f| fft.inverse(&mut f.re, &mut f.im))
}

/// [`ComplexFft::inverse_norm`] on every frame.
pub fn batch_inverse_norm<T: Float>(
    fft: &ComplexFft<T>,
    frames: &mut [SplitBuffer<T>],
) -> Result<(), FftError> {
    check_frames(fft.size(), frames)?;
    for_each_frame(frames, |f| fft.inverse_norm(&mut f.re, &mut f.im))
}

/// One-sided spectra of real `signals`, one [`SplitBuffer`] of
/// `N/2 + 1` bins per signal.
pub fn batch_real_direct<T: Float>(
    rfft: &RealFft<T>,
    signals: &[Vec<T>],
) -> Result<Vec<SplitBuffer<T>>, FftError> {
    for signal in signals {
        check_len("signal", rfft.size(), signal.len())?;
    }
    let mut jobs: Vec<(&[T], SplitBuffer<T>)> = signals
        .iter()
        .map(|s| (s.as_slice(), SplitBuffer::zeros(rfft.spectrum_len())))
        .collect();
    for_each_frame(&mut jobs, |(signal, out)| {
        rfft.direct(*signal, &mut out.re, &mut out.im)
    })?;
    Ok(jobs.into_iter().map(|(_, out)| out).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::ComplexFft64;
    use crate::rfft::RealFft32;
    use alloc::vec;

    fn frames(count: usize, n: usize) -> Vec<SplitBuffer<f64>> {
        (0..count)
            .map(|f| {
                let re: Vec<f64> = (0..n).map(|i| ((i + f) as f64 * 0.3).sin()).collect();
                SplitBuffer::from_real(&re)
            })
            .collect()
    }

    #[test]
    fn batch_matches_single_calls() {
        let fft = ComplexFft64::new(16).unwrap();
        let mut batch = frames(20, 16);
        let mut single = batch.clone();
        batch_direct(&fft, &mut batch).unwrap();
        for f in single.iter_mut() {
            fft.direct(&mut f.re, &mut f.im).unwrap();
        }
        assert_eq!(batch, single);
    }

    #[test]
    fn batch_roundtrip() {
        let fft = ComplexFft64::new(32).unwrap();
        let orig = frames(5, 32);
        let mut work = orig.clone();
        batch_direct(&fft, &mut work).unwrap();
        batch_inverse(&fft, &mut work).unwrap();
        for (w, o) in work.iter().zip(orig.iter()) {
            for (a, b) in w.re.iter().zip(o.re.iter()) {
                assert!((a - 32.0 * b).abs() < 1e-10);
            }
        }
        batch_direct(&fft, &mut work).unwrap();
        batch_inverse_norm(&fft, &mut work).unwrap();
        for (w, o) in work.iter().zip(orig.iter()) {
            for (a, b) in w.re.iter().zip(o.re.iter()) {
                assert!((a - 32.0 * b).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn one_bad_frame_leaves_all_frames_untouched() {
        let fft = ComplexFft64::new(8).unwrap();
        let mut work = frames(3, 8);
        work[2].im.pop();
        let before = work.clone();
        assert!(matches!(
            batch_direct(&fft, &mut work),
            Err(FftError::LengthMismatch { buffer: "im", .. })
        ));
        assert_eq!(work, before);
    }

    #[test]
    fn real_batch_produces_one_spectrum_per_signal() {
        let rfft = RealFft32::new(8).unwrap();
        let signals = vec![vec![1.0f32; 8], vec![0.0f32; 8]];
        let spectra = batch_real_direct(&rfft, &signals).unwrap();
        assert_eq!(spectra.len(), 2);
        assert_eq!(spectra[0].len(), 5);
        assert!((spectra[0].re[0] - 8.0).abs() < 1e-6);
        assert!(spectra[1].re.iter().all(|&v| v == 0.0));
        assert!(batch_real_direct(&rfft, &[vec![0.0f32; 7]]).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn threshold_override_and_reset() {
        set_parallel_batch_threshold(3);
        assert_eq!(parallel_batch_threshold(), 3);
        set_parallel_batch_threshold(0);
        assert_ne!(parallel_batch_threshold(), 0);
    }
}
