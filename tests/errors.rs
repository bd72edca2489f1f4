//! Error taxonomy: construction-time size errors, call-time buffer errors
//! and the shift parity error.

use sigxform::{
    shift, ComplexFft32, ComplexFft64, FftError, Goertzel32, HartleyTransform64, RealFft32,
    RealFft64,
};

#[test]
fn fft_family_rejects_sizes_at_construction() {
    for n in [3usize, 6, 12, 100, 1000, 1023] {
        assert_eq!(
            ComplexFft32::new(n).unwrap_err(),
            FftError::NonPowerOfTwo { size: n }
        );
        assert_eq!(
            RealFft64::new(n).unwrap_err(),
            FftError::NonPowerOfTwo { size: n }
        );
    }
    assert!(matches!(
        ComplexFft64::new(0),
        Err(FftError::SizeTooSmall { size: 0, min: 1 })
    ));
    assert!(matches!(
        RealFft32::new(1),
        Err(FftError::SizeTooSmall { size: 1, min: 2 })
    ));
}

#[test]
fn goertzel_and_hartley_accept_any_positive_size() {
    for n in [1usize, 3, 7, 12, 100] {
        assert_eq!(Goertzel32::new(n).unwrap().size(), n);
        assert_eq!(HartleyTransform64::new(n).unwrap().size(), n);
    }
}

#[test]
fn complex_fft_buffer_contract() {
    let fft = ComplexFft32::new(8).unwrap();
    let mut re = [1.0f32; 9];
    let mut im = [1.0f32; 8];
    for result in [
        fft.direct(&mut re, &mut im),
        fft.inverse(&mut re, &mut im),
        fft.inverse_norm(&mut re, &mut im),
    ] {
        assert_eq!(
            result,
            Err(FftError::LengthMismatch {
                buffer: "re",
                expected: 8,
                actual: 9
            })
        );
    }
    assert!(re.iter().chain(im.iter()).all(|&v| v == 1.0));
}

#[test]
fn real_fft_buffer_contract() {
    let rfft = RealFft64::new(16).unwrap();
    let samples = [0.5; 16];
    let mut re = [3.0; 9];
    let mut im = [3.0; 9];
    assert!(matches!(
        rfft.direct(&samples[..15], &mut re, &mut im),
        Err(FftError::LengthMismatch { buffer: "samples", expected: 16, actual: 15 })
    ));
    assert!(matches!(
        rfft.direct(&samples, &mut re, &mut im[..8]),
        Err(FftError::LengthMismatch { buffer: "im", expected: 9, actual: 8 })
    ));
    assert!(re.iter().chain(im.iter()).all(|&v| v == 3.0));

    let mut output = [9.0; 15];
    assert!(matches!(
        rfft.inverse(&re, &im, &mut output),
        Err(FftError::LengthMismatch { buffer: "output", .. })
    ));
    assert!(rfft.inverse_norm(&re[..8], &im, &mut [0.0; 16]).is_err());
    assert!(output.iter().all(|&v| v == 9.0));

    let mut out_re = [0.0; 16];
    let mut out_im = [0.0; 8];
    assert!(matches!(
        rfft.direct_complex(&samples, &samples, &mut out_re, &mut out_im),
        Err(FftError::LengthMismatch { buffer: "out_im", .. })
    ));
}

#[test]
fn shift_parity_error_is_distinct() {
    let mut odd = [1.0f64, 2.0, 3.0];
    let err = shift(&mut odd).unwrap_err();
    assert_eq!(err, FftError::OddLengthShift { len: 3 });
    assert!(!matches!(err, FftError::LengthMismatch { .. }));
    assert_eq!(odd, [1.0, 2.0, 3.0]);
}
