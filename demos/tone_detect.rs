//! Detects DTMF-style tones with Goertzel and cross-checks them against the
//! one-sided spectrum of a real FFT, with planner logging enabled.
use sigxform::{FftError, FftPlanner};

fn main() -> Result<(), FftError> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let sample_rate = 8000.0f64;
    let n = 256;
    let tones = [697.0, 1209.0];
    let signal: Vec<f64> = (0..n)
        .map(|i| {
            let t = i as f64 / sample_rate;
            tones
                .iter()
                .map(|f| (2.0 * std::f64::consts::PI * f * t).sin())
                .sum()
        })
        .collect();

    let mut planner = FftPlanner::<f64>::new();
    let goertzel = planner.plan_goertzel(n)?;
    for f in [697.0, 770.0, 852.0, 941.0, 1209.0, 1336.0, 1477.0] {
        let bin = goertzel.bin_for_frequency(f, sample_rate)?;
        let mag = goertzel.magnitude(&signal, bin)?;
        println!("{f:7.1} Hz -> bin {bin:3}: {mag:8.3}");
    }

    let rfft = planner.plan_real_fft(n)?;
    let mut mags = vec![0.0; rfft.spectrum_len()];
    rfft.magnitude_spectrum(&signal, &mut mags, false)?;
    let peak = mags
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(k, _)| k)
        .unwrap_or(0);
    println!(
        "strongest FFT bin: {peak} ({:.1} Hz)",
        peak as f64 * sample_rate / n as f64
    );

    // Cached: no second "built" record.
    planner.plan_goertzel(n)?;
    Ok(())
}
