use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner as RustFftPlanner;

use sigxform::{ComplexFft32, Goertzel32, HartleyTransform32, RealFft32};

const SIZES: [usize; 3] = [256, 1024, 4096];

fn signal(n: usize) -> Vec<f32> {
    (0..n).map(|i| (i as f32 * 0.37).sin()).collect()
}

fn bench_complex(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("complex_{size}"));
    let fft = ComplexFft32::new(size).unwrap();
    let input = signal(size);
    group.bench_function(BenchmarkId::new("sigxform/direct", size), |b| {
        let mut re = input.clone();
        let mut im = vec![0.0f32; size];
        b.iter(|| {
            re.copy_from_slice(&input);
            im.iter_mut().for_each(|v| *v = 0.0);
            fft.direct(black_box(&mut re), black_box(&mut im)).unwrap();
        })
    });

    let plan = RustFftPlanner::<f32>::new().plan_fft_forward(size);
    group.bench_function(BenchmarkId::new("rustfft/forward", size), |b| {
        let mut buf: Vec<Complex<f32>> = input.iter().map(|&r| Complex::new(r, 0.0)).collect();
        b.iter(|| {
            for (z, &r) in buf.iter_mut().zip(input.iter()) {
                *z = Complex::new(r, 0.0);
            }
            plan.process(black_box(&mut buf));
        })
    });
    group.finish();
}

fn bench_real(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("real_{size}"));
    let rfft = RealFft32::new(size).unwrap();
    let input = signal(size);
    let mut re = vec![0.0f32; size / 2 + 1];
    let mut im = vec![0.0f32; size / 2 + 1];
    group.bench_function(BenchmarkId::new("sigxform/direct", size), |b| {
        b.iter(|| rfft.direct(black_box(&input), &mut re, &mut im).unwrap())
    });
    let mut output = vec![0.0f32; size];
    group.bench_function(BenchmarkId::new("sigxform/inverse_norm", size), |b| {
        b.iter(|| rfft.inverse_norm(&re, &im, black_box(&mut output)).unwrap())
    });
    group.finish();
}

fn bench_single_bin(c: &mut Criterion, size: usize) {
    let mut group = c.benchmark_group(format!("single_bin_{size}"));
    let goertzel = Goertzel32::new(size).unwrap();
    let input = signal(size);
    group.bench_function(BenchmarkId::new("goertzel", size), |b| {
        b.iter(|| goertzel.direct(black_box(&input), size / 8).unwrap())
    });
    let dht = HartleyTransform32::new(size).unwrap();
    group.bench_function(BenchmarkId::new("hartley", size), |b| {
        let mut data = input.clone();
        b.iter(|| {
            data.copy_from_slice(&input);
            dht.direct(black_box(&mut data)).unwrap();
        })
    });
    group.finish();
}

fn main_bench(c: &mut Criterion) {
    for size in SIZES {
        bench_complex(c, size);
        bench_real(c, size);
        bench_single_bin(c, size);
    }
}

criterion_group!(benches, main_bench);
criterion_main!(benches);
