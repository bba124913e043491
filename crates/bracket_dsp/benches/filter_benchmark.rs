//! Performance benchmarks for the filter core
//!
//! Run with: cargo bench -p bracket_dsp

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use bracket_dsp::{high_cut_coefficients, low_cut_coefficients, Slope, StereoFilter};

const SAMPLE_RATE: f32 = 48000.0;

fn full_slope_filter(max_block_size: usize) -> StereoFilter {
    let mut filter = StereoFilter::new();
    filter.prepare(SAMPLE_RATE, max_block_size);
    filter.apply_coefficients(
        &low_cut_coefficients(120.0, SAMPLE_RATE, Slope::Db48).unwrap(),
        &high_cut_coefficients(12000.0, SAMPLE_RATE, Slope::Db48).unwrap(),
    );
    filter
}

fn benchmark_block_processing(c: &mut Criterion) {
    let mut group = c.benchmark_group("stereo_filter");

    // Common buffer sizes in audio applications
    let buffer_sizes = [64, 128, 256, 512, 1024, 2048];

    for size in buffer_sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("process_block_{}_frames", size), |b| {
            let mut filter = full_slope_filter(size);
            let mut left: Vec<f32> = (0..size).map(|i| (i as f32 * 0.001).sin()).collect();
            let mut right: Vec<f32> = (0..size).map(|i| (i as f32 * 0.002).sin()).collect();

            b.iter(|| {
                filter.process_block(black_box(&mut left), black_box(&mut right));
            });
        });
    }

    group.finish();
}

fn benchmark_coefficient_update(c: &mut Criterion) {
    c.bench_function("cut_coefficient_recompute", |b| {
        let mut filter = full_slope_filter(512);
        let mut freq = 100.0_f32;

        b.iter(|| {
            // Simulate a moving cutoff slider: redesign both cascades and
            // hot-swap them, the per-block worst case
            let low = low_cut_coefficients(black_box(freq), SAMPLE_RATE, Slope::Db48).unwrap();
            let high = high_cut_coefficients(black_box(freq * 10.0), SAMPLE_RATE, Slope::Db48)
                .unwrap();
            filter.apply_coefficients(&low, &high);
            freq = if freq > 1000.0 { 100.0 } else { freq + 1.0 };
        });
    });
}

criterion_group!(benches, benchmark_block_processing, benchmark_coefficient_update);

criterion_main!(benches);
