//! Serial vs rayon raster generation.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fractal_engine::{
    Fractal, FractalKinds, JuliaParams, PaletteKinds, RasterRequest, ViewportState, build_palette,
    generate_raster, generate_raster_serial, palette_factory,
};

const MAX_ITERATIONS: u32 = 256;
const SIZES: &[(u32, u32)] = &[(320, 180), (960, 540)];

fn bench_fractal(c: &mut Criterion, name: &str, fractal: Fractal, viewport: ViewportState) {
    let palette_fn = palette_factory(PaletteKinds::FireGradient);
    let palette = build_palette(palette_fn.as_ref(), MAX_ITERATIONS).expect("palette builds");

    let mut group = c.benchmark_group(name);
    group.sample_size(20);

    for &(width, height) in SIZES {
        let request = RasterRequest {
            algorithm: &fractal,
            viewport,
            max_iterations: MAX_ITERATIONS,
            palette: &palette,
            width,
            height,
        };
        let label = format!("{width}x{height}");

        group.throughput(Throughput::Elements(u64::from(width) * u64::from(height)));
        group.bench_with_input(BenchmarkId::new("serial", &label), &request, |b, request| {
            b.iter(|| generate_raster_serial(black_box(request)))
        });
        group.bench_with_input(BenchmarkId::new("rayon", &label), &request, |b, request| {
            b.iter(|| generate_raster(black_box(request)))
        });
    }

    group.finish();
}

fn bench_mandelbrot(c: &mut Criterion) {
    bench_fractal(
        c,
        "mandelbrot",
        Fractal::from_kind(FractalKinds::Mandelbrot),
        ViewportState::new(0.01, -0.7, 0.0).expect("valid viewport"),
    );
}

fn bench_julia(c: &mut Criterion) {
    bench_fractal(
        c,
        "julia",
        JuliaParams::default().into(),
        ViewportState::new(0.01, 0.0, 0.0).expect("valid viewport"),
    );
}

criterion_group!(benches, bench_mandelbrot, bench_julia);
criterion_main!(benches);
