use crate::BlendBuffers;
use criterion::BenchmarkId;
use palette_reconcile::bench::blend_portable;
use palette_reconcile::BlendParameters;
use std::hint::black_box;

fn bench_portable(b: &mut criterion::Bencher, buffers: &mut BlendBuffers, params: BlendParameters) {
    let src = buffers.src();
    let dst = buffers.dst();
    let count = buffers.pixel_count;
    b.iter(|| unsafe {
        blend_portable(
            black_box(src),
            black_box(dst),
            black_box(count),
            black_box(params),
        )
    });
}

fn bench_portable_in_place(
    b: &mut criterion::Bencher,
    buffers: &mut BlendBuffers,
    params: BlendParameters,
) {
    let dst = buffers.dst();
    let count = buffers.pixel_count;
    b.iter(|| unsafe {
        blend_portable(
            black_box(dst),
            black_box(dst),
            black_box(count),
            black_box(params),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    buffers: &mut BlendBuffers,
    params: BlendParameters,
    size: usize,
    important_benches_only: bool,
) {
    group.bench_with_input(BenchmarkId::new("portable", size), &size, |b, _| {
        bench_portable(b, buffers, params)
    });

    if !important_benches_only {
        group.bench_with_input(BenchmarkId::new("portable_in_place", size), &size, |b, _| {
            bench_portable_in_place(b, buffers, params)
        });
    }
}
