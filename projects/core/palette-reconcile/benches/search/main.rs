use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use palette_reconcile::{
    best_color, make_good_remap, make_remap, ptm_best_color, PalEntry, Palette, PowerTable,
    PALETTE_SIZE,
};
use std::hint::black_box;

/// A palette with a spread of colours and no exact duplicates of the query colours.
fn test_palette() -> Palette {
    core::array::from_fn(|x| {
        let x = x as u8;
        PalEntry::rgb_only(x.wrapping_mul(73), x.wrapping_mul(151), x.wrapping_mul(29))
    })
}

fn criterion_benchmark(c: &mut Criterion) {
    let palette = test_palette();
    let queries: Vec<PalEntry> = (0..PALETTE_SIZE)
        .map(|x| PalEntry::rgb_only(x as u8, (x * 3) as u8 | 1, (x * 5) as u8 | 1))
        .collect();

    let mut group = c.benchmark_group("Nearest Colour Search");
    group.throughput(criterion::Throughput::Elements(queries.len() as u64));

    group.bench_function("best_color", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(best_color(&palette, query.r, query.g, query.b, 1, 255).unwrap());
            }
        })
    });

    for gamma in [1.0f32, 2.2] {
        group.bench_with_input(BenchmarkId::new("ptm_best_color", gamma), &gamma, |b, &gamma| {
            let mut table = PowerTable::new();
            b.iter(|| {
                for query in &queries {
                    black_box(
                        ptm_best_color(
                            &mut table, &palette, query.r, query.g, query.b, false, gamma, 1,
                            255,
                        )
                        .unwrap(),
                    );
                }
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Palette Remap");
    let mut remap = [0u8; PALETTE_SIZE];

    // Half the foreign colours match exactly, the rest go through the search.
    let mut foreign = palette;
    for entry in foreign.iter_mut().step_by(2) {
        entry.b ^= 1;
    }

    group.bench_function("make_remap", |b| {
        b.iter(|| make_remap(black_box(&palette), black_box(&foreign), &mut remap, None).unwrap())
    });

    group.bench_function("make_good_remap", |b| {
        b.iter(|| {
            let mut base = palette;
            base[200] = base[100];
            make_good_remap(black_box(&mut base), &mut remap)
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
