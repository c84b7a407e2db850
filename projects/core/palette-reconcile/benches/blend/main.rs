use core::{alloc::Layout, mem::size_of, time::Duration};
use criterion::{criterion_group, criterion_main, Criterion};
use palette_reconcile::{BlendParameters, PalEntry};
#[allow(unused_imports)] // Only used on x86.
use palette_reconcile_common::cpu_detect::*;
use safe_allocator_api::RawAlloc;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod avx2;
mod portable;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod sse2;

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

/// Aligned source and destination pixel buffers.
pub(crate) struct BlendBuffers {
    pub input: RawAlloc,
    pub output: RawAlloc,
    pub pixel_count: usize,
}

impl BlendBuffers {
    pub fn new(pixel_count: usize) -> Self {
        let mut input = allocate_align_64(pixel_count * size_of::<PalEntry>());
        for (x, byte) in input.as_mut_slice().iter_mut().enumerate() {
            *byte = (x % 251) as u8;
        }

        Self {
            input,
            output: allocate_align_64(pixel_count * size_of::<PalEntry>()),
            pixel_count,
        }
    }

    pub fn src(&self) -> *const PalEntry {
        self.input.as_ptr() as *const PalEntry
    }

    pub fn dst(&mut self) -> *mut PalEntry {
        self.output.as_mut_ptr() as *mut PalEntry
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Constant Colour Blend");
    let size = 8388608; // 8MB, 2M pixels
    let mut buffers = BlendBuffers::new(size / size_of::<PalEntry>());
    let params = BlendParameters::new(255, 64, 0, 100).unwrap();
    let important_benches_only = true; // Set to false to enable extra benches

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));

    // Run architecture-specific benchmarks
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        if has_avx2() {
            avx2::run_benchmarks(&mut group, &mut buffers, params, size, important_benches_only);
        }

        if has_sse2() {
            sse2::run_benchmarks(&mut group, &mut buffers, params, size, important_benches_only);
        }
    }

    portable::run_benchmarks(&mut group, &mut buffers, params, size, important_benches_only);

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
