//! Benchmark functions re-exported for external benchmarks.
//!
//! This module re-exposes the internal blending kernels, which are `pub(crate)`,
//! so that external benchmarks can call them directly when the `bench` feature is enabled.
#![allow(clippy::missing_safety_doc)]
#![cfg(not(tarpaulin_include))]
#![allow(missing_docs)]

use crate::blend::BlendParameters;
use palette_reconcile_common::pal_entry::PalEntry;

pub unsafe fn blend_portable(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    crate::blend::portable::blend_portable(src, dst, count, params)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn blend_sse2(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    crate::blend::sse2::blend_sse2(src, dst, count, params)
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub unsafe fn blend_avx2(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    crate::blend::avx2::blend_avx2(src, dst, count, params)
}
