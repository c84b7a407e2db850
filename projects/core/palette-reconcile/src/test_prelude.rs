//! Common test imports and utilities for palette tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::blend::BlendParameters;
pub use crate::error::PaletteError;

// Common types from palette_reconcile_common
pub use palette_reconcile_common::pal_entry::{PalEntry, Palette, PALETTE_SIZE};

pub use core::alloc::Layout;
pub use safe_allocator_api::RawAlloc;

// Re-export super for convenience in test modules
pub use super::*;

/// Palette where entry `x` is the grey `(x, x, x)`.
pub(crate) fn grayscale_palette() -> Palette {
    core::array::from_fn(|x| PalEntry::rgb_only(x as u8, x as u8, x as u8))
}

/// Palette of 256 distinct colours, with no two entries sharing the same RGB.
///
/// Entry `x` is `(x, 255 - x, x * 7)`.
pub(crate) fn distinct_palette() -> Palette {
    core::array::from_fn(|x| {
        let x = x as u8;
        PalEntry::rgb_only(x, 255 - x, x.wrapping_mul(7))
    })
}

/// Deterministic pixels covering the full range of every channel, including alpha.
pub(crate) fn generate_pixels(count: usize) -> Vec<PalEntry> {
    (0..count)
        .map(|x| {
            let x = x as u8;
            PalEntry::new(
                x.wrapping_mul(37).wrapping_add(11),
                x.wrapping_mul(101).wrapping_add(7),
                x.wrapping_mul(59).wrapping_add(250),
                x.wrapping_mul(13),
            )
        })
        .collect()
}

/// Straightforward per-channel evaluation of the blend formula, one pixel at a time.
pub(crate) fn reference_blend(pixels: &[PalEntry], params: BlendParameters) -> Vec<PalEntry> {
    let a = params.alpha() as u32;
    let mix = |colour: u8, source: u8| ((colour as u32 * a + source as u32 * (256 - a)) >> 8) as u8;
    pixels
        .iter()
        .map(|pixel| PalEntry {
            b: mix(params.b(), pixel.b),
            g: mix(params.g(), pixel.g),
            r: mix(params.r(), pixel.r),
            a: pixel.a,
        })
        .collect()
}

/// Allocates data with an alignment of 64 bytes.
///
/// # Parameters
///
/// - `num_bytes`: The number of bytes to allocate
///
/// # Returns
///
/// A [`RawAlloc`] containing the allocated data
pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

// -------------------------------
// Shared helpers for blend kernels
// -------------------------------

/// Common type alias for the blend kernels.
#[allow(dead_code)] // Only used by the x86 kernels.
pub(crate) type BlendKernelFn = unsafe fn(*const PalEntry, *mut PalEntry, usize, BlendParameters);

/// Runs `kernel` over every pixel count from 0 to `max_count` and compares against
/// [`reference_blend`].
///
/// The `max_count` parameter should cover a few main loop iterations of the kernel plus
/// every possible tail length.
#[allow(dead_code)]
pub(crate) fn run_blend_kernel_test(
    kernel: BlendKernelFn,
    alpha: u16,
    max_count: usize,
    impl_name: &str,
) {
    let params = BlendParameters::new(250, 17, 128, alpha).unwrap();
    for count in 0..=max_count {
        let input = generate_pixels(count);
        let mut output = vec![PalEntry::default(); count];

        unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), count, params) };

        assert_eq!(
            output,
            reference_blend(&input, params),
            "{impl_name} implementation produced different results than reference for {count} pixels at alpha {alpha}"
        );
    }
}

/// Runs `kernel` with input and output buffers starting `byte_offset` bytes past a
/// 64 byte boundary.
#[allow(dead_code)]
pub(crate) fn run_blend_kernel_unaligned_test(
    kernel: BlendKernelFn,
    byte_offset: usize,
    max_count: usize,
    impl_name: &str,
) {
    let params = BlendParameters::new(3, 199, 64, 77).unwrap();
    for count in 0..=max_count {
        let input = generate_pixels(count);
        let num_bytes = count * core::mem::size_of::<PalEntry>() + byte_offset + 1;
        let mut input_unaligned = allocate_align_64(num_bytes);
        let mut output_unaligned = allocate_align_64(num_bytes);

        let output = unsafe {
            // PalEntry has an alignment of 1, so any byte offset is a valid pointer.
            let input_ptr = input_unaligned.as_mut_ptr().add(byte_offset) as *mut PalEntry;
            let output_ptr = output_unaligned.as_mut_ptr().add(byte_offset) as *mut PalEntry;
            core::ptr::copy_nonoverlapping(input.as_ptr(), input_ptr, count);

            kernel(input_ptr, output_ptr, count, params);
            core::slice::from_raw_parts(output_ptr, count).to_vec()
        };

        assert_eq!(
            output,
            reference_blend(&input, params),
            "Mismatch {impl_name} (offset {byte_offset}) for {count} pixels",
        );
    }
}

/// Runs `kernel` with the same buffer as input and output.
#[allow(dead_code)]
pub(crate) fn run_blend_kernel_in_place_test(kernel: BlendKernelFn, count: usize, impl_name: &str) {
    let params = BlendParameters::new(90, 0, 255, 160).unwrap();
    let mut pixels = generate_pixels(count);
    let expected = reference_blend(&pixels, params);

    let ptr = pixels.as_mut_ptr();
    unsafe { kernel(ptr, ptr, count, params) };

    assert_eq!(pixels, expected, "{impl_name} in place blend mismatch");
}

#[test]
fn distinct_palette_has_no_duplicates() {
    let palette = distinct_palette();
    let mut colours: Vec<u32> = palette.iter().map(|entry| entry.rgb()).collect();
    colours.sort_unstable();
    colours.dedup();
    assert_eq!(colours.len(), PALETTE_SIZE);
}
