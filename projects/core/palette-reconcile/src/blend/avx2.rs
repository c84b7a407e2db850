#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::blend::sse2::{blend_lanes, blend_sse2};
use crate::blend::BlendParameters;
use palette_reconcile_common::pal_entry::PalEntry;

/// Blends pixels against a solid colour using AVX2 instructions, 8 pixels per iteration.
///
/// Same arithmetic as [`blend_sse2`]. The AVX2 unpack and pack instructions operate within
/// each 128-bit half, so widening with `unpacklo`/`unpackhi` and narrowing with `packus`
/// restores the original pixel order without any cross-lane permutes.
///
/// Remaining pixels (`count % 8`) are handed to [`blend_sse2`].
///
/// # Safety
///
/// - `src` must be valid for reads of `count` pixels
/// - `dst` must be valid for writes of `count` pixels
/// - `src` and `dst` must either be equal or not overlap
/// - CPU must support AVX2 instructions
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn blend_avx2(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    let (color, weight) = blend_lanes(params);
    let blend_color = _mm256_set1_epi64x(color);
    let blend_weight = _mm256_set1_epi64x(weight);
    let zero = _mm256_setzero_si256();

    let vector_count = count & !7;
    let mut input_ptr = src as *const __m256i;
    let mut output_ptr = dst as *mut __m256i;
    let end_ptr = src.add(vector_count) as *const __m256i;

    if ((src as usize) | (dst as usize)) & 31 == 0 {
        while input_ptr < end_ptr {
            let pixels = _mm256_load_si256(input_ptr);
            let blended = blend_8_pixels(pixels, blend_color, blend_weight, zero);
            _mm256_store_si256(output_ptr, blended);

            input_ptr = input_ptr.add(1);
            output_ptr = output_ptr.add(1);
        }
    } else {
        while input_ptr < end_ptr {
            let pixels = _mm256_loadu_si256(input_ptr);
            let blended = blend_8_pixels(pixels, blend_color, blend_weight, zero);
            _mm256_storeu_si256(output_ptr, blended);

            input_ptr = input_ptr.add(1);
            output_ptr = output_ptr.add(1);
        }
    }

    blend_sse2(
        src.add(vector_count),
        dst.add(vector_count),
        count - vector_count,
        params,
    );
}

#[inline(always)]
unsafe fn blend_8_pixels(
    pixels: __m256i,
    blend_color: __m256i,
    blend_weight: __m256i,
    zero: __m256i,
) -> __m256i {
    // Per 128-bit half: pixels 0-1 / 4-5 and pixels 2-3 / 6-7
    let low = _mm256_unpacklo_epi8(pixels, zero);
    let high = _mm256_unpackhi_epi8(pixels, zero);

    let low = _mm256_adds_epu16(blend_color, _mm256_mullo_epi16(blend_weight, low));
    let high = _mm256_adds_epu16(blend_color, _mm256_mullo_epi16(blend_weight, high));

    let low = _mm256_srli_epi16::<8>(low);
    let high = _mm256_srli_epi16::<8>(high);
    _mm256_packus_epi16(low, high)
}
