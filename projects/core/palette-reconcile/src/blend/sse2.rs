#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::blend::portable::blend_portable;
use crate::blend::BlendParameters;
use palette_reconcile_common::pal_entry::PalEntry;

/// Per pixel multipliers for the SSE2/AVX2 kernels, as four 16-bit lanes packed in a `u64`.
///
/// Lanes are in memory order (B, G, R, A):
///
/// - `color`: `channel * a` for B/G/R, `0` for alpha.
/// - `weight`: `256 - a` for B/G/R, `256` for alpha, so `(alpha * 256) >> 8` passes the
///   source alpha through unchanged.
#[inline(always)]
pub(crate) fn blend_lanes(params: BlendParameters) -> (i64, i64) {
    let a = params.alpha() as i64;
    let ia = 256 - a;
    let color = (params.r() as i64 * a) << 32 | (params.g() as i64 * a) << 16 | params.b() as i64 * a;
    let weight = 256 << 48 | ia << 32 | ia << 16 | ia;
    (color, weight)
}

/// Blends pixels against a solid colour using SSE2 instructions, 4 pixels per iteration.
///
/// The colour is premultiplied once; each pixel is widened to 16-bit lanes and
/// computed as `(colour * a + source * (256 - a)) >> 8`. The largest possible intermediate is
/// `255 * 256`, so the saturating add never saturates and the result is bit-identical to
/// [`blend_portable`], which handles any remaining (`count % 4`) pixels.
///
/// Aligned loads/stores are used when both pointers are 16-byte aligned.
///
/// # Safety
///
/// - `src` must be valid for reads of `count` pixels
/// - `dst` must be valid for writes of `count` pixels
/// - `src` and `dst` must either be equal or not overlap
/// - CPU must support SSE2 instructions
#[target_feature(enable = "sse2")]
pub(crate) unsafe fn blend_sse2(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    let (color, weight) = blend_lanes(params);
    let blend_color = _mm_set1_epi64x(color);
    let blend_weight = _mm_set1_epi64x(weight);
    let zero = _mm_setzero_si128();

    let vector_count = count & !3;
    let mut input_ptr = src as *const __m128i;
    let mut output_ptr = dst as *mut __m128i;
    let end_ptr = src.add(vector_count) as *const __m128i;

    if ((src as usize) | (dst as usize)) & 15 == 0 {
        while input_ptr < end_ptr {
            let pixels = _mm_load_si128(input_ptr);
            let blended = blend_4_pixels(pixels, blend_color, blend_weight, zero);
            _mm_store_si128(output_ptr, blended);

            input_ptr = input_ptr.add(1);
            output_ptr = output_ptr.add(1);
        }
    } else {
        while input_ptr < end_ptr {
            let pixels = _mm_loadu_si128(input_ptr);
            let blended = blend_4_pixels(pixels, blend_color, blend_weight, zero);
            _mm_storeu_si128(output_ptr, blended);

            input_ptr = input_ptr.add(1);
            output_ptr = output_ptr.add(1);
        }
    }

    blend_portable(
        src.add(vector_count),
        dst.add(vector_count),
        count - vector_count,
        params,
    );
}

#[inline(always)]
unsafe fn blend_4_pixels(
    pixels: __m128i,
    blend_color: __m128i,
    blend_weight: __m128i,
    zero: __m128i,
) -> __m128i {
    // Widen to 16-bit lanes: pixels 0-1 and pixels 2-3
    let low = _mm_unpacklo_epi8(pixels, zero);
    let high = _mm_unpackhi_epi8(pixels, zero);

    let low = _mm_adds_epu16(blend_color, _mm_mullo_epi16(blend_weight, low));
    let high = _mm_adds_epu16(blend_color, _mm_mullo_epi16(blend_weight, high));

    let low = _mm_srli_epi16::<8>(low);
    let high = _mm_srli_epi16::<8>(high);
    _mm_packus_epi16(low, high)
}
