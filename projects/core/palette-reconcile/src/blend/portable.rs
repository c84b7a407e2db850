use crate::blend::BlendParameters;
use palette_reconcile_common::pal_entry::PalEntry;

/// Blends `count` pixels against the solid colour in `params`, one pixel at a time.
///
/// Each colour channel becomes `(colour * a + source * (256 - a)) >> 8`. The alpha byte
/// of the source pixel is carried over unchanged.
///
/// This is the reference implementation; the SIMD kernels must produce identical output.
///
/// # Safety
///
/// - `src` must be valid for reads of `count` pixels
/// - `dst` must be valid for writes of `count` pixels
/// - `src` and `dst` must either be equal or not overlap
#[inline(always)]
pub(crate) unsafe fn blend_portable(
    mut src: *const PalEntry,
    mut dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    let a = params.alpha() as u32;
    let ia = 256 - a;
    let r = params.r() as u32 * a;
    let g = params.g() as u32 * a;
    let b = params.b() as u32 * a;

    let end = src.add(count);
    while src < end {
        let pixel = src.read();
        dst.write(PalEntry {
            b: ((b + pixel.b as u32 * ia) >> 8) as u8,
            g: ((g + pixel.g as u32 * ia) >> 8) as u8,
            r: ((r + pixel.r as u32 * ia) >> 8) as u8,
            a: pixel.a,
        });
        src = src.add(1);
        dst = dst.add(1);
    }
}
