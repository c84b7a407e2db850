//! # Constant Colour Blending
//!
//! Blends a run of pixels towards a single solid colour, as used for screen flashes,
//! colour-tinted textures and palette fades.
//!
//! For each colour channel of each pixel:
//!
//! ```text
//! out = (colour * a + source * (256 - a)) >> 8
//! ```
//!
//! where `a` is in `[0, 256]`. The shift rounds down, and every implementation rounds
//! identically, so output is deterministic regardless of which kernel runs.
//!
//! ## Special Cases
//!
//! - `a == 0`: the source is copied to the destination (nothing happens when blending in place).
//! - `a == 256`: the destination is filled with the solid colour. The source is not read.
//!
//! ## Alpha Byte
//!
//! The general case carries the alpha byte of each source pixel through unchanged.
//! A solid fill (`a == 256`) writes the packed `0x00RRGGBB` colour, i.e. alpha `0`.
//! Callers that rely on the alpha byte must therefore treat `a == 256` separately:
//! `a == 255` keeps the source alpha, `a == 256` clears it.
//!
//! ## Implementations
//!
//! | Implementation | Pixels per iteration |
//! |----------------|----------------------|
//! | AVX2           | 8                    |
//! | SSE2           | 4                    |
//! | Portable       | 1                    |
//!
//! The best implementation for the current CPU is selected at runtime, or at compile time
//! with the `no-runtime-cpu-detection` feature. Pixels left over after the widest kernel
//! are handed down to the next narrower one.

use crate::error::PaletteError;
use derive_enum_all_values::AllValues;
use palette_reconcile_common::pal_entry::PalEntry;

pub(crate) mod portable;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod sse2;

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
pub(crate) mod avx2;

/// Solid colour and strength of a blend.
///
/// `a` is always in `[0, 256]`; this is checked on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendParameters {
    r: u8,
    g: u8,
    b: u8,
    a: u16,
}

impl BlendParameters {
    /// Maximum blend alpha; blending with this fully replaces the source.
    pub const MAX_ALPHA: u16 = 256;

    /// Creates blend parameters for blending towards `(r, g, b)` with strength `a / 256`.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::AlphaOutOfRange`] if `a > 256`
    pub const fn new(r: u8, g: u8, b: u8, a: u16) -> Result<Self, PaletteError> {
        if a > Self::MAX_ALPHA {
            return Err(PaletteError::AlphaOutOfRange(a));
        }
        Ok(Self { r, g, b, a })
    }

    /// Red component of the blend colour.
    #[inline(always)]
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green component of the blend colour.
    #[inline(always)]
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue component of the blend colour.
    #[inline(always)]
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Blend strength, in `[0, 256]`.
    #[inline(always)]
    pub const fn alpha(&self) -> u16 {
        self.a
    }

    /// The colour written by a solid (`a == 256`) blend.
    #[inline(always)]
    pub const fn solid_color(&self) -> PalEntry {
        PalEntry::rgb_only(self.r, self.g, self.b)
    }
}

/// An implementation of the blending kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum BlendImplementation {
    /// One pixel at a time, plain integer arithmetic. Available everywhere.
    Portable,
    /// 4 pixels per iteration using SSE2.
    Sse2,
    /// 8 pixels per iteration using AVX2.
    Avx2,
}

impl BlendImplementation {
    /// Returns `true` if this implementation can run on the current CPU.
    pub fn is_supported(self) -> bool {
        match self {
            BlendImplementation::Portable => true,
            BlendImplementation::Sse2 => has_sse2(),
            BlendImplementation::Avx2 => has_avx2(),
        }
    }

    /// The implementation [`blend_pixels`] uses on this CPU.
    ///
    /// Runs of fewer than 4 pixels always go through [`BlendImplementation::Portable`].
    pub fn best_available() -> Self {
        if has_avx2() {
            BlendImplementation::Avx2
        } else if has_sse2() {
            BlendImplementation::Sse2
        } else {
            BlendImplementation::Portable
        }
    }
}

#[inline(always)]
fn has_sse2() -> bool {
    #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(feature = "no-runtime-cpu-detection")
    ))]
    {
        palette_reconcile_common::cpu_detect::has_sse2()
    }

    #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        feature = "no-runtime-cpu-detection"
    ))]
    {
        cfg!(target_feature = "sse2")
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        false
    }
}

#[inline(always)]
fn has_avx2() -> bool {
    #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        not(feature = "no-runtime-cpu-detection")
    ))]
    {
        palette_reconcile_common::cpu_detect::has_avx2()
    }

    #[cfg(all(
        any(target_arch = "x86_64", target_arch = "x86"),
        feature = "no-runtime-cpu-detection"
    ))]
    {
        cfg!(target_feature = "avx2")
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
    {
        false
    }
}

/// Handles the copy (`a == 0`) and solid fill (`a == 256`) cases.
/// Returns `false` if the pixels still need blending.
///
/// # Safety
///
/// Same requirements as [`blend_pixels`].
#[inline(always)]
unsafe fn blend_trivial(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) -> bool {
    match params.alpha() {
        0 => {
            if !core::ptr::eq(src, dst) {
                core::ptr::copy_nonoverlapping(src, dst, count);
            }
            true
        }
        BlendParameters::MAX_ALPHA => {
            core::slice::from_raw_parts_mut(dst, count).fill(params.solid_color());
            true
        }
        _ => false,
    }
}

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
#[inline(always)]
unsafe fn blend_x86(src: *const PalEntry, dst: *mut PalEntry, count: usize, params: BlendParameters) {
    match BlendImplementation::best_available() {
        BlendImplementation::Avx2 => avx2::blend_avx2(src, dst, count, params),
        BlendImplementation::Sse2 => sse2::blend_sse2(src, dst, count, params),
        BlendImplementation::Portable => portable::blend_portable(src, dst, count, params),
    }
}

/// Blends `count` pixels from `src` into `dst` using the best known implementation for the
/// current CPU.
///
/// # Arguments
///
/// * `src` - Pointer to the source pixels
/// * `dst` - Pointer to the destination pixels. May be equal to `src`.
/// * `count` - Number of pixels to blend
/// * `params` - The solid colour and blend strength
///
/// # Safety
///
/// - `src` must be valid for reads of `count` pixels
/// - `dst` must be valid for writes of `count` pixels
/// - `src` and `dst` must either be equal or not overlap at all
///
/// # Remarks
///
/// See the [module-level documentation](self) for the exact arithmetic and special cases.
/// For performance it's recommended that `src` and `dst` are 32-byte aligned.
#[inline]
pub unsafe fn blend_pixels(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
) {
    debug_assert!(
        core::ptr::eq(src, dst)
            || src.add(count) <= dst.cast_const()
            || dst.cast_const().add(count) <= src,
        "src and dst must either be equal or not overlap"
    );
    if blend_trivial(src, dst, count, params) {
        return;
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    if count >= 4 {
        blend_x86(src, dst, count, params);
        return;
    }

    portable::blend_portable(src, dst, count, params)
}

/// Blends `src` into `dst` with a specific implementation, bypassing CPU detection.
///
/// Useful for verifying the SIMD kernels against the portable one and for benchmarking.
///
/// # Safety
///
/// - Same requirements as [`blend_pixels`]
/// - `implementation` must be supported by the current CPU
pub(crate) unsafe fn blend_pixels_with_implementation(
    src: *const PalEntry,
    dst: *mut PalEntry,
    count: usize,
    params: BlendParameters,
    implementation: BlendImplementation,
) {
    debug_assert!(
        core::ptr::eq(src, dst)
            || src.add(count) <= dst.cast_const()
            || dst.cast_const().add(count) <= src,
        "src and dst must either be equal or not overlap"
    );
    if blend_trivial(src, dst, count, params) {
        return;
    }

    match implementation {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        BlendImplementation::Avx2 => avx2::blend_avx2(src, dst, count, params),
        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        BlendImplementation::Sse2 => sse2::blend_sse2(src, dst, count, params),
        _ => portable::blend_portable(src, dst, count, params),
    }
}

/// Blends every pixel of `src` into the start of `dst`.
///
/// # Errors
///
/// - [`PaletteError::OutputBufferTooSmall`] if `dst` is shorter than `src`
///
/// # Examples
///
/// ```
/// use palette_reconcile::{blend, BlendParameters};
/// use palette_reconcile_common::pal_entry::PalEntry;
///
/// # fn main() -> Result<(), palette_reconcile::PaletteError> {
/// let source = vec![PalEntry::new(0, 0, 0, 255); 16];
/// let mut output = vec![PalEntry::default(); 16];
///
/// // Tint halfway towards pure red.
/// blend(&source, &mut output, BlendParameters::new(255, 0, 0, 128)?)?;
/// assert_eq!(output[0], PalEntry::new(127, 0, 0, 255));
/// # Ok(())
/// # }
/// ```
pub fn blend(
    src: &[PalEntry],
    dst: &mut [PalEntry],
    params: BlendParameters,
) -> Result<(), PaletteError> {
    if dst.len() < src.len() {
        return Err(PaletteError::OutputBufferTooSmall {
            needed: src.len(),
            actual: dst.len(),
        });
    }

    // Safety: We've validated the output buffer size; borrowing rules rule out overlap
    unsafe { blend_pixels(src.as_ptr(), dst.as_mut_ptr(), src.len(), params) };
    Ok(())
}

/// Blends `pixels` in place.
pub fn blend_in_place(pixels: &mut [PalEntry], params: BlendParameters) {
    let ptr = pixels.as_mut_ptr();
    // Safety: src and dst are the same, which is permitted
    unsafe { blend_pixels(ptr, ptr, pixels.len(), params) };
}

/// [`blend`], but with a specific implementation instead of the best available one.
///
/// # Errors
///
/// - [`PaletteError::UnsupportedImplementation`] if the CPU can't run `implementation`
/// - [`PaletteError::OutputBufferTooSmall`] if `dst` is shorter than `src`
pub fn blend_with_implementation(
    src: &[PalEntry],
    dst: &mut [PalEntry],
    params: BlendParameters,
    implementation: BlendImplementation,
) -> Result<(), PaletteError> {
    if !implementation.is_supported() {
        return Err(PaletteError::UnsupportedImplementation(implementation));
    }

    if dst.len() < src.len() {
        return Err(PaletteError::OutputBufferTooSmall {
            needed: src.len(),
            actual: dst.len(),
        });
    }

    // Safety: We've validated the implementation and the output buffer size
    unsafe {
        blend_pixels_with_implementation(
            src.as_ptr(),
            dst.as_mut_ptr(),
            src.len(),
            params,
            implementation,
        )
    };
    Ok(())
}
