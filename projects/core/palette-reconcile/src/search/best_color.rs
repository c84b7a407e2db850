use crate::error::PaletteError;
use likely_stable::unlikely;
use palette_reconcile_common::pal_entry::PalEntry;

/// Squared euclidean distance between two colours in RGB space.
#[inline(always)]
pub(crate) fn distance_sq(entry: PalEntry, r: u8, g: u8, b: u8) -> u32 {
    let x = r as i32 - entry.r as i32;
    let y = g as i32 - entry.g as i32;
    let z = b as i32 - entry.b as i32;
    (x * x + y * y + z * z) as u32
}

/// Finds the palette index closest to `(r, g, b)` within `[first, count)`.
///
/// Distance is squared euclidean distance in RGB space. The search stops at the first exact
/// match, and a later entry only replaces the current best if it is strictly closer, so ties
/// always resolve to the lowest index.
///
/// # Errors
///
/// - [`PaletteError::InvalidSearchRange`] if `first >= count` or `count > palette.len()`
///
/// # Examples
///
/// ```
/// use palette_reconcile::best_color;
/// use palette_reconcile_common::pal_entry::PalEntry;
///
/// let palette: Vec<PalEntry> = (0..=255u8).map(|x| PalEntry::rgb_only(x, x, x)).collect();
/// assert_eq!(best_color(&palette, 128, 130, 127, 0, 256), Ok(128));
/// ```
pub fn best_color(
    palette: &[PalEntry],
    r: u8,
    g: u8,
    b: u8,
    first: usize,
    count: usize,
) -> Result<u8, PaletteError> {
    validate_search_range(palette, first, count)?;
    Ok(best_color_in(palette, r, g, b, first, count))
}

/// Unchecked variant of [`best_color`], for callers that already hold a valid range.
#[inline]
pub(crate) fn best_color_in(
    palette: &[PalEntry],
    r: u8,
    g: u8,
    b: u8,
    first: usize,
    count: usize,
) -> u8 {
    debug_assert!(first < count && count <= palette.len() && count <= 256);

    let mut best_color = first;
    let mut best_dist = u32::MAX;

    for (color, &entry) in palette[first..count].iter().enumerate() {
        let dist = distance_sq(entry, r, g, b);
        if dist < best_dist {
            if unlikely(dist == 0) {
                return (first + color) as u8;
            }
            best_dist = dist;
            best_color = first + color;
        }
    }

    best_color as u8
}

/// Checks that `[first, count)` is a non-empty range of valid indices into `palette`.
#[inline]
pub(crate) fn validate_search_range(
    palette: &[PalEntry],
    first: usize,
    count: usize,
) -> Result<(), PaletteError> {
    if first >= count || count > palette.len() || count > 256 {
        return Err(PaletteError::InvalidSearchRange {
            first,
            count,
            len: palette.len(),
        });
    }
    Ok(())
}
