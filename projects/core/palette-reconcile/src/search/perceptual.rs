use super::best_color::validate_search_range;
use super::power_table::PowerTable;
use super::settings::PerceptualSearchSettings;
use crate::error::PaletteError;
use core::cell::RefCell;
use palette_reconcile_common::pal_entry::PalEntry;

std::thread_local! {
    static THREAD_POWER_TABLE: RefCell<PowerTable> = const { RefCell::new(PowerTable::new()) };
}

/// Finds the palette index closest to `(r, g, b)` within `[first, count)` using a perceptual
/// power-curve distance.
///
/// The cost of a candidate is `table[|dr|] + table[|dg|] + table[|db|]`, where the table holds
/// `(x / 255) ^ gamma`. The table is taken from `table`, which is only rebuilt if it was built
/// for a different gamma.
///
/// The entry at `first` is always accepted as the initial best. After that:
///
/// - Forward lookup (`reverse_lookup == false`) returns immediately on a zero cost match and
///   only replaces the best on a strictly lower cost; the earliest of equal candidates wins.
/// - Reverse lookup never returns early and replaces the best on a lower or equal cost;
///   the latest of equal candidates wins.
///
/// # Errors
///
/// - [`PaletteError::InvalidSearchRange`] if `first >= count` or `count > palette.len()`
/// - [`PaletteError::InvalidGamma`] if `gamma` is not a finite, positive number
#[allow(clippy::too_many_arguments)]
pub fn ptm_best_color(
    table: &mut PowerTable,
    palette: &[PalEntry],
    r: u8,
    g: u8,
    b: u8,
    reverse_lookup: bool,
    gamma: f32,
    first: usize,
    count: usize,
) -> Result<u8, PaletteError> {
    validate_search_range(palette, first, count)?;
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(PaletteError::InvalidGamma(gamma.to_bits()));
    }

    let powers = table.table_for(gamma);
    let mut best_dist = f64::MAX;
    let mut best_color = first;

    for (color, entry) in palette.iter().enumerate().take(count).skip(first) {
        let x = powers[(r as i32 - entry.r as i32).unsigned_abs() as usize];
        let y = powers[(g as i32 - entry.g as i32).unsigned_abs() as usize];
        let z = powers[(b as i32 - entry.b as i32).unsigned_abs() as usize];
        let dist = x + y + z;

        let better = if reverse_lookup {
            dist <= best_dist
        } else {
            dist < best_dist
        };

        if color == first || better {
            if dist == 0.0 && !reverse_lookup {
                return Ok(color as u8);
            }
            best_dist = dist;
            best_color = color;
        }
    }

    Ok(best_color as u8)
}

/// [`ptm_best_color`] with its parameters taken from `settings`.
#[allow(clippy::too_many_arguments)]
pub fn ptm_best_color_with_settings(
    table: &mut PowerTable,
    palette: &[PalEntry],
    r: u8,
    g: u8,
    b: u8,
    settings: PerceptualSearchSettings,
    first: usize,
    count: usize,
) -> Result<u8, PaletteError> {
    ptm_best_color(
        table,
        palette,
        r,
        g,
        b,
        settings.reverse_lookup,
        settings.gamma,
        first,
        count,
    )
}

/// [`ptm_best_color`] using a power table owned by the calling thread.
///
/// Successive calls on the same thread with the same gamma share one table build.
/// Threads never share the table, so concurrent callers with different gammas don't
/// invalidate each other.
pub fn ptm_best_color_cached(
    palette: &[PalEntry],
    r: u8,
    g: u8,
    b: u8,
    settings: PerceptualSearchSettings,
    first: usize,
    count: usize,
) -> Result<u8, PaletteError> {
    THREAD_POWER_TABLE.with(|table| {
        ptm_best_color_with_settings(
            &mut table.borrow_mut(),
            palette,
            r,
            g,
            b,
            settings,
            first,
            count,
        )
    })
}

/// Gamma the calling thread's cached table is currently built for.
#[cfg(test)]
pub(crate) fn cached_table_gamma() -> Option<f32> {
    THREAD_POWER_TABLE.with(|table| table.borrow().gamma())
}
