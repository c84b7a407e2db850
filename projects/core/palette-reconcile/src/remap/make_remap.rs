use super::work_item::{compare_work_items, Origin, RemapWorkItem};
use crate::error::PaletteError;
use crate::search::best_color_in;
use log::debug;
use palette_reconcile_common::pal_entry::{PalEntry, Palette, PALETTE_SIZE};

/// Base palette entries taking part in matching: everything except the reserved index 0.
const BASE_ENTRIES: usize = PALETTE_SIZE - 1;

/// How each foreign palette entry was resolved by [`make_remap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemapStats {
    /// Entries with a bit-identical colour in the base palette.
    pub exact: usize,
    /// Entries resolved with a nearest colour search.
    pub near: usize,
    /// Entries not marked useful, forced to 0.
    pub skipped: usize,
}

/// Builds a table translating indices of the `foreign` palette into indices of the `base` palette.
///
/// After the call, `remap[i]` holds the base index whose colour is closest to `foreign[i]`,
/// for every useful `i`. Entries that aren't useful are set to 0.
///
/// Base index 0 is never a match target; it is reserved for transparency.
///
/// # Algorithm
///
/// 1. Base entries 1-255 and useful foreign entries are collected into one list.
/// 2. The list is sorted by colour, with foreign entries placed before base entries of the
///    same colour.
/// 3. Every foreign entry directly followed by a base entry of identical colour is an exact match.
/// 4. Every other foreign entry is matched with [`best_color`](crate::best_color) over base
///    indices `[1, 255)`.
///
/// Step 3 avoids the 254 entry linear search for every colour that has an exact duplicate.
///
/// # Parameters
///
/// - `base`: The palette to translate into.
/// - `foreign`: The palette to translate from, 1 to 256 entries.
/// - `remap`: Receives the translation; must hold at least `foreign.len()` entries.
/// - `useful`: Optional per-entry mask; a zero byte excludes that entry from matching.
///   `None` treats every entry as useful.
///
/// # Errors
///
/// - [`PaletteError::InvalidPaletteLength`] if `foreign` is empty or has more than 256 entries
/// - [`PaletteError::OutputBufferTooSmall`] if `remap` is shorter than `foreign`
/// - [`PaletteError::UsefulMaskTooSmall`] if `useful` is shorter than `foreign`
///
/// # Examples
///
/// ```
/// use palette_reconcile::make_remap;
/// use palette_reconcile_common::pal_entry::PalEntry;
///
/// # fn main() -> Result<(), palette_reconcile::PaletteError> {
/// let base: [PalEntry; 256] = core::array::from_fn(|x| PalEntry::rgb_only(x as u8, 0, 0));
/// let foreign = [PalEntry::rgb_only(10, 0, 0), PalEntry::rgb_only(20, 1, 0)];
/// let mut remap = [0u8; 2];
///
/// let stats = make_remap(&base, &foreign, &mut remap, None)?;
/// assert_eq!(remap, [10, 20]);
/// assert_eq!((stats.exact, stats.near), (1, 1));
/// # Ok(())
/// # }
/// ```
pub fn make_remap(
    base: &Palette,
    foreign: &[PalEntry],
    remap: &mut [u8],
    useful: Option<&[u8]>,
) -> Result<RemapStats, PaletteError> {
    if foreign.is_empty() || foreign.len() > PALETTE_SIZE {
        return Err(PaletteError::InvalidPaletteLength(foreign.len()));
    }

    if remap.len() < foreign.len() {
        return Err(PaletteError::OutputBufferTooSmall {
            needed: foreign.len(),
            actual: remap.len(),
        });
    }

    if let Some(mask) = useful {
        if mask.len() < foreign.len() {
            return Err(PaletteError::UsefulMaskTooSmall {
                needed: foreign.len(),
                actual: mask.len(),
            });
        }
    }

    let mut stats = RemapStats::default();
    let mut workspace = [RemapWorkItem::EMPTY; BASE_ENTRIES + PALETTE_SIZE];

    for (x, &entry) in base.iter().enumerate().skip(1) {
        workspace[x - 1] = RemapWorkItem::new(entry, Origin::Base, x as u8);
    }

    let mut len = BASE_ENTRIES;
    for (x, &entry) in foreign.iter().enumerate() {
        if useful.is_none_or(|mask| mask[x] != 0) {
            workspace[len] = RemapWorkItem::new(entry, Origin::Foreign, x as u8);
            len += 1;
        } else {
            remap[x] = 0;
            stats.skipped += 1;
        }
    }

    let workspace = &mut workspace[..len];
    workspace.sort_unstable_by(compare_work_items);

    // Find exact matches
    let mut x = 0;
    while x + 1 < workspace.len() {
        let item = workspace[x];
        let next = workspace[x + 1];
        if item.origin == Origin::Foreign && next.origin == Origin::Base && item.color == next.color {
            remap[item.index as usize] = next.index;
            workspace[x].origin = Origin::Consumed;
            stats.exact += 1;
            x += 2;
        } else {
            x += 1;
        }
    }

    // Find near matches
    for item in workspace.iter().filter(|item| item.origin == Origin::Foreign) {
        let color = PalEntry::from_u32(item.color);
        remap[item.index as usize] = best_color_in(base, color.r, color.g, color.b, 1, BASE_ENTRIES);
        stats.near += 1;
    }

    debug!(
        "built remap for {} colours: {} exact, {} near, {} skipped",
        foreign.len(),
        stats.exact,
        stats.near,
        stats.skipped
    );
    Ok(stats)
}
