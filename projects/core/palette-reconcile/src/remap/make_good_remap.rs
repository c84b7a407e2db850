use log::{debug, warn};
use palette_reconcile_common::pal_entry::{Palette, PALETTE_SIZE};

/// How [`make_good_remap`] freed up palette index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoodRemapOutcome {
    /// The palette already had another entry with the colour of index 0.
    ExistingDuplicate(u8),

    /// Entry `new0` was overwritten with the colour of index 0.
    /// Its old colour is still available at entry `dup`.
    CreatedDuplicate {
        /// Entry that now holds the colour of index 0.
        new0: u8,
        /// Entry that holds the colour `new0` had before.
        dup: u8,
    },

    /// Every colour in the palette is unique; index 0 could not be given an alias.
    NoDuplicate,
}

/// Frees palette index 0 for use as the transparent colour, while keeping its colour usable.
///
/// Index 0 is also a regular colour in many palettes. To reserve it for transparency, another
/// index must carry the same colour so that opaque pixels can be remapped to it. `remap` is set to
/// the identity, then:
///
/// 1. If some entry in 1-255 already has the colour of index 0, `remap[0]` points to the first
///    such entry.
/// 2. Otherwise, a pair of entries with identical colour is located. One of them (the lower index)
///    is overwritten in `base` with the colour of index 0; `remap[0]` points to it, and its own
///    `remap` entry points to the other half of the pair, which still holds its old colour.
/// 3. If the palette holds no duplicates at all, `remap` stays the identity.
///
/// Colours are compared on RGB only; the alpha byte is ignored.
pub fn make_good_remap(base: &mut Palette, remap: &mut [u8; PALETTE_SIZE]) -> GoodRemapOutcome {
    for (x, target) in remap.iter_mut().enumerate() {
        *target = x as u8;
    }
    let color0 = base[0];

    // Look for an exact match of color 0 first.
    if let Some(x) = base[1..].iter().position(|entry| entry.same_rgb(color0)) {
        let index = (x + 1) as u8;
        remap[0] = index;
        debug!("palette colour 0 already duplicated at index {index}");
        return GoodRemapOutcome::ExistingDuplicate(index);
    }

    // Otherwise find any pair of duplicate colours and turn one of them into a copy of color 0.
    // Packed as 0xIIRRGGBB, with the palette index in the top byte.
    let mut sorted: [u32; PALETTE_SIZE] =
        core::array::from_fn(|x| base[x].rgb() | (x as u32) << 24);
    sorted.sort_unstable_by_key(|packed| (packed & 0x00FF_FFFF, packed >> 24));

    for x in (1..PALETTE_SIZE).rev() {
        if (sorted[x] & 0x00FF_FFFF) == (sorted[x - 1] & 0x00FF_FFFF) {
            let first = (sorted[x] >> 24) as u8;
            let second = (sorted[x - 1] >> 24) as u8;
            // The lower index becomes the copy of color 0.
            let new0 = first.min(second);
            let dup = first.max(second);

            remap[0] = new0;
            remap[new0 as usize] = dup;
            base[new0 as usize] = color0;

            debug!("palette colour 0 copied into index {new0}, its colour remains at {dup}");
            return GoodRemapOutcome::CreatedDuplicate { new0, dup };
        }
    }

    warn!("palette has no duplicate colours, index 0 cannot be reserved for transparency");
    GoodRemapOutcome::NoDuplicate
}
