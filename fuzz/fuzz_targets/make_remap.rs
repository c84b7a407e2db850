#![no_main]

// Checks the guarantees of make_remap on arbitrary palettes:
// useful entries never map to index 0, exact duplicates map to an entry of identical colour,
// and entries outside the useful mask map to 0.

use libfuzzer_sys::{arbitrary, fuzz_target};
use palette_reconcile::{best_color, make_remap};
use palette_reconcile_common::pal_entry::{palette_from_u32, PalEntry};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RemapInput {
    pub base: [u32; 256],
    pub foreign: Vec<u32>,
    pub useful: Option<Vec<bool>>,
}

fuzz_target!(|input: RemapInput| {
    if input.foreign.is_empty() || input.foreign.len() > 256 {
        return;
    }

    let base = palette_from_u32(&input.base);
    let foreign: Vec<PalEntry> = input.foreign.iter().map(|&x| PalEntry::from_u32(x)).collect();
    let useful: Option<Vec<u8>> = input.useful.map(|mask| {
        (0..foreign.len())
            .map(|x| mask.get(x).copied().unwrap_or(true) as u8)
            .collect()
    });

    let mut remap = vec![0xAAu8; foreign.len()];
    let stats = make_remap(&base, &foreign, &mut remap, useful.as_deref()).unwrap();
    assert_eq!(stats.exact + stats.near + stats.skipped, foreign.len());

    for (x, entry) in foreign.iter().enumerate() {
        let is_useful = useful.as_ref().is_none_or(|mask| mask[x] != 0);
        if !is_useful {
            assert_eq!(remap[x], 0);
            continue;
        }

        let target = remap[x];
        assert_ne!(target, 0, "foreign index {x} mapped to the reserved index");

        // Whichever way it was found, the target is as close as the best entry in 1..=254.
        let nearest = best_color(&base, entry.r, entry.g, entry.b, 1, 255).unwrap() as usize;
        let distance = |candidate: PalEntry| {
            let dr = candidate.r as i32 - entry.r as i32;
            let dg = candidate.g as i32 - entry.g as i32;
            let db = candidate.b as i32 - entry.b as i32;
            dr * dr + dg * dg + db * db
        };
        assert!(distance(base[target as usize]) <= distance(base[nearest]));
    }
});
