#![no_main]

// Checks that make_good_remap always leaves a palette in which the colour of index 0 is still
// reachable through remap[0], and that every remapped pixel keeps its original colour.

use libfuzzer_sys::{arbitrary, fuzz_target};
use palette_reconcile::{make_good_remap, GoodRemapOutcome};
use palette_reconcile_common::pal_entry::palette_from_u32;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct GoodRemapInput {
    pub palette: [u32; 256],
}

fuzz_target!(|input: GoodRemapInput| {
    let original = palette_from_u32(&input.palette);
    let mut base = original;
    let mut remap = [0u8; 256];

    let outcome = make_good_remap(&mut base, &mut remap);

    // Every pixel, after remapping, still shows its original colour.
    for x in 0..256 {
        assert!(base[remap[x] as usize].same_rgb(original[x]), "index {x} changed colour");
    }

    match outcome {
        GoodRemapOutcome::ExistingDuplicate(index) => {
            assert_ne!(index, 0);
            assert_eq!(base, original);
        }
        GoodRemapOutcome::CreatedDuplicate { new0, dup } => {
            assert!(new0 != 0 && new0 < dup);
            assert!(original[new0 as usize].same_rgb(original[dup as usize]));
        }
        GoodRemapOutcome::NoDuplicate => {
            assert_eq!(remap[0], 0);
            assert_eq!(base, original);
        }
    }
});
