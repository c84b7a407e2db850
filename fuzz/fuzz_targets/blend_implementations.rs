#![no_main]

// Checks that every blending implementation supported by this CPU produces the same output
// as the per-channel formula, for arbitrary pixels, colours and pixel counts.

use libfuzzer_sys::{arbitrary, fuzz_target};
use palette_reconcile::{
    blend_in_place, blend_with_implementation, BlendImplementation, BlendParameters,
};
use palette_reconcile_common::pal_entry::PalEntry;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct BlendInput {
    pub color: [u8; 3],
    pub alpha: u16,
    pub pixels: Vec<u32>,
}

fuzz_target!(|input: BlendInput| {
    let params = BlendParameters::new(
        input.color[0],
        input.color[1],
        input.color[2],
        input.alpha % (BlendParameters::MAX_ALPHA + 1),
    )
    .unwrap();

    let pixels: Vec<PalEntry> = input.pixels.iter().map(|&x| PalEntry::from_u32(x)).collect();

    let a = params.alpha() as u32;
    let mix = |colour: u8, source: u8| ((colour as u32 * a + source as u32 * (256 - a)) >> 8) as u8;
    let expected: Vec<PalEntry> = pixels
        .iter()
        .map(|pixel| match params.alpha() {
            0 => *pixel,
            BlendParameters::MAX_ALPHA => params.solid_color(),
            _ => PalEntry::new(
                mix(params.r(), pixel.r),
                mix(params.g(), pixel.g),
                mix(params.b(), pixel.b),
                pixel.a,
            ),
        })
        .collect();

    for &implementation in BlendImplementation::all_values() {
        if !implementation.is_supported() {
            continue;
        }

        let mut output = vec![PalEntry::default(); pixels.len()];
        blend_with_implementation(&pixels, &mut output, params, implementation).unwrap();
        assert_eq!(output, expected, "{implementation:?} mismatch for {params:?}");
    }

    let mut in_place = pixels.clone();
    blend_in_place(&mut in_place, params);
    assert_eq!(in_place, expected, "in place mismatch for {params:?}");
});
