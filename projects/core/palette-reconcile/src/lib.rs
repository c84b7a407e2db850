#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod blend;
pub mod error;
pub mod remap;
pub mod search;

#[cfg(feature = "bench")]
pub mod bench;

// Re-export main types and functions
pub use blend::{
    blend, blend_in_place, blend_pixels, blend_with_implementation, BlendImplementation,
    BlendParameters,
};
pub use error::PaletteError;
pub use remap::{make_good_remap, make_remap, GoodRemapOutcome, RemapStats};
pub use search::{
    best_color, ptm_best_color, ptm_best_color_cached, ptm_best_color_with_settings,
    PerceptualSearchSettings, PowerTable,
};

// Re-export the palette types for convenience
pub use palette_reconcile_common::pal_entry::{PalEntry, Palette, PALETTE_SIZE};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
