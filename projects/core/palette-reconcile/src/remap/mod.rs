//! # Palette Remapping
//!
//! Translates colour indices between two 256 colour palettes.
//!
//! - [`make_remap`]: builds a `foreign index -> base index` table, pairing every foreign colour
//!   with an identical or nearest base colour. Base index 0 is reserved for transparency and is
//!   never picked.
//! - [`make_good_remap`]: frees index 0 of a palette for transparency by moving its colour to an
//!   alias index, and returns the remap table that rewrites existing pixels accordingly.

mod make_good_remap;
mod make_remap;
mod work_item;

pub use make_good_remap::{make_good_remap, GoodRemapOutcome};
pub use make_remap::{make_remap, RemapStats};
