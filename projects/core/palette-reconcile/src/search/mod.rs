//! # Nearest Colour Search
//!
//! Finds the palette entry closest to an arbitrary RGB colour.
//!
//! Two metrics are provided:
//!
//! - [`best_color`]: squared euclidean distance in RGB space. Fast, and used as the fallback
//!   when building remap tables.
//! - [`ptm_best_color`]: a perceptual metric summing `(|diff| / 255) ^ gamma` over the three
//!   channels. The power curve is precomputed in a [`PowerTable`], which is reused until the
//!   gamma changes.
//!
//! Both scan the half-open index range `[first, count)` linearly.

mod best_color;
mod perceptual;
mod power_table;
mod settings;

pub(crate) use best_color::best_color_in;
pub use best_color::best_color;
pub use perceptual::{ptm_best_color, ptm_best_color_cached, ptm_best_color_with_settings};
pub use power_table::PowerTable;
pub use settings::PerceptualSearchSettings;
