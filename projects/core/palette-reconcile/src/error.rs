//! Validation errors for the safe palette APIs.

use crate::blend::BlendImplementation;
use thiserror::Error;

/// Errors returned when the arguments to a palette operation violate its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The search range `[first, count)` is empty, inverted, or extends past the palette.
    #[error("Invalid search range: [{first}, {count}) for a palette of {len} entries")]
    InvalidSearchRange {
        /// First index searched.
        first: usize,
        /// Exclusive end of the search.
        count: usize,
        /// Number of entries in the searched palette.
        len: usize,
    },

    /// The perceptual gamma exponent is NaN, infinite, zero or negative. Holds the raw `f32` bits.
    #[error("Invalid gamma: {} (must be finite and positive)", gamma_from_bits(.0))]
    InvalidGamma(u32),

    /// Blend alpha must be in `[0, 256]`.
    #[error("Blend alpha out of range: {0} (must be between 0 and 256)")]
    AlphaOutOfRange(u16),

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },

    /// The useful mask has fewer entries than the foreign palette.
    #[error("Useful mask too small: needed {needed}, got {actual}")]
    UsefulMaskTooSmall {
        /// The required mask size.
        needed: usize,
        /// The actual mask size provided.
        actual: usize,
    },

    /// A foreign palette must hold between 1 and 256 entries.
    #[error("Invalid palette length: {0} (must be between 1 and 256)")]
    InvalidPaletteLength(usize),

    /// The requested blending implementation can't run on this CPU.
    #[error("Blend implementation {0:?} is not supported on this CPU")]
    UnsupportedImplementation(BlendImplementation),
}

fn gamma_from_bits(bits: &u32) -> f32 {
    f32::from_bits(*bits)
}
