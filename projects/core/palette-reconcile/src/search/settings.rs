//! Perceptual Search Settings
//!
//! Configuration for [`crate::ptm_best_color_with_settings`] and [`crate::ptm_best_color_cached`].

/// Settings for the perceptual (power-curve) colour search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptualSearchSettings {
    /// Exponent of the per-channel power curve, `(diff / 255) ^ gamma`.
    ///
    /// `1.0` sums the absolute channel differences; larger values penalise a single large
    /// channel error more than several small ones.
    pub gamma: f32,

    /// Whether the last of several equally close entries is preferred over the first.
    ///
    /// Reverse lookups also never stop early on an exact match, so the result is the
    /// highest-indexed duplicate rather than the lowest.
    pub reverse_lookup: bool,
}

impl Default for PerceptualSearchSettings {
    fn default() -> Self {
        Self {
            gamma: 1.0,
            reverse_lookup: false,
        }
    }
}

impl PerceptualSearchSettings {
    /// Returns an iterator over forward and reverse lookups for each of the given gammas.
    pub fn all_modes<const N: usize>(gammas: [f32; N]) -> impl Iterator<Item = Self> {
        gammas.into_iter().flat_map(|gamma| {
            [false, true].into_iter().map(move |reverse_lookup| Self {
                gamma,
                reverse_lookup,
            })
        })
    }
}
