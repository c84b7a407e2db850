//! Cache of the power curve used by the perceptual colour search.

use log::trace;

/// 256 precomputed values of `(x / 255) ^ gamma`, keyed by the gamma they were built for.
///
/// Building the table costs 256 `powf` evaluations; a search over a palette reads it
/// `3 * count` times, so the table is reused for as long as the gamma stays the same.
/// A table starts out stale and is (re)built on the first request for a different gamma.
#[derive(Debug, Clone)]
pub struct PowerTable {
    /// Gamma the table was built for. `None` until first use.
    gamma: Option<f32>,
    table: [f64; 256],
}

impl PowerTable {
    /// Creates an empty (stale) table. No `powf` work is done until the first lookup.
    pub const fn new() -> Self {
        Self {
            gamma: None,
            table: [0.0; 256],
        }
    }

    /// Returns the gamma the table currently holds values for, if it has been built.
    #[inline]
    pub fn gamma(&self) -> Option<f32> {
        self.gamma
    }

    /// Returns `true` if the table holds values for `gamma` and can be used without a rebuild.
    #[inline]
    pub fn is_built_for(&self, gamma: f32) -> bool {
        self.gamma == Some(gamma)
    }

    /// Returns the table for `gamma`, rebuilding it first if it is stale.
    #[inline]
    pub fn table_for(&mut self, gamma: f32) -> &[f64; 256] {
        if !self.is_built_for(gamma) {
            self.rebuild(gamma);
        }
        &self.table
    }

    /// Marks the table as stale; the next lookup rebuilds it.
    #[inline]
    pub fn invalidate(&mut self) {
        self.gamma = None;
    }

    fn rebuild(&mut self, gamma: f32) {
        trace!("rebuilding power table for gamma {gamma}");
        let exponent = gamma as f64;
        for (x, value) in self.table.iter_mut().enumerate() {
            *value = (x as f64 / 255.0).powf(exponent);
        }
        self.gamma = Some(gamma);
    }
}

impl Default for PowerTable {
    fn default() -> Self {
        Self::new()
    }
}
