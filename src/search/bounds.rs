//! Alpha-beta pruning bounds.

/// Running guarantees carried down an alpha-beta search path.
///
/// `alpha` is the best value the maximizer can already force on the path
/// to the root; `beta` the best the minimizing opponents can force.
/// Cutoffs use strict inequality: a node returns early only when its value
/// is strictly outside the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub alpha: f64,
    pub beta: f64,
}

impl Bounds {
    /// The root window, (-inf, +inf).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }

    /// A maximizing node holding `value` can stop: the opponent above it
    /// already has something better.
    #[inline]
    #[must_use]
    pub fn cuts_max(&self, value: f64) -> bool {
        value > self.beta
    }

    /// A minimizing node holding `value` can stop: the maximizer above it
    /// already has something better.
    #[inline]
    #[must_use]
    pub fn cuts_min(&self, value: f64) -> bool {
        value < self.alpha
    }

    /// Tighten alpha after a maximizing child returns `value`.
    #[inline]
    pub fn raise_alpha(&mut self, value: f64) {
        self.alpha = self.alpha.max(value);
    }

    /// Tighten beta after a minimizing child returns `value`.
    #[inline]
    pub fn lower_beta(&mut self, value: f64) {
        self.beta = self.beta.min(value);
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}
