//! Markov chain samplers and the targets they sample from
mod metropolis;

pub use metropolis::{MetropolisHastings, MetropolisHastingsError};

use rand::Rng;

/// A distribution over ℝ<sup>k</sup> known through its log density
///
/// The density need not be normalized. A point outside the support has log
/// density -∞.
pub trait Target {
    /// Log density at `x`
    ///
    /// Takes `&mut self` because evaluating a graphical model assigns `x` to
    /// its variables.
    fn ln_f(&mut self, x: &[f64]) -> f64;

    /// The dimension, k, of the points `ln_f` accepts
    fn n_dims(&self) -> usize;
}

/// Draws a chain of points from a [`Target`]
pub trait Sampler {
    /// Draw `n` points starting the chain at `initial`
    ///
    /// Returns `n` rows of `target.n_dims()` values each. `initial` must have
    /// `target.n_dims()` values.
    fn sample<T: Target, R: Rng>(
        &self,
        target: &mut T,
        initial: &[f64],
        n: usize,
        rng: &mut R,
    ) -> Vec<Vec<f64>>;
}
