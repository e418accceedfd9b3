//! Trait definitions for the distributions backing stochastic nodes
use rand::Rng;

/// Log density of a distribution over `X`
pub trait HasDensity<X> {
    /// Probability function
    fn f(&self, x: &X) -> f64 {
        self.ln_f(x).exp()
    }

    /// Log probability function
    fn ln_f(&self, x: &X) -> f64;
}

/// A distribution that can generate variates of type `X`
pub trait Sampleable<X> {
    /// Single draw from the distribution
    fn draw<R: Rng>(&self, rng: &mut R) -> X;

    /// Multiple draws from the distribution
    fn sample<R: Rng>(&self, n: usize, mut rng: &mut R) -> Vec<X> {
        (0..n).map(|_| self.draw(&mut rng)).collect()
    }
}

/// Random variable
///
/// Anything with a density that can also be drawn from.
pub trait Rv<X>: HasDensity<X> + Sampleable<X> {}

impl<X, T> Rv<X> for T where T: HasDensity<X> + Sampleable<X> {}

/// Identifies the support of the distribution
pub trait Support<X> {
    /// Returns `true` if `x` is in the support of the distribution
    fn supports(&self, x: &X) -> bool;
}

/// Continuous probability distributions
pub trait ContinuousDistr<X>: HasDensity<X> + Support<X> {
    /// The value of the Probability Density Function (PDF) at `x`
    fn pdf(&self, x: &X) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// The value of the log Probability Density Function (PDF) at `x`
    ///
    /// Zero density (-∞) outside the support.
    fn ln_pdf(&self, x: &X) -> f64 {
        if self.supports(x) {
            self.ln_f(x)
        } else {
            f64::NEG_INFINITY
        }
    }
}

/// Discrete probability distributions
pub trait DiscreteDistr<X>: HasDensity<X> + Support<X> {
    /// Probability mass function (PMF) at `x`
    fn pmf(&self, x: &X) -> f64 {
        self.ln_pmf(x).exp()
    }

    /// Log probability mass function (PMF) at `x`
    fn ln_pmf(&self, x: &X) -> f64 {
        if self.supports(x) {
            self.ln_f(x)
        } else {
            f64::NEG_INFINITY
        }
    }
}

pub trait Mean<M> {
    fn mean(&self) -> Option<M>;
}

pub trait Variance<V> {
    fn variance(&self) -> Option<V>;
}
