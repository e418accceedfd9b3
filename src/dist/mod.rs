//! Probability distributions evaluated by stochastic nodes
mod bernoulli;
mod beta;
mod binomial;
mod gaussian;
mod uniform;

pub use bernoulli::{Bernoulli, BernoulliError};
pub use beta::{Beta, BetaError};
pub use binomial::{Binomial, BinomialError};
pub use gaussian::{Gaussian, GaussianError};
pub use uniform::{Uniform, UniformError};
