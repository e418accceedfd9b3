use rand::Rng;

use super::{OutOfBounds, RandomVariable, Value, Var};
use crate::dist::{Bernoulli, Beta, Binomial, Gaussian};
use crate::graph::Graph;
use crate::result::{Error, ErrorKind, Result};
use crate::traits::{ContinuousDistr, HasDensity, Sampleable};

/// The distribution family of a random variable and the nodes holding its
/// parameters
#[derive(Clone, Debug, PartialEq)]
pub enum Family {
    /// Normal(μ, σ) over the real line
    Normal { mu: Var, sigma: Var },
    /// Beta(α, β) over [0, 1]
    Beta { alpha: Var, beta: Var },
    /// Bernoulli(p) over {0, 1}
    Bernoulli { p: Var },
    /// Binomial(n, p) over {0, ..., n}; `n` is fixed
    Binomial { n: u64, p: Var },
}

impl Family {
    /// Value a new variable of this family starts with
    pub fn default_value(&self, graph: &Graph) -> f64 {
        match self {
            Family::Normal { mu, .. } => graph.value(*mu),
            Family::Beta { .. } => 0.5,
            Family::Bernoulli { .. } => 0.0,
            Family::Binomial { n, p } => *n as f64 * graph.value(*p),
        }
    }

    /// Check that `x` lies in the support of the family
    ///
    /// Discrete families round `x` to the nearest integer before checking.
    pub fn check(&self, x: f64) -> std::result::Result<(), OutOfBounds> {
        match self {
            Family::Normal { .. } => Ok(()),
            Family::Beta { .. } => {
                if (0.0..=1.0).contains(&x) {
                    Ok(())
                } else {
                    Err(OutOfBounds::new(format!(
                        "Beta is defined on [0, 1], got value {x}"
                    )))
                }
            }
            Family::Bernoulli { .. } => {
                let rounded = x.round();
                if rounded == 0.0 || rounded == 1.0 {
                    Ok(())
                } else {
                    Err(OutOfBounds::new(format!(
                        "a Bernoulli-distributed random variable can only \
                         take the values 0 or 1, got value {x}"
                    )))
                }
            }
            Family::Binomial { n, .. } => {
                let rounded = x.round();
                if (0.0..=*n as f64).contains(&rounded) {
                    Ok(())
                } else {
                    Err(OutOfBounds::new(format!(
                        "a binomial-distributed random variable can only \
                         take the integers between 0 and {n}, got value {x}"
                    )))
                }
            }
        }
    }

    pub fn parents(&self) -> Vec<Var> {
        match self {
            Family::Normal { mu, sigma } => vec![*mu, *sigma],
            Family::Beta { alpha, beta } => vec![*alpha, *beta],
            Family::Bernoulli { p } | Family::Binomial { p, .. } => vec![*p],
        }
    }
}

/// A named random variable with a mutable current value
#[derive(Clone, Debug, PartialEq)]
pub struct RandomNode {
    name: String,
    value: f64,
    family: Family,
}

impl RandomNode {
    /// Create a node starting at its family's default value
    pub fn new(name: impl Into<String>, family: Family, graph: &Graph) -> Self {
        let value = family.default_value(graph);
        RandomNode {
            name: name.into(),
            value,
            family,
        }
    }

    #[inline]
    pub fn family(&self) -> &Family {
        &self.family
    }

    /// The stored value, which needs no graph to read
    #[inline]
    pub fn current(&self) -> f64 {
        self.value
    }

    /// Assign a value without checking the support
    ///
    /// Used for variates drawn from the node's own distribution.
    #[inline]
    pub(crate) fn set_value_unchecked(&mut self, x: f64) {
        self.value = x;
    }

    fn invalid(&self, err: impl std::fmt::Display) -> Error {
        Error::new(
            ErrorKind::InvalidParameter,
            format!("cannot draw {}: {}", self.name, err),
        )
    }
}

impl Value for RandomNode {
    fn value(&self, _graph: &Graph) -> f64 {
        self.value
    }

    fn parents(&self) -> Vec<Var> {
        self.family.parents()
    }
}

impl RandomVariable for RandomNode {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_value(&mut self, x: f64) -> std::result::Result<(), OutOfBounds> {
        self.family.check(x)?;
        // discrete families keep the unrounded value
        self.value = x;
        Ok(())
    }

    fn ln_f(&self, graph: &Graph) -> f64 {
        // Parameters outside their domain give zero density
        let x = &self.value;
        match self.family {
            Family::Normal { mu, sigma } => {
                Gaussian::new(graph.value(mu), graph.value(sigma))
                    .map_or(f64::NEG_INFINITY, |g| g.ln_pdf(x))
            }
            Family::Beta { alpha, beta } => {
                Beta::new(graph.value(alpha), graph.value(beta))
                    .map_or(f64::NEG_INFINITY, |b| b.ln_pdf(x))
            }
            Family::Bernoulli { p } => Bernoulli::new(graph.value(p))
                .map_or(f64::NEG_INFINITY, |b| b.ln_f(x)),
            Family::Binomial { n, p } => Binomial::new(n, graph.value(p))
                .map_or(f64::NEG_INFINITY, |b| b.ln_f(x)),
        }
    }

    fn draw<R: Rng>(&self, graph: &Graph, rng: &mut R) -> Result<f64> {
        match self.family {
            Family::Normal { mu, sigma } => {
                Gaussian::new(graph.value(mu), graph.value(sigma))
                    .map(|g| g.draw(rng))
                    .map_err(|err| self.invalid(err))
            }
            Family::Beta { alpha, beta } => {
                Beta::new(graph.value(alpha), graph.value(beta))
                    .map(|b| b.draw(rng))
                    .map_err(|err| self.invalid(err))
            }
            Family::Bernoulli { p } => Bernoulli::new(graph.value(p))
                .map(|b| b.draw(rng))
                .map_err(|err| self.invalid(err)),
            Family::Binomial { n, p } => Binomial::new(n, graph.value(p))
                .map(|b| b.draw(rng))
                .map_err(|err| self.invalid(err)),
        }
    }
}
