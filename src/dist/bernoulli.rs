//! Bernoulli distribution over x in {0, 1}
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::impl_display;
use crate::traits::{
    DiscreteDistr, HasDensity, Mean, Sampleable, Support, Variance,
};

/// [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution)
/// with success probability *p*
///
/// Outcomes are encoded as `0.0` (failure) and `1.0` (success).
///
/// # Example
///
/// ```
/// use gmc::dist::Bernoulli;
/// use gmc::traits::DiscreteDistr;
///
/// let b = Bernoulli::new(0.75).unwrap();
///
/// assert!((b.pmf(&1.0) - 0.75).abs() < 1E-12);
/// assert!((b.pmf(&0.0) - 0.25).abs() < 1E-12);
/// assert_eq!(b.pmf(&0.5), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Bernoulli {
    /// Probability of a success (1)
    p: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BernoulliError {
    /// Bernoulli p is less than zero
    PLessThanZero { p: f64 },
    /// Bernoulli p is greater than one
    PGreaterThanOne { p: f64 },
    /// Bernoulli p is infinite or NaN
    PNotFinite { p: f64 },
}

impl Bernoulli {
    /// Create a new Bernoulli distribution.
    pub fn new(p: f64) -> Result<Self, BernoulliError> {
        if !p.is_finite() {
            Err(BernoulliError::PNotFinite { p })
        } else if p > 1.0 {
            Err(BernoulliError::PGreaterThanOne { p })
        } else if p < 0.0 {
            Err(BernoulliError::PLessThanZero { p })
        } else {
            Ok(Bernoulli { p })
        }
    }

    /// Creates a new Bernoulli without checking whether the parameter is
    /// valid.
    #[inline]
    pub fn new_unchecked(p: f64) -> Self {
        Bernoulli { p }
    }

    /// A Bernoulli distribution with a 50% chance of success
    #[inline]
    pub fn uniform() -> Self {
        Bernoulli::new_unchecked(0.5)
    }

    /// Get p, the probability of success.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// The complement of `p`, i.e. `(1 - p)`.
    #[inline]
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }
}

impl Default for Bernoulli {
    fn default() -> Self {
        Bernoulli::uniform()
    }
}

impl From<&Bernoulli> for String {
    fn from(b: &Bernoulli) -> String {
        format!("Bernoulli(p: {})", b.p)
    }
}

impl_display!(Bernoulli);

impl HasDensity<f64> for Bernoulli {
    fn ln_f(&self, x: &f64) -> f64 {
        if *x == 1.0 {
            self.p.ln()
        } else if *x == 0.0 {
            self.q().ln()
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Sampleable<f64> for Bernoulli {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.gen();
        if u < self.p {
            1.0
        } else {
            0.0
        }
    }
}

impl Support<f64> for Bernoulli {
    fn supports(&self, x: &f64) -> bool {
        *x == 0.0 || *x == 1.0
    }
}

impl DiscreteDistr<f64> for Bernoulli {}

impl Mean<f64> for Bernoulli {
    fn mean(&self) -> Option<f64> {
        Some(self.p)
    }
}

impl Variance<f64> for Bernoulli {
    fn variance(&self) -> Option<f64> {
        Some(self.p * self.q())
    }
}

impl std::error::Error for BernoulliError {}

impl fmt::Display for BernoulliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PLessThanZero { p } => {
                write!(f, "p ({}) was less than zero", p)
            }
            Self::PGreaterThanOne { p } => {
                write!(f, "p ({}) was greater than one", p)
            }
            Self::PNotFinite { p } => write!(f, "p ({}) was non-finite", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_basic_impls, test_draws_supported};

    const TOL: f64 = 1E-12;

    test_basic_impls!(Bernoulli::uniform());
    test_draws_supported!(Bernoulli::new(0.3).unwrap());

    #[test]
    fn new_should_reject_out_of_range_p() {
        assert!(Bernoulli::new(-0.1).is_err());
        assert!(Bernoulli::new(1.1).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
        assert!(Bernoulli::new(0.0).is_ok());
        assert!(Bernoulli::new(1.0).is_ok());
    }

    #[test]
    fn ln_pmf() {
        let b = Bernoulli::new(0.2).unwrap();
        assert::close(b.ln_pmf(&1.0), 0.2_f64.ln(), TOL);
        assert::close(b.ln_pmf(&0.0), 0.8_f64.ln(), TOL);
    }

    #[test]
    fn ln_f_of_non_binary_value_is_neg_infinity() {
        let b = Bernoulli::uniform();
        assert_eq!(b.ln_f(&0.4), f64::NEG_INFINITY);
        assert_eq!(b.ln_f(&2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn degenerate_draws() {
        let mut rng = rand::thread_rng();
        let always = Bernoulli::new(1.0).unwrap();
        let never = Bernoulli::new(0.0).unwrap();
        assert!(always.sample(50, &mut rng).iter().all(|&x| x == 1.0));
        assert!(never.sample(50, &mut rng).iter().all(|&x| x == 0.0));
    }
}
