//! Binomial distribution
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::impl_display;
use crate::misc::ln_binom;
use crate::traits::{
    DiscreteDistr, HasDensity, Mean, Sampleable, Support, Variance,
};

/// [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
/// with *n* trials and success probability *p*
///
/// The density is evaluated through the log gamma function, so it is
/// defined for any real `k` in `[0, n]`, integral or not.
///
/// # Example
///
/// ```
/// use gmc::dist::Binomial;
/// use gmc::traits::DiscreteDistr;
///
/// let binom = Binomial::new(4, 0.5).unwrap();
///
/// assert!((binom.pmf(&2.0) - 0.375).abs() < 1E-12);
/// assert_eq!(binom.pmf(&5.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Binomial {
    /// Total number of trials
    n: u64,
    /// Probability of a success
    p: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BinomialError {
    /// The number of trials is zero
    NIsZero,
    /// Bernoulli p is less than zero
    PLessThanZero { p: f64 },
    /// Bernoulli p is greater than one
    PGreaterThanOne { p: f64 },
    /// Bernoulli p is infinite or NaN
    PNotFinite { p: f64 },
}

impl Binomial {
    /// Create a new Binomial distribution
    ///
    /// # Arguments
    ///
    /// - n: the total number of trials
    /// - p: the pobability of success
    pub fn new(n: u64, p: f64) -> Result<Self, BinomialError> {
        if n == 0 {
            Err(BinomialError::NIsZero)
        } else if p < 0.0 {
            Err(BinomialError::PLessThanZero { p })
        } else if p > 1.0 {
            Err(BinomialError::PGreaterThanOne { p })
        } else if !p.is_finite() {
            Err(BinomialError::PNotFinite { p })
        } else {
            Ok(Binomial { n, p })
        }
    }

    /// Creates a new Binomial without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(n: u64, p: f64) -> Self {
        Binomial { n, p }
    }

    /// A Binomial distribution with a 50% chance of success
    #[inline]
    pub fn uniform(n: u64) -> Self {
        Binomial::new_unchecked(n, 0.5)
    }

    /// Get the number of trials
    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Get the probability of success
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

impl From<&Binomial> for String {
    fn from(b: &Binomial) -> String {
        format!("Binomial({}; p: {})", b.n, b.p)
    }
}

impl_display!(Binomial);

impl HasDensity<f64> for Binomial {
    fn ln_f(&self, k: &f64) -> f64 {
        let nf = self.n as f64;
        if *k < 0.0 || *k > nf || k.fract() != 0.0 {
            return f64::NEG_INFINITY;
        }
        // 0 * ln(0) terms vanish when p is 0 or 1
        let success = if *k == 0.0 { 0.0 } else { k * self.p.ln() };
        let failure = if *k == nf {
            0.0
        } else {
            (nf - k) * self.q().ln()
        };
        ln_binom(nf, *k) + success + failure
    }
}

impl Sampleable<f64> for Binomial {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let b = rand_distr::Binomial::new(self.n, self.p).unwrap();
        rng.sample(b) as f64
    }
}

impl Support<f64> for Binomial {
    fn supports(&self, k: &f64) -> bool {
        *k >= 0.0 && *k <= self.n as f64 && k.fract() == 0.0
    }
}

impl DiscreteDistr<f64> for Binomial {}

impl Mean<f64> for Binomial {
    fn mean(&self) -> Option<f64> {
        Some(self.n as f64 * self.p)
    }
}

impl Variance<f64> for Binomial {
    fn variance(&self) -> Option<f64> {
        Some(self.n as f64 * self.p * self.q())
    }
}

impl std::error::Error for BinomialError {}

impl fmt::Display for BinomialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PLessThanZero { p } => {
                write!(f, "p ({}) was less than zero", p)
            }
            Self::PGreaterThanOne { p } => {
                write!(f, "p ({}) was greater than one", p)
            }
            Self::PNotFinite { p } => write!(f, "p ({}) was non-finite", p),
            Self::NIsZero => write!(f, "n was zero"),
        }
    }
}
