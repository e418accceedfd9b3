//! Continuous uniform distribution, U(a, b) on the interval x in [a, b]
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;

use crate::impl_display;
use crate::traits::{
    ContinuousDistr, HasDensity, Mean, Sampleable, Support, Variance,
};

/// [Continuous uniform distribution](https://en.wikipedia.org/wiki/Uniform_distribution_(continuous)),
/// U(a, b) on the interval x in [a, b]
///
/// Draws fall in the half-open interval [a, b).
///
/// # Example
///
/// ```
/// use gmc::dist::Uniform;
/// use gmc::traits::ContinuousDistr;
///
/// let u = Uniform::new(2.0, 4.0).unwrap();
///
/// assert!((u.pdf(&3.0) - 0.5).abs() < 1E-12);
/// assert_eq!(u.pdf(&4.5), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Uniform {
    a: f64,
    b: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum UniformError {
    /// A >= B
    InvalidInterval { a: f64, b: f64 },
    /// A was infinite or NaN
    ANotFinite { a: f64 },
    /// B was infinite or NaN
    BNotFinite { b: f64 },
}

impl Uniform {
    /// Create a new uniform distribution on [a, b]
    #[inline]
    pub fn new(a: f64, b: f64) -> Result<Self, UniformError> {
        if a >= b {
            Err(UniformError::InvalidInterval { a, b })
        } else if !a.is_finite() {
            Err(UniformError::ANotFinite { a })
        } else if !b.is_finite() {
            Err(UniformError::BNotFinite { b })
        } else {
            Ok(Uniform::new_unchecked(a, b))
        }
    }

    /// Creates a new Uniform without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(a: f64, b: f64) -> Self {
        Uniform { a, b }
    }

    /// Get the lower bound, a
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Get the upper bound, b
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform::new_unchecked(0.0, 1.0)
    }
}

impl From<&Uniform> for String {
    fn from(u: &Uniform) -> String {
        format!("U({}, {})", u.a, u.b)
    }
}

impl_display!(Uniform);

impl HasDensity<f64> for Uniform {
    fn ln_f(&self, x: &f64) -> f64 {
        if self.a <= *x && *x <= self.b {
            -(self.b - self.a).ln()
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Sampleable<f64> for Uniform {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let u = rand_distr::Uniform::new(self.a, self.b);
        rng.sample(u)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let u = rand_distr::Uniform::new(self.a, self.b);
        (0..n).map(|_| rng.sample(u)).collect()
    }
}

impl Support<f64> for Uniform {
    fn supports(&self, x: &f64) -> bool {
        x.is_finite() && self.a <= *x && *x <= self.b
    }
}

impl ContinuousDistr<f64> for Uniform {}

impl Mean<f64> for Uniform {
    fn mean(&self) -> Option<f64> {
        Some((self.b + self.a) / 2.0)
    }
}

impl Variance<f64> for Uniform {
    fn variance(&self) -> Option<f64> {
        let diff = self.b - self.a;
        Some(diff * diff / 12.0)
    }
}

impl std::error::Error for UniformError {}

impl fmt::Display for UniformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b } => write!(
                f,
                "invalid interval: a ({}) must be less than b ({})",
                a, b
            ),
            Self::ANotFinite { a } => write!(f, "non-finite a: {}", a),
            Self::BNotFinite { b } => write!(f, "non-finite b: {}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_basic_impls, test_draws_supported};

    const TOL: f64 = 1E-12;

    test_basic_impls!(Uniform::default());
    test_draws_supported!(Uniform::new(-3.0, 7.5).unwrap());

    #[test]
    fn new_should_reject_empty_interval() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn ln_pdf_inside_and_outside() {
        let u = Uniform::new(0.0, 4.0).unwrap();
        assert::close(u.ln_pdf(&1.0), -(4.0_f64.ln()), TOL);
        assert_eq!(u.ln_pdf(&-1.0), f64::NEG_INFINITY);
    }

    #[test]
    fn draws_are_below_upper_bound() {
        let mut rng = rand::thread_rng();
        let u = Uniform::new(0.0, 3.0).unwrap();
        assert!(u.sample(1000, &mut rng).iter().all(|&x| x < 3.0));
    }

    #[test]
    fn mean_and_variance() {
        let u = Uniform::new(0.0, 6.0).unwrap();
        assert::close(u.mean().unwrap(), 3.0, TOL);
        assert::close(u.variance().unwrap(), 3.0, TOL);
    }
}
