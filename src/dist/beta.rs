//! Beta distribution over x in [0, 1]
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use special::Beta as _;
use std::fmt;

use crate::impl_display;
use crate::traits::{
    ContinuousDistr, HasDensity, Mean, Sampleable, Support, Variance,
};

/// [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution),
/// Beta(α, β) over x in [0, 1].
///
/// # Example
///
/// ```
/// use gmc::dist::Beta;
/// use gmc::traits::{ContinuousDistr, Mean};
///
/// let beta = Beta::new(2.0, 2.0).unwrap();
///
/// assert_eq!(beta.mean(), Some(0.5));
/// assert!((beta.pdf(&0.5) - 1.5).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum BetaError {
    /// The alpha parameter is less than or equal too zero
    AlphaTooLow { alpha: f64 },
    /// The alpha parameter is infinite or NaN
    AlphaNotFinite { alpha: f64 },
    /// The beta parameter is less than or equal to zero
    BetaTooLow { beta: f64 },
    /// The beta parameter is infinite or NaN
    BetaNotFinite { beta: f64 },
}

impl Beta {
    /// Create a `Beta` distribution with shape parameters `alpha` and `beta`
    pub fn new(alpha: f64, beta: f64) -> Result<Self, BetaError> {
        if alpha <= 0.0 {
            Err(BetaError::AlphaTooLow { alpha })
        } else if !alpha.is_finite() {
            Err(BetaError::AlphaNotFinite { alpha })
        } else if beta <= 0.0 {
            Err(BetaError::BetaTooLow { beta })
        } else if !beta.is_finite() {
            Err(BetaError::BetaNotFinite { beta })
        } else {
            Ok(Beta { alpha, beta })
        }
    }

    /// Creates a new Beta without checking whether the parameters are valid.
    #[inline]
    pub fn new_unchecked(alpha: f64, beta: f64) -> Self {
        Beta { alpha, beta }
    }

    /// Create a `Beta` distribution with the uniform parameterization,
    /// Beta(1, 1).
    #[inline]
    pub fn uniform() -> Self {
        Beta::new_unchecked(1.0, 1.0)
    }

    /// Create a `Beta` distribution with the Jeffrey's parameterization,
    /// Beta(0.5, 0.5).
    #[inline]
    pub fn jeffreys() -> Self {
        Beta::new_unchecked(0.5, 0.5)
    }

    /// Get the alpha parameter
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the beta parameter
    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for Beta {
    fn default() -> Self {
        Beta::jeffreys()
    }
}

impl From<&Beta> for String {
    fn from(beta: &Beta) -> String {
        format!("Beta(α: {}, β: {})", beta.alpha, beta.beta)
    }
}

impl_display!(Beta);

impl HasDensity<f64> for Beta {
    fn ln_f(&self, x: &f64) -> f64 {
        // A unit shape parameter contributes nothing, even at the bounds
        // where ln(x) is -∞.
        let a_term = if self.alpha == 1.0 {
            0.0
        } else {
            (self.alpha - 1.0) * x.ln()
        };
        let b_term = if self.beta == 1.0 {
            0.0
        } else {
            (self.beta - 1.0) * (1.0 - x).ln()
        };
        a_term + b_term - self.alpha.ln_beta(self.beta)
    }
}

impl Sampleable<f64> for Beta {
    fn draw<R: Rng>(&self, rng: &mut R) -> f64 {
        let b = rand_distr::Beta::new(self.alpha, self.beta).unwrap();
        rng.sample(b)
    }

    fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let b = rand_distr::Beta::new(self.alpha, self.beta).unwrap();
        (0..n).map(|_| rng.sample(b)).collect()
    }
}

impl Support<f64> for Beta {
    fn supports(&self, x: &f64) -> bool {
        (0.0..=1.0).contains(x)
    }
}

impl ContinuousDistr<f64> for Beta {}

impl Mean<f64> for Beta {
    fn mean(&self) -> Option<f64> {
        Some(self.alpha / (self.alpha + self.beta))
    }
}

impl Variance<f64> for Beta {
    fn variance(&self) -> Option<f64> {
        let apb = self.alpha + self.beta;
        Some(self.alpha * self.beta / (apb * apb * (apb + 1.0)))
    }
}

impl std::error::Error for BetaError {}

impl fmt::Display for BetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphaTooLow { alpha } => {
                write!(f, "alpha ({}) must be greater than zero", alpha)
            }
            Self::AlphaNotFinite { alpha } => {
                write!(f, "alpha ({}) was non finite", alpha)
            }
            Self::BetaTooLow { beta } => {
                write!(f, "beta ({}) must be greater than zero", beta)
            }
            Self::BetaNotFinite { beta } => {
                write!(f, "beta ({}) was non finite", beta)
            }
        }
    }
}
