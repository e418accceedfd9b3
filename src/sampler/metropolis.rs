#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use rand::Rng;
use std::fmt;
use tracing::{debug, trace, warn};

use super::{Sampler, Target};
use crate::dist::Gaussian;
use crate::traits::Sampleable;

/// Random-walk [Metropolis-Hastings](https://en.wikipedia.org/wiki/Metropolis%E2%80%93Hastings_algorithm)
/// sampler with an isotropic Gaussian proposal
///
/// Each step proposes `x + ε` with `ε ~ N(0, proposal_var · I)` and accepts
/// it with probability `min(1, f(x + ε) / f(x))`. The first `burn_in` steps
/// are discarded; afterwards one state is kept every `rate` steps.
///
/// A chain started at a point of zero density accepts the first proposal
/// with non-zero density. Until then every row repeats the starting point,
/// and a chain that never proposes a feasible point never moves.
///
/// # Example
///
/// ```
/// use gmc::sampler::{MetropolisHastings, Sampler, Target};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// // Standard normal in two dimensions
/// struct StdNormal;
///
/// impl Target for StdNormal {
///     fn ln_f(&mut self, x: &[f64]) -> f64 {
///         -0.5 * x.iter().map(|xi| xi * xi).sum::<f64>()
///     }
///
///     fn n_dims(&self) -> usize {
///         2
///     }
/// }
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
/// let mh = MetropolisHastings::default().with_proposal_var(1.0);
/// let rows = mh.sample(&mut StdNormal, &[0.0, 0.0], 500, &mut rng);
///
/// assert_eq!(rows.len(), 500);
/// assert!(rows.iter().all(|row| row.len() == 2));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct MetropolisHastings {
    /// Number of initial steps discarded
    burn_in: usize,
    /// Keep one state every `rate` steps
    rate: usize,
    /// Variance of the proposal in every dimension
    proposal_var: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum MetropolisHastingsError {
    /// The thinning rate is zero
    RateIsZero,
    /// The proposal variance is less than or equal to zero
    ProposalVarTooLow { proposal_var: f64 },
    /// The proposal variance is infinite or NaN
    ProposalVarNotFinite { proposal_var: f64 },
}

impl MetropolisHastings {
    /// Create a new sampler
    ///
    /// # Arguments
    /// - burn_in: number of initial steps to discard
    /// - rate: keep one state every `rate` steps
    /// - proposal_var: variance of the Gaussian random walk
    pub fn new(
        burn_in: usize,
        rate: usize,
        proposal_var: f64,
    ) -> Result<Self, MetropolisHastingsError> {
        if rate == 0 {
            Err(MetropolisHastingsError::RateIsZero)
        } else if proposal_var <= 0.0 {
            Err(MetropolisHastingsError::ProposalVarTooLow { proposal_var })
        } else if !proposal_var.is_finite() {
            Err(MetropolisHastingsError::ProposalVarNotFinite { proposal_var })
        } else {
            Ok(MetropolisHastings {
                burn_in,
                rate,
                proposal_var,
            })
        }
    }

    #[must_use]
    pub fn with_burn_in(mut self, burn_in: usize) -> Self {
        self.burn_in = burn_in;
        self
    }

    /// Set the thinning rate
    ///
    /// # Panics
    ///
    /// Panics if `rate` is zero.
    #[must_use]
    pub fn with_rate(mut self, rate: usize) -> Self {
        assert!(rate > 0, "rate must be greater than zero");
        self.rate = rate;
        self
    }

    /// Set the proposal variance
    ///
    /// # Panics
    ///
    /// Panics if `proposal_var` is not finite and positive.
    #[must_use]
    pub fn with_proposal_var(mut self, proposal_var: f64) -> Self {
        assert!(
            proposal_var > 0.0 && proposal_var.is_finite(),
            "proposal variance must be finite and positive, got {proposal_var}"
        );
        self.proposal_var = proposal_var;
        self
    }

    #[inline]
    pub fn burn_in(&self) -> usize {
        self.burn_in
    }

    #[inline]
    pub fn rate(&self) -> usize {
        self.rate
    }

    #[inline]
    pub fn proposal_var(&self) -> f64 {
        self.proposal_var
    }
}

impl Default for MetropolisHastings {
    fn default() -> Self {
        MetropolisHastings {
            burn_in: 1000,
            rate: 1,
            proposal_var: 0.05,
        }
    }
}

impl Sampler for MetropolisHastings {
    fn sample<T: Target, R: Rng>(
        &self,
        target: &mut T,
        initial: &[f64],
        n: usize,
        rng: &mut R,
    ) -> Vec<Vec<f64>> {
        debug_assert_eq!(initial.len(), target.n_dims());

        let step = Gaussian::new_unchecked(0.0, self.proposal_var.sqrt());
        let mut x = initial.to_vec();
        let mut ln_fx = target.ln_f(&x);
        if ln_fx == f64::NEG_INFINITY {
            warn!(?initial, "initial point has zero density");
        }

        let n_steps = self.burn_in + n * self.rate;
        let mut rows = Vec::with_capacity(n);
        let mut n_accepted: usize = 0;

        for i in 0..n_steps {
            let y: Vec<f64> =
                x.iter().map(|xi| xi + step.draw(rng)).collect();
            let ln_fy = target.ln_f(&y);
            let ln_u = rng.gen::<f64>().ln();
            if ln_u < ln_fy - ln_fx {
                x = y;
                ln_fx = ln_fy;
                n_accepted += 1;
            }
            trace!(step = i, ln_f = ln_fx, "metropolis step");

            if i >= self.burn_in && (i - self.burn_in + 1) % self.rate == 0 {
                rows.push(x.clone());
            }
        }

        // leave the target at the last accepted state
        target.ln_f(&x);

        debug!(
            n_steps,
            acceptance_rate = n_accepted as f64 / n_steps.max(1) as f64,
            "metropolis-hastings run complete"
        );
        rows
    }
}

impl std::error::Error for MetropolisHastingsError {}

impl fmt::Display for MetropolisHastingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateIsZero => write!(f, "rate was zero"),
            Self::ProposalVarTooLow { proposal_var } => write!(
                f,
                "proposal variance ({proposal_var}) must be greater than zero"
            ),
            Self::ProposalVarNotFinite { proposal_var } => {
                write!(f, "non-finite proposal variance: {proposal_var}")
            }
        }
    }
}
