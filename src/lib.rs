//! Directed probabilistic graphical models.
//!
//! A [`Model`] holds a graph of random variables, deterministic transforms,
//! and observed variables. Once declared, a model can
//!
//! - evaluate its joint log probability at a proposed point ([`Model::ln_f`]),
//! - draw synthetic observations from the prior
//!   ([`Model::sample_prior_predictive`]),
//! - draw from the posterior through any [`Sampler`](sampler::Sampler)
//!   ([`Model::sample`]),
//! - draw synthetic observations from a posterior trace
//!   ([`Model::sample_posterior_predictive`]).
//!
//! # Example
//!
//! Estimate the bias of a coin from 7 heads in 10 flips.
//!
//! ```
//! use gmc::Model;
//! use gmc::sampler::MetropolisHastings;
//!
//! let mut model = Model::new(1337);
//!
//! let one = model.constant(1.0);
//! let p = model.beta("p", one, one).unwrap();
//! let heads = model.binomial("heads", 10, &p).unwrap();
//! model.observe(&heads, 7.0).unwrap();
//!
//! let sampler = MetropolisHastings::default().with_burn_in(500);
//! let trace = model.sample(2_000, &[0.5], &sampler).unwrap();
//!
//! let p_mean = trace.mean("p").unwrap();
//! assert!(0.4 < p_mean && p_mean < 0.9);
//! ```
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]

pub mod consts;
pub mod dist;
pub mod graph;
pub mod misc;
mod model;
pub mod node;
pub mod prelude;
pub mod result;
pub mod sampler;
mod test;
pub mod trace;
pub mod traits;

pub use model::Model;
pub use trace::Trace;

#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
