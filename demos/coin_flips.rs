//! Infer the bias of a coin from a run of flips
//!
//! Run with `cargo run --example coin_flips`.
use gmc::prelude::*;

fn main() -> Result<(), Error> {
    let flips = [1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

    let mut model = Model::new(1337);
    let one = model.constant(1.0);
    let p = model.beta("p", one, one)?;
    for (i, &flip) in flips.iter().enumerate() {
        let coin = model.bernoulli(format!("flip_{i}"), &p)?;
        model.observe(&coin, flip)?;
    }

    let prior = model.sample_prior_predictive(1_000)?;
    println!(
        "prior predictive P(heads) on the first flip: {:.3}",
        prior.mean("flip_0").unwrap_or(f64::NAN)
    );

    let sampler = MetropolisHastings::default().with_proposal_var(0.02);
    let posterior = model.sample(10_000, &[0.5], &sampler)?;
    println!(
        "posterior mean of p: {:.3}",
        posterior.mean("p").unwrap_or(f64::NAN)
    );

    let predictive = model.sample_posterior_predictive(1_000, &posterior)?;
    let n_heads: f64 = flips.iter().sum();
    let replicated: Vec<f64> = (0..1_000)
        .map(|i| predictive.iter().map(|(_, xs)| xs[i]).sum())
        .collect();
    let extreme = replicated.iter().filter(|&&k| k >= n_heads).count();
    println!(
        "posterior predictive P(heads >= {n_heads}): {:.3}",
        extreme as f64 / replicated.len() as f64
    );

    Ok(())
}
