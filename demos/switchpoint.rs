//! Find when the mean of a noisy series changes
//!
//! The switch time is a fraction of the series length; each observation
//! reads its mean from the early or the late regime depending on which side
//! of the switch it falls.
//!
//! Run with `cargo run --example switchpoint`.
use gmc::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

fn synthetic_series(n: usize, switch_at: usize) -> Vec<f64> {
    let mut rng = Xoshiro256Plus::seed_from_u64(7);
    let early = Gaussian::new_unchecked(1.0, 0.5);
    let late = Gaussian::new_unchecked(3.0, 0.5);
    (0..n)
        .map(|t| {
            if t < switch_at {
                early.draw(&mut rng)
            } else {
                late.draw(&mut rng)
            }
        })
        .collect()
}

fn main() -> Result<(), Error> {
    let data = synthetic_series(60, 35);

    let mut model = Model::new(0xC0FFEE);
    let zero = model.constant(0.0);
    let one = model.constant(1.0);
    let five = model.constant(5.0);
    let n = model.constant(data.len() as f64);

    let early = model.normal("early", zero, five)?;
    let late = model.normal("late", zero, five)?;
    // the noise scale is a logistic squash of an unbounded variable
    let log_sigma = model.normal("log_sigma", zero, one)?;
    let sigma = model.logistic(&log_sigma)?;
    let frac = model.beta("frac", one, one)?;
    let tau = model.prod(&frac, n)?;

    for (t, &y) in data.iter().enumerate() {
        let neg_t = model.constant(-(t as f64));
        let lag = model.sum(tau, neg_t)?;
        let mu = model.switch(0.0, lag, &late, &early)?;
        let obs = model.normal(format!("y_{t}"), mu, sigma)?;
        model.observe(&obs, y)?;
    }

    let sampler = MetropolisHastings::default()
        .with_burn_in(20_000)
        .with_rate(2)
        .with_proposal_var(0.005);
    let trace = model.sample(10_000, &[0.0, 0.0, 0.0, 0.5], &sampler)?;

    for name in model.stochastic_names() {
        println!("{name}: {:.3}", trace.mean(name).unwrap_or(f64::NAN));
    }
    if let Some(frac) = trace.mean("frac") {
        println!("estimated switch: t = {:.1}", frac * data.len() as f64);
    }
    Ok(())
}
