use gmc::prelude::*;

/// Two regimes with different means, the change happening at `tau`
fn switchpoint_model(seed: u64, data: &[f64]) -> (Model, Vec<RandVar>) {
    let mut model = Model::new(seed);
    let zero = model.constant(0.0);
    let one = model.constant(1.0);
    let three = model.constant(3.0);
    let n = model.constant(data.len() as f64);

    let early = model.normal("early", zero, three).unwrap();
    let late = model.normal("late", zero, three).unwrap();
    let frac = model.beta("frac", one, one).unwrap();
    let tau = model.prod(&frac, n).unwrap();

    let mut ys = Vec::with_capacity(data.len());
    for (t, &y) in data.iter().enumerate() {
        let neg_time = model.constant(-(t as f64));
        // tau - t <= 0 means t is at or past the switch
        let lag = model.sum(tau, neg_time).unwrap();
        let mu = model.switch(0.0, lag, &late, &early).unwrap();
        let obs = model.normal(format!("y_{t}"), mu, one).unwrap();
        model.observe(&obs, y).unwrap();
        ys.push(obs);
    }
    (model, ys)
}

fn data() -> Vec<f64> {
    let mut data = vec![-2.0; 20];
    data.extend(vec![2.0; 20]);
    data
}

#[test]
fn partitions_after_observing() {
    let (model, ys) = switchpoint_model(0, &data());
    assert_eq!(model.stochastic_names(), vec!["early", "late", "frac"]);
    assert_eq!(model.n_observed(), ys.len());
    assert_eq!(model.observed_names()[0], "y_0");
}

#[test]
fn regimes_are_recovered() {
    let (mut model, _) = switchpoint_model(0xC0FFEE, &data());
    let mh = MetropolisHastings::default()
        .with_burn_in(10_000)
        .with_proposal_var(0.01);
    let trace = model.sample(10_000, &[0.0, 0.0, 0.5], &mh).unwrap();

    let early = trace.mean("early").unwrap();
    let late = trace.mean("late").unwrap();
    let frac = trace.mean("frac").unwrap();
    assert!((early + 2.0).abs() < 0.5, "early mean was {early}");
    assert!((late - 2.0).abs() < 0.5, "late mean was {late}");
    assert!((frac - 0.5).abs() < 0.1, "switch fraction was {frac}");
}

#[test]
fn logistic_and_logit_round_trip_through_the_graph() {
    let mut model = Model::new(5);
    let zero = model.constant(0.0);
    let one = model.constant(1.0);
    let x = model.normal("x", zero, one).unwrap();
    let p = model.logistic(&x).unwrap();
    let y = model.logit(p).unwrap();

    model.ln_f(&[0.0]);
    assert::close(model.value(p), 0.5, 1E-12);
    assert::close(model.value(y), 2.0_f64.ln(), 1E-12);
}

#[test]
#[should_panic(expected = "logit function is defined on [0, 1]")]
fn logit_outside_unit_interval_panics() {
    let mut model = Model::new(5);
    let zero = model.constant(0.0);
    let one = model.constant(1.0);
    let x = model.normal("x", zero, one).unwrap();
    let y = model.logit(&x).unwrap();
    model.ln_f(&[2.0]);
    model.value(y);
}
