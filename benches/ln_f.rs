use criterion::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use gmc::prelude::*;
use rand::Rng;

fn coin_model(n_flips: u64) -> Model {
    let mut model = Model::new(0xFEED);
    let one = model.constant(1.0);
    let p = model.beta("p", one, one).unwrap();
    let heads = model.binomial("heads", n_flips, &p).unwrap();
    model.observe(&heads, (n_flips / 2) as f64).unwrap();
    model
}

fn regression_model(n_obs: usize) -> Model {
    let mut model = Model::new(0xFEED);
    let zero = model.constant(0.0);
    let one = model.constant(1.0);
    let slope = model.normal("slope", zero, one).unwrap();
    let intercept = model.normal("intercept", zero, one).unwrap();
    for i in 0..n_obs {
        let x = model.constant(i as f64 / n_obs as f64);
        let mx = model.prod(&slope, x).unwrap();
        let mu = model.sum(mx, &intercept).unwrap();
        let y = model.normal(format!("y_{i}"), mu, one).unwrap();
        model.observe(&y, 0.5 * i as f64 / n_obs as f64).unwrap();
    }
    model
}

fn bench_coin_ln_f(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin ln_f");
    let mut model = coin_model(100);
    let mut rng = rand::thread_rng();

    group.bench_function("in support", |b| {
        b.iter_batched(
            || vec![rng.gen::<f64>()],
            |x| black_box(model.ln_f(&x)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("out of support", |b| {
        b.iter(|| black_box(model.ln_f(black_box(&[1.5]))));
    });
    group.finish();
}

fn bench_regression_ln_f(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression ln_f");
    for n_obs in [10, 100, 1_000] {
        let mut model = regression_model(n_obs);
        group.bench_function(format!("{n_obs} observations"), |b| {
            b.iter(|| black_box(model.ln_f(black_box(&[0.4, 0.1]))));
        });
    }
    group.finish();
}

fn bench_metropolis(c: &mut Criterion) {
    let mut model = coin_model(100);
    let mh = MetropolisHastings::default().with_burn_in(0);
    c.bench_function("metropolis 1000 steps", |b| {
        b.iter(|| black_box(model.sample(1_000, &[0.5], &mh).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_coin_ln_f,
    bench_regression_ln_f,
    bench_metropolis
);
criterion_main!(benches);
