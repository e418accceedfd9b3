use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;

use crate::dist::Uniform;
use crate::graph::Graph;
use crate::node::{
    Family, RandVar, RandomNode, RandomVariable, Transform, Value, Var,
};
use crate::result::{Error, ErrorKind, Result};
use crate::sampler::Sampler;
use crate::trace::Trace;
use crate::traits::Sampleable;

/// A directed graphical model and the random number generator used to sample
/// from it
///
/// Variables are declared through the factory methods. Every factory checks
/// that its inputs refer to nodes already declared in this model, so the
/// declaration order is a topological order of the graph. The check is by
/// position only: a handle from another model that happens to point at an
/// existing position is not detected.
///
/// # Example
///
/// ```
/// use gmc::Model;
///
/// let mut model = Model::new(7);
///
/// let zero = model.constant(0.0);
/// let one = model.constant(1.0);
/// let x = model.normal("x", zero, one).unwrap();
/// let y = model.normal("y", &x, one).unwrap();
/// model.observe(&y, 0.3).unwrap();
///
/// assert_eq!(model.stochastic_names(), vec!["x"]);
/// assert_eq!(model.observed_names(), vec!["y"]);
///
/// let ln_f = model.ln_f(&[0.1]);
/// assert!(ln_f.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct Model<R: Rng = Xoshiro256Plus> {
    graph: Graph,
    rng: R,
}

impl Model<Xoshiro256Plus> {
    /// Create an empty model whose random draws are determined by `seed`
    pub fn new(seed: u64) -> Self {
        Model::with_rng(Xoshiro256Plus::seed_from_u64(seed))
    }
}

impl<R: Rng> Model<R> {
    /// Create an empty model that draws from `rng`
    pub fn with_rng(rng: R) -> Self {
        Model {
            graph: Graph::new(),
            rng,
        }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    fn random(&mut self, name: String, family: Family) -> Result<RandVar> {
        for parent in family.parents() {
            self.graph.check(parent)?;
        }
        let node = RandomNode::new(name, family, &self.graph);
        let rv = self.graph.push_random(node)?;
        debug!(name = rv.name(), "declared random variable");
        Ok(rv)
    }

    fn transform(&mut self, transform: Transform) -> Result<Var> {
        for parent in transform.parents() {
            self.graph.check(parent)?;
        }
        Ok(self.graph.push_static(transform))
    }

    /// Declare a stochastic variable `name ~ Normal(mu, sigma)`
    ///
    /// The variable starts at the current value of `mu`.
    pub fn normal(
        &mut self,
        name: impl Into<String>,
        mu: impl Into<Var>,
        sigma: impl Into<Var>,
    ) -> Result<RandVar> {
        let family = Family::Normal {
            mu: mu.into(),
            sigma: sigma.into(),
        };
        self.random(name.into(), family)
    }

    /// Declare a stochastic variable `name ~ Beta(alpha, beta)`
    ///
    /// The variable starts at 0.5.
    pub fn beta(
        &mut self,
        name: impl Into<String>,
        alpha: impl Into<Var>,
        beta: impl Into<Var>,
    ) -> Result<RandVar> {
        let family = Family::Beta {
            alpha: alpha.into(),
            beta: beta.into(),
        };
        self.random(name.into(), family)
    }

    /// Declare a stochastic variable `name ~ Bernoulli(p)`
    ///
    /// The variable starts at 0.
    pub fn bernoulli(
        &mut self,
        name: impl Into<String>,
        p: impl Into<Var>,
    ) -> Result<RandVar> {
        self.random(name.into(), Family::Bernoulli { p: p.into() })
    }

    /// Declare a stochastic variable `name ~ Binomial(n, p)`
    ///
    /// The variable starts at `n * p`.
    pub fn binomial(
        &mut self,
        name: impl Into<String>,
        n: u64,
        p: impl Into<Var>,
    ) -> Result<RandVar> {
        if n == 0 {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                "the number of bernoulli trials must be > 0",
            ));
        }
        self.random(name.into(), Family::Binomial { n, p: p.into() })
    }

    /// Declare a constant
    pub fn constant(&mut self, x: f64) -> Var {
        self.graph.push_static(Transform::Constant(x))
    }

    /// Declare `x + y`
    pub fn sum(&mut self, x: impl Into<Var>, y: impl Into<Var>) -> Result<Var> {
        self.transform(Transform::Sum(x.into(), y.into()))
    }

    /// Declare `x * y`
    pub fn prod(&mut self, x: impl Into<Var>, y: impl Into<Var>) -> Result<Var> {
        self.transform(Transform::Product(x.into(), y.into()))
    }

    /// Declare `1 / (1 + exp(-x))`
    pub fn logistic(&mut self, x: impl Into<Var>) -> Result<Var> {
        self.transform(Transform::Logistic(x.into()))
    }

    /// Declare `log(1 / (1 - x))`
    ///
    /// Reading the node panics whenever the value of `x` is outside [0, 1].
    pub fn logit(&mut self, x: impl Into<Var>) -> Result<Var> {
        self.transform(Transform::Logit(x.into()))
    }

    /// Declare a node whose value is that of `left` while the value of
    /// `switch` is at most `threshold`, and that of `right` otherwise
    pub fn switch(
        &mut self,
        threshold: f64,
        switch: impl Into<Var>,
        left: impl Into<Var>,
        right: impl Into<Var>,
    ) -> Result<Var> {
        self.transform(Transform::Switch {
            threshold,
            switch: switch.into(),
            left: left.into(),
            right: right.into(),
        })
    }

    /// Returns `true` if a random variable is already named `name`
    pub fn is_taken(&self, name: &str) -> bool {
        self.graph.is_taken(name)
    }

    /// Fix the value of a stochastic variable
    ///
    /// The variable moves to the observed partition and is no longer
    /// proposed by samplers. Fails with [`ErrorKind::UnknownVariable`] if the
    /// variable is not stochastic, and with [`ErrorKind::OutOfBounds`] if
    /// `value` is outside its support, in which case it stays stochastic.
    pub fn observe(&mut self, rv: &RandVar, value: f64) -> Result<()> {
        self.graph.observe(rv.name(), value)
    }

    /// The current value of a node
    ///
    /// # Panics
    ///
    /// Panics if `var` was not created by this model.
    pub fn value(&self, var: impl Into<Var>) -> f64 {
        self.graph.value(var.into())
    }

    /// Joint log probability with the stochastic variables set to `proposed`
    ///
    /// See [`Graph::ln_f`].
    pub fn ln_f(&mut self, proposed: &[f64]) -> f64 {
        self.graph.ln_f(proposed)
    }

    #[inline]
    pub fn n_stochastic(&self) -> usize {
        self.graph.n_stochastic()
    }

    #[inline]
    pub fn n_observed(&self) -> usize {
        self.graph.n_observed()
    }

    #[inline]
    pub fn n_deterministic(&self) -> usize {
        self.graph.n_deterministic()
    }

    pub fn stochastic_names(&self) -> Vec<&str> {
        self.graph.stochastic_names()
    }

    pub fn observed_names(&self) -> Vec<&str> {
        self.graph.observed_names()
    }

    fn owned_names(names: Vec<&str>) -> Vec<String> {
        names.into_iter().map(String::from).collect()
    }

    /// Draw `n` synthetic data sets from the prior
    ///
    /// Each iteration draws every stochastic variable in declaration order,
    /// then draws one variate per observed variable. The returned trace is
    /// keyed by the observed names. Observed values are left untouched; the
    /// stochastic variables keep the values of the last iteration.
    pub fn sample_prior_predictive(&mut self, n: usize) -> Result<Trace> {
        let names = Self::owned_names(self.graph.observed_names());
        let mut trace = Trace::with_names(&names, n);
        for _ in 0..n {
            self.graph.draw_stochastic(&mut self.rng)?;
            let row = self.graph.draw_observed(&mut self.rng)?;
            trace.push_row(&names, &row);
        }
        debug!(n, n_observed = names.len(), "sampled prior predictive");
        Ok(trace)
    }

    /// Draw `n` points from the posterior of the stochastic variables
    ///
    /// `initial` holds one starting value per stochastic variable, in
    /// declaration order. The returned trace is keyed by the stochastic
    /// names.
    ///
    /// `initial` should lie in the support of every variable. From a point
    /// of zero density, [`MetropolisHastings`](crate::sampler::MetropolisHastings)
    /// repeats the starting point until it proposes a feasible one, and never
    /// moves if it cannot find one.
    pub fn sample<S: Sampler>(
        &mut self,
        n: usize,
        initial: &[f64],
        sampler: &S,
    ) -> Result<Trace> {
        let n_stochastic = self.graph.n_stochastic();
        if initial.len() != n_stochastic {
            return Err(Error::new(
                ErrorKind::LengthMismatch,
                format!(
                    "needed {} initial points, got {}",
                    n_stochastic,
                    initial.len()
                ),
            ));
        }
        let rows = sampler.sample(&mut self.graph, initial, n, &mut self.rng);
        debug!(n, n_stochastic, "sampled posterior");
        Ok(Trace::from_rows(&self.graph.stochastic_names(), rows))
    }

    /// Draw `n` synthetic data sets given posterior samples
    ///
    /// Each iteration picks one index of `trace` uniformly at random, assigns
    /// every stochastic variable its value at that index, and draws one
    /// variate per observed variable. The returned trace is keyed by the
    /// observed names.
    pub fn sample_posterior_predictive(
        &mut self,
        n: usize,
        trace: &Trace,
    ) -> Result<Trace> {
        let columns = self
            .graph
            .stochastic()
            .map(|rv| {
                trace.get(rv.name()).ok_or_else(|| {
                    Error::new(
                        ErrorKind::MissingVariable,
                        format!("the trace has no samples of {}", rv.name()),
                    )
                })
            })
            .collect::<Result<Vec<&[f64]>>>()?;

        let len = match columns.first() {
            Some(first) => first.len(),
            None => 0,
        };
        if columns.iter().any(|col| col.len() != len) {
            return Err(Error::new(
                ErrorKind::TraceLengthMismatch,
                "every variable of the trace must have the same number of \
                 samples",
            ));
        }
        if !columns.is_empty() && len == 0 {
            return Err(Error::new(
                ErrorKind::EmptyTrace,
                "the trace has no samples",
            ));
        }

        let names = Self::owned_names(self.graph.observed_names());
        let mut out = Trace::with_names(&names, n);
        let index = Uniform::new_unchecked(0.0, len as f64);
        let mut proposed = vec![0.0; columns.len()];
        for _ in 0..n {
            if !columns.is_empty() {
                let u: f64 = index.draw(&mut self.rng);
                let ix = (u.floor() as usize).min(len - 1);
                for (x, col) in proposed.iter_mut().zip(columns.iter()) {
                    *x = col[ix];
                }
                self.graph.assign(&proposed)?;
            }
            let row = self.graph.draw_observed(&mut self.rng)?;
            out.push_row(&names, &row);
        }
        debug!(n, n_samples = len, "sampled posterior predictive");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::MetropolisHastings;
    use proptest::prelude::*;

    const TOL: f64 = 1E-12;

    fn coin_model() -> (Model, RandVar, RandVar) {
        let mut model = Model::new(1337);
        let one = model.constant(1.0);
        let p = model.beta("p", one, one).unwrap();
        let heads = model.binomial("heads", 10, &p).unwrap();
        (model, p, heads)
    }

    #[test]
    fn coin_joint_ln_f() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();
        assert_eq!(model.n_stochastic(), 1);
        assert_eq!(model.n_observed(), 1);
        assert::close(model.ln_f(&[0.5]), (120.0_f64 / 1024.0).ln(), TOL);
        assert_eq!(model.ln_f(&[1.5]), f64::NEG_INFINITY);
    }

    #[test]
    fn observe_moves_counts_by_one() {
        let (mut model, _, heads) = coin_model();
        let (s, o) = (model.n_stochastic(), model.n_observed());
        model.observe(&heads, 3.0).unwrap();
        assert_eq!(model.n_stochastic(), s - 1);
        assert_eq!(model.n_observed(), o + 1);
        assert_eq!(model.value(&heads), 3.0);
    }

    #[test]
    fn observing_twice_is_an_error() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 3.0).unwrap();
        let err = model.observe(&heads, 4.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariable);
        assert_eq!(model.value(&heads), 3.0);
    }

    #[test]
    fn observing_out_of_support_keeps_variable_stochastic() {
        let (mut model, p, _) = coin_model();
        let err = model.observe(&p, 1.5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(model.stochastic_names(), vec!["p", "heads"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 3.0).unwrap();
        let half = model.constant(0.5);
        let err = model.bernoulli("heads", half).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
        assert!(model.is_taken("heads"));
        assert_eq!(model.n_stochastic(), 1);
    }

    #[test]
    fn binomial_needs_trials() {
        let mut model = Model::new(0);
        let half = model.constant(0.5);
        let err = model.binomial("k", 0, half).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(!model.is_taken("k"));
    }

    #[test]
    fn undeclared_nodes_are_rejected() {
        let mut other = Model::new(0);
        let _ = other.constant(1.0);
        let foreign = other.constant(2.0);

        let mut model = Model::new(0);
        let err = model.normal("x", foreign, foreign).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownNode);
        let err = model.logistic(foreign).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownNode);
        assert_eq!(model.n_stochastic(), 0);
        assert_eq!(model.n_deterministic(), 0);
    }

    #[test]
    fn transforms_follow_their_inputs() {
        let mut model = Model::new(0);
        let zero = model.constant(0.0);
        let one = model.constant(1.0);
        let x = model.normal("x", zero, one).unwrap();
        let two = model.constant(2.0);
        let shifted = model.sum(&x, two).unwrap();
        let scaled = model.prod(shifted, two).unwrap();
        let squashed = model.logistic(&x).unwrap();
        let picked = model.switch(0.0, &x, one, two).unwrap();

        model.ln_f(&[0.0]);
        assert::close(model.value(scaled), 4.0, TOL);
        assert::close(model.value(squashed), 0.5, TOL);
        assert_eq!(model.value(picked), 1.0);

        model.ln_f(&[1.0]);
        assert::close(model.value(scaled), 6.0, TOL);
        assert_eq!(model.value(picked), 2.0);
    }

    #[test]
    fn sample_checks_initial_length() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();
        let err = model
            .sample(10, &[0.5, 0.5], &MetropolisHastings::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    }

    #[test]
    fn sample_is_keyed_by_stochastic_names() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();
        let mh = MetropolisHastings::default().with_burn_in(100);
        let trace = model.sample(300, &[0.5], &mh).unwrap();
        assert_eq!(trace.names().collect::<Vec<_>>(), vec!["p"]);
        assert_eq!(trace.len(), Some(300));
        assert!(trace["p"].iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn prior_predictive_is_reproducible() {
        let build = || {
            let (mut model, _, heads) = coin_model();
            model.observe(&heads, 7.0).unwrap();
            model
        };
        let a = build().sample_prior_predictive(200).unwrap();
        let b = build().sample_prior_predictive(200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prior_predictive_keeps_observed_values() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();
        let trace = model.sample_prior_predictive(50).unwrap();
        assert_eq!(trace.len(), Some(50));
        assert_eq!(model.value(&heads), 7.0);
        assert!(trace["heads"]
            .iter()
            .all(|k| k.fract() == 0.0 && (0.0..=10.0).contains(k)));
    }

    #[test]
    fn bernoulli_prior_predictive() {
        let mut model = Model::new(42);
        let p = model.constant(0.3);
        let coin = model.bernoulli("coin", p).unwrap();
        model.observe(&coin, 1.0).unwrap();

        let trace = model.sample_prior_predictive(1_000).unwrap();
        assert_eq!(trace.n_vars(), 1);
        assert_eq!(trace.len(), Some(1_000));
        assert!(trace["coin"].iter().all(|&x| x == 0.0 || x == 1.0));
    }

    #[test]
    fn prior_predictive_without_observations_is_empty() {
        let (mut model, _, _) = coin_model();
        let trace = model.sample_prior_predictive(10).unwrap();
        assert!(trace.is_empty());
    }

    #[test]
    fn posterior_predictive_uses_trace_values() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();

        // p = 1 always gives 10 heads
        let mut posterior = Trace::new();
        posterior.insert("p", vec![1.0; 20]);
        let trace = model.sample_posterior_predictive(100, &posterior).unwrap();
        assert_eq!(trace.len(), Some(100));
        assert!(trace["heads"].iter().all(|&k| k == 10.0));
    }

    #[test]
    fn posterior_predictive_of_single_sample() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();

        let mut posterior = Trace::new();
        posterior.insert("p", vec![0.0]);
        let trace = model.sample_posterior_predictive(30, &posterior).unwrap();
        assert!(trace["heads"].iter().all(|&k| k == 0.0));
    }

    #[test]
    fn posterior_predictive_rejects_bad_traces() {
        let mut model = Model::new(3);
        let one = model.constant(1.0);
        let a = model.beta("a", one, one).unwrap();
        let _b = model.beta("b", one, one).unwrap();
        let y = model.bernoulli("y", &a).unwrap();
        model.observe(&y, 1.0).unwrap();

        let missing: Trace = vec![("a", vec![0.5])].into_iter().collect();
        let err = model.sample_posterior_predictive(5, &missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingVariable);

        let ragged: Trace = vec![("a", vec![0.5, 0.6]), ("b", vec![0.5])]
            .into_iter()
            .collect();
        let err = model.sample_posterior_predictive(5, &ragged).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TraceLengthMismatch);

        let empty: Trace =
            vec![("a", vec![]), ("b", vec![])].into_iter().collect();
        let err = model.sample_posterior_predictive(5, &empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyTrace);
    }

    #[test]
    #[should_panic(expected = "needed 1 value proposals, got 2")]
    fn ln_f_with_wrong_length_panics() {
        let (mut model, _, heads) = coin_model();
        model.observe(&heads, 7.0).unwrap();
        model.ln_f(&[0.5, 0.5]);
    }

    proptest! {
        #[test]
        fn ln_f_is_finite_exactly_on_support(p in -2.0_f64..3.0) {
            let (mut model, _, heads) = coin_model();
            model.observe(&heads, 7.0).unwrap();
            let ln_f = model.ln_f(&[p]);
            if (0.0..=1.0).contains(&p) && p != 0.0 && p != 1.0 {
                prop_assert!(ln_f.is_finite());
            } else if !(0.0..=1.0).contains(&p) {
                prop_assert_eq!(ln_f, f64::NEG_INFINITY);
            }
        }
    }
}
