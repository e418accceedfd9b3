//! The node registry of a model
//!
//! A [`Graph`] owns every node of a model and partitions the random
//! variables into stochastic variables (free, proposed by samplers) and
//! observed variables (fixed). Constants and transforms form the static
//! partition.
//!
//! Nodes can only refer to nodes declared before them, so declaration order
//! is a topological order of the graph. Both partitions of random variables
//! preserve declaration order.
use rand::Rng;
use tracing::debug;

use crate::node::{
    OutOfBounds, RandVar, RandomNode, RandomVariable, Transform, Value, Var,
};
use crate::result::{Error, ErrorKind, Result};
use crate::sampler::Target;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// Random variables in declaration order
    randoms: Vec<RandomNode>,
    /// Constants and transforms in declaration order
    statics: Vec<Transform>,
    /// Indices into `randoms` of the free variables
    stochastic: Vec<usize>,
    /// Indices into `randoms` of the fixed variables
    observed: Vec<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// The current value of a node
    ///
    /// # Panics
    ///
    /// Panics if `var` was not created by this graph.
    pub fn value(&self, var: Var) -> f64 {
        match var {
            Var::Random(ix) => self.randoms[ix].value(self),
            Var::Static(ix) => self.statics[ix].value(self),
        }
    }

    /// Returns `true` if `var` points at a declared node of this graph
    ///
    /// Handles carry only a position, so a handle from another graph is
    /// accepted whenever that position is declared here.
    pub fn contains(&self, var: Var) -> bool {
        match var {
            Var::Random(ix) => ix < self.randoms.len(),
            Var::Static(ix) => ix < self.statics.len(),
        }
    }

    pub(crate) fn check(&self, var: Var) -> Result<Var> {
        if self.contains(var) {
            Ok(var)
        } else {
            Err(Error::new(
                ErrorKind::UnknownNode,
                format!("{:?} does not belong to this model", var),
            ))
        }
    }

    /// Returns `true` if a random variable is already named `name`
    pub fn is_taken(&self, name: &str) -> bool {
        self.stochastic()
            .chain(self.observed())
            .any(|rv| rv.name() == name)
    }

    /// Get the random variable a handle refers to
    pub fn random(&self, rv: &RandVar) -> Option<&RandomNode> {
        match rv.var() {
            Var::Random(ix) => self.randoms.get(ix),
            Var::Static(_) => None,
        }
    }

    pub(crate) fn push_static(&mut self, transform: Transform) -> Var {
        self.statics.push(transform);
        Var::Static(self.statics.len() - 1)
    }

    /// Add a new stochastic variable
    pub(crate) fn push_random(&mut self, node: RandomNode) -> Result<RandVar> {
        if self.is_taken(node.name()) {
            return Err(Error::new(
                ErrorKind::DuplicateName,
                format!("variable name is already taken: {}", node.name()),
            ));
        }
        let ix = self.randoms.len();
        let rv = RandVar::new(ix, node.name());
        self.randoms.push(node);
        self.stochastic.push(ix);
        Ok(rv)
    }

    /// Stochastic variables in declaration order
    pub fn stochastic(&self) -> impl Iterator<Item = &RandomNode> + '_ {
        self.stochastic.iter().map(move |&ix| &self.randoms[ix])
    }

    /// Observed variables in the order they were observed
    pub fn observed(&self) -> impl Iterator<Item = &RandomNode> + '_ {
        self.observed.iter().map(move |&ix| &self.randoms[ix])
    }

    /// Constants and transforms in declaration order
    pub fn deterministic(&self) -> impl Iterator<Item = &Transform> + '_ {
        self.statics.iter()
    }

    #[inline]
    pub fn n_stochastic(&self) -> usize {
        self.stochastic.len()
    }

    #[inline]
    pub fn n_observed(&self) -> usize {
        self.observed.len()
    }

    #[inline]
    pub fn n_deterministic(&self) -> usize {
        self.statics.len()
    }

    pub fn stochastic_names(&self) -> Vec<&str> {
        self.stochastic().map(|rv| rv.name()).collect()
    }

    pub fn observed_names(&self) -> Vec<&str> {
        self.observed().map(|rv| rv.name()).collect()
    }

    /// Fix the value of a stochastic variable and move it to the observed
    /// partition
    ///
    /// A value outside the support is rejected and the variable stays
    /// stochastic.
    pub(crate) fn observe(&mut self, name: &str, x: f64) -> Result<()> {
        let pos = self
            .stochastic
            .iter()
            .position(|&ix| self.randoms[ix].name() == name)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::UnknownVariable,
                    format!("the variable does not exist: {}", name),
                )
            })?;

        let ix = self.stochastic[pos];
        self.randoms[ix].set_value(x)?;
        self.stochastic.remove(pos);
        self.observed.push(ix);
        debug!(name, value = x, "observed variable");
        Ok(())
    }

    /// Assign each stochastic variable, in order, its proposed value
    ///
    /// Stops at the first value outside its variable's support. Variables
    /// before it keep their new values.
    pub(crate) fn assign(
        &mut self,
        proposed: &[f64],
    ) -> std::result::Result<(), OutOfBounds> {
        for (&ix, &x) in self.stochastic.iter().zip(proposed) {
            self.randoms[ix].set_value(x)?;
        }
        Ok(())
    }

    /// Draw every stochastic variable from its distribution, in
    /// declaration order
    ///
    /// Each draw sees the values drawn before it.
    pub(crate) fn draw_stochastic<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for pos in 0..self.stochastic.len() {
            let ix = self.stochastic[pos];
            let x = self.randoms[ix].draw(self, rng)?;
            self.randoms[ix].set_value_unchecked(x);
        }
        Ok(())
    }

    /// Draw a fresh variate from every observed variable without changing
    /// their values
    pub(crate) fn draw_observed<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        self.observed().map(|rv| rv.draw(self, rng)).collect()
    }

    /// Joint log probability at `proposed`
    ///
    /// Assigns `proposed[i]` to the i-th stochastic variable, then sums the
    /// log densities of all stochastic and observed variables. Returns -∞ as
    /// soon as a proposed value is outside its variable's support.
    ///
    /// A call is the unit of consistency: node values are mutated in place,
    /// and are only meaningful once the call returns.
    ///
    /// # Panics
    ///
    /// Panics if `proposed` does not have one entry per stochastic variable.
    pub fn ln_f(&mut self, proposed: &[f64]) -> f64 {
        assert_eq!(
            proposed.len(),
            self.stochastic.len(),
            "needed {} value proposals, got {}",
            self.stochastic.len(),
            proposed.len()
        );

        if self.assign(proposed).is_err() {
            return f64::NEG_INFINITY;
        }

        let graph: &Graph = self;
        graph
            .stochastic()
            .chain(graph.observed())
            .map(|rv| rv.ln_f(graph))
            .sum()
    }
}

impl Target for Graph {
    fn ln_f(&mut self, x: &[f64]) -> f64 {
        Graph::ln_f(self, x)
    }

    fn n_dims(&self) -> usize {
        self.n_stochastic()
    }
}
