//! Nodes of a graphical model
//!
//! Every node can report its current value. Random-variable nodes are also
//! named, can be assigned a value within their support, have a log density
//! at their current value, and can draw a fresh variate.
//!
//! Nodes refer to their inputs through [`Var`] handles and are evaluated
//! against the [`Graph`] that owns them, so the value of a node always
//! reflects the current values of its inputs.
mod random;
mod transform;

pub use random::{Family, RandomNode};
pub use transform::Transform;

use rand::Rng;
use std::fmt;

use crate::graph::Graph;
use crate::result::Result;

/// Handle to any node of a model
///
/// Random variables and static nodes live in separate arenas of the
/// [`Graph`]; the handle records which one and the position within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Var {
    /// A stochastic or observed random variable
    Random(usize),
    /// A constant or deterministic transform
    Static(usize),
}

/// Handle to a named random variable of a model
///
/// A `RandVar` can be used anywhere a [`Var`] is expected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RandVar {
    index: usize,
    name: String,
}

impl RandVar {
    pub(crate) fn new(index: usize, name: impl Into<String>) -> Self {
        RandVar {
            index,
            name: name.into(),
        }
    }

    /// The name of the variable, unique within its model
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn var(&self) -> Var {
        Var::Random(self.index)
    }
}

impl From<&RandVar> for Var {
    fn from(rv: &RandVar) -> Var {
        rv.var()
    }
}

impl From<RandVar> for Var {
    fn from(rv: RandVar) -> Var {
        rv.var()
    }
}

/// A value outside the support of a random variable
///
/// This is not a failure: a sampler may propose an infeasible point, in which
/// case the joint log probability is -∞.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    msg: String,
}

impl OutOfBounds {
    pub fn new(msg: impl Into<String>) -> Self {
        OutOfBounds { msg: msg.into() }
    }
}

impl std::error::Error for OutOfBounds {}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}

/// Something with a current numeric value
pub trait Value {
    /// The current value, computed from the current values of the inputs
    fn value(&self, graph: &Graph) -> f64;

    /// Nodes this node reads its value from
    fn parents(&self) -> Vec<Var>;
}

/// A named random variable
pub trait RandomVariable: Value {
    fn name(&self) -> &str;

    /// Assign a value, rejecting values outside the support
    ///
    /// The stored value is left untouched when the value is rejected.
    fn set_value(&mut self, x: f64) -> std::result::Result<(), OutOfBounds>;

    /// Log density of the current value given the current parameter values
    fn ln_f(&self, graph: &Graph) -> f64;

    /// Draw a new variate given the current parameter values
    fn draw<R: Rng>(&self, graph: &Graph, rng: &mut R) -> Result<f64>;
}
