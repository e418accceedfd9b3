//! Name-keyed samples
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

use crate::misc;

/// Samples of a set of variables, keyed by variable name
///
/// Every sampling procedure of a [`Model`](crate::Model) returns a `Trace`
/// whose sequences all have the same length. Names iterate in sorted order.
///
/// # Example
///
/// ```
/// use gmc::Trace;
///
/// let trace = Trace::from_rows(
///     &["a", "b"],
///     vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]],
/// );
///
/// assert_eq!(trace.get("a"), Some(&[1.0, 2.0, 3.0][..]));
/// assert_eq!(trace.len(), Some(3));
/// assert_eq!(trace.mean("b"), Some(20.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(transparent))]
pub struct Trace {
    samples: BTreeMap<String, Vec<f64>>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    /// A trace with an empty sequence for each name
    pub fn with_names<S: AsRef<str>>(names: &[S], capacity: usize) -> Self {
        let samples = names
            .iter()
            .map(|name| (name.as_ref().to_owned(), Vec::with_capacity(capacity)))
            .collect();
        Trace { samples }
    }

    /// Transpose a table of samples into a trace
    ///
    /// Column `j` of every row holds the samples of `names[j]`.
    ///
    /// # Panics
    ///
    /// Panics if a row does not have one value per name.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: Vec<Vec<f64>>) -> Self {
        let mut trace = Trace::with_names(names, rows.len());
        for row in rows {
            trace.push_row(names, &row);
        }
        trace
    }

    /// Append one value to the sequence of each name
    ///
    /// # Panics
    ///
    /// Panics if `row` does not have one value per name.
    pub fn push_row<S: AsRef<str>>(&mut self, names: &[S], row: &[f64]) {
        assert_eq!(
            names.len(),
            row.len(),
            "row has {} values for {} names",
            row.len(),
            names.len()
        );
        for (name, &x) in names.iter().zip(row) {
            self.samples
                .entry(name.as_ref().to_owned())
                .or_default()
                .push(x);
        }
    }

    /// Insert the samples of a variable, returning the samples it replaces
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        xs: Vec<f64>,
    ) -> Option<Vec<f64>> {
        self.samples.insert(name.into(), xs)
    }

    /// The samples of variable `name`
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.samples.get(name).map(|xs| xs.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.samples.contains_key(name)
    }

    /// Variable names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.samples.keys().map(|name| name.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<f64>> {
        self.samples.iter()
    }

    /// Number of variables
    pub fn n_vars(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The number of samples shared by every variable
    ///
    /// `None` if the trace has no variables or if the sequences do not all
    /// have the same length.
    pub fn len(&self) -> Option<usize> {
        let mut lens = self.samples.values().map(Vec::len);
        let first = lens.next()?;
        lens.all(|n| n == first).then_some(first)
    }

    /// Mean of the samples of variable `name`
    pub fn mean(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(misc::mean)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<f64>> {
        self.samples
    }
}

impl From<BTreeMap<String, Vec<f64>>> for Trace {
    fn from(samples: BTreeMap<String, Vec<f64>>) -> Self {
        Trace { samples }
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<f64>)> for Trace {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f64>)>>(iter: I) -> Self {
        Trace {
            samples: iter
                .into_iter()
                .map(|(name, xs)| (name.into(), xs))
                .collect(),
        }
    }
}

impl Index<&str> for Trace {
    type Output = [f64];

    /// # Panics
    ///
    /// Panics if the trace has no samples of `name`.
    fn index(&self, name: &str) -> &[f64] {
        match self.get(name) {
            Some(xs) => xs,
            None => panic!("no samples of {name} in trace"),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = (&'a String, &'a Vec<f64>);
    type IntoIter = btree_map::Iter<'a, String, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Trace {
    type Item = (String, Vec<f64>);
    type IntoIter = btree_map::IntoIter<String, Vec<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}
