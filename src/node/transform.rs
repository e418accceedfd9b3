use super::{Value, Var};
use crate::graph::Graph;
use crate::misc::logistic;

/// A constant or a deterministic function of other nodes
///
/// Values are recomputed on every read and never cached: the inputs may be
/// random variables whose values change between reads.
#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    Constant(f64),
    /// x + y
    Sum(Var, Var),
    /// x * y
    Product(Var, Var),
    /// The [logistic function](https://en.wikipedia.org/wiki/Logistic_function),
    /// 1 / (1 + exp(-x))
    Logistic(Var),
    /// log(1 / (1 - x)), defined for x in [0, 1]
    ///
    /// Reading the value panics if x is outside [0, 1].
    Logit(Var),
    /// The value of `left` when the value of `switch` is at most
    /// `threshold`, otherwise the value of `right`
    Switch {
        threshold: f64,
        switch: Var,
        left: Var,
        right: Var,
    },
}

impl Value for Transform {
    fn value(&self, graph: &Graph) -> f64 {
        match self {
            Transform::Constant(x) => *x,
            Transform::Sum(x, y) => graph.value(*x) + graph.value(*y),
            Transform::Product(x, y) => graph.value(*x) * graph.value(*y),
            Transform::Logistic(x) => logistic(graph.value(*x)),
            Transform::Logit(x) => {
                let v = graph.value(*x);
                assert!(
                    (0.0..=1.0).contains(&v),
                    "logit function is defined on [0, 1], got {v}"
                );
                (1.0 / (1.0 - v)).ln()
            }
            Transform::Switch {
                threshold,
                switch,
                left,
                right,
            } => {
                if graph.value(*switch) <= *threshold {
                    graph.value(*left)
                } else {
                    graph.value(*right)
                }
            }
        }
    }

    fn parents(&self) -> Vec<Var> {
        match self {
            Transform::Constant(_) => Vec::new(),
            Transform::Sum(x, y) | Transform::Product(x, y) => vec![*x, *y],
            Transform::Logistic(x) | Transform::Logit(x) => vec![*x],
            Transform::Switch {
                switch,
                left,
                right,
                ..
            } => vec![*switch, *left, *right],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    fn graph_with(xs: &[f64]) -> (Graph, Vec<Var>) {
        let mut graph = Graph::new();
        let vars = xs
            .iter()
            .map(|&x| graph.push_static(Transform::Constant(x)))
            .collect();
        (graph, vars)
    }

    #[test]
    fn sum_and_product() {
        let (graph, vars) = graph_with(&[2.0, 3.5]);
        let sum = Transform::Sum(vars[0], vars[1]);
        let prod = Transform::Product(vars[0], vars[1]);
        assert::close(sum.value(&graph), 5.5, TOL);
        assert::close(prod.value(&graph), 7.0, TOL);
    }

    #[test]
    fn logistic_of_zero_is_one_half() {
        let (graph, vars) = graph_with(&[0.0]);
        assert::close(Transform::Logistic(vars[0]).value(&graph), 0.5, TOL);
    }

    #[test]
    fn logistic_of_large_magnitude_is_finite() {
        let (graph, vars) = graph_with(&[-1000.0, 1000.0]);
        assert_eq!(Transform::Logistic(vars[0]).value(&graph), 0.0);
        assert_eq!(Transform::Logistic(vars[1]).value(&graph), 1.0);
    }

    #[test]
    fn logit_inside_domain() {
        let (graph, vars) = graph_with(&[0.0, 0.5]);
        assert::close(Transform::Logit(vars[0]).value(&graph), 0.0, TOL);
        assert::close(
            Transform::Logit(vars[1]).value(&graph),
            2.0_f64.ln(),
            TOL,
        );
    }

    #[test]
    #[should_panic(expected = "logit function is defined on [0, 1]")]
    fn logit_outside_domain_panics() {
        let (graph, vars) = graph_with(&[1.5]);
        let _ = Transform::Logit(vars[0]).value(&graph);
    }

    #[test]
    fn switch_picks_left_at_threshold() {
        let (graph, vars) = graph_with(&[1.0, 10.0, 20.0, 1.1]);
        let at = Transform::Switch {
            threshold: 1.0,
            switch: vars[0],
            left: vars[1],
            right: vars[2],
        };
        let above = Transform::Switch {
            threshold: 1.0,
            switch: vars[3],
            left: vars[1],
            right: vars[2],
        };
        assert_eq!(at.value(&graph), 10.0);
        assert_eq!(above.value(&graph), 20.0);
    }

    #[test]
    fn parents() {
        let (_, vars) = graph_with(&[1.0, 2.0, 3.0]);
        assert!(Transform::Constant(1.0).parents().is_empty());
        assert_eq!(Transform::Sum(vars[0], vars[1]).parents().len(), 2);
        let switch = Transform::Switch {
            threshold: 0.0,
            switch: vars[0],
            left: vars[1],
            right: vars[2],
        };
        assert_eq!(switch.parents(), vars);
    }
}
