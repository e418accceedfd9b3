use num_traits::Float;
use special::Gamma;

/// Natural logarithm of binomial coefficent, ln nCk
///
/// Defined for real `n` and `k` through the log gamma function.
///
/// # Example
///
/// ```rust
/// use gmc::misc::ln_binom;
///
/// assert!((ln_binom(4.0, 2.0) - 6.0_f64.ln()).abs() < 1E-12);
/// ```
pub fn ln_binom(n: f64, k: f64) -> f64 {
    (n + 1.0).ln_gamma().0 - (k + 1.0).ln_gamma().0 - (n - k + 1.0).ln_gamma().0
}

/// The logistic function, 1 / (1 + exp(-x))
///
/// Branches on the sign of `x` so that `exp` never overflows.
///
/// # Example
///
/// ```rust
/// use gmc::misc::logistic;
///
/// assert_eq!(logistic(0.0_f64), 0.5);
/// assert_eq!(logistic(-1000.0_f64), 0.0);
/// assert_eq!(logistic(1000.0_f64), 1.0);
/// ```
pub fn logistic<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let z = x.exp();
        z / (T::one() + z)
    }
}

/// Arithmetic mean of `xs`, `None` if `xs` is empty
///
/// # Example
///
/// ```rust
/// # use gmc::misc::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}
