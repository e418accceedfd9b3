//! Numerical helpers shared by distributions and transforms
mod func;

pub use func::*;
