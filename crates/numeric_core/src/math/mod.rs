//! Numerical methods.
//!
//! - `differentiation`: Finite-difference derivatives of functions and of sampled data
//! - `solvers`: Root finders (bisection, binary search, Newton-Raphson, Brent)

pub mod differentiation;
pub mod solvers;
