//! Value and error types shared across the library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{CgError, CgResult};

/// Tolerance used when comparing floating-point conversion factors.
pub const FACTOR_EPSILON: f64 = 1e-9;

/// Inverter for multiplicative conversion factors.
///
/// Pass to [`crate::graph::create_dg`] so that an edge `a -> b` of factor `f`
/// gets a reverse edge `b -> a` of factor `1 / f`.
pub fn reciprocal(value: &f64) -> f64 {
    1.0 / value
}

/// Whether two factors are equal within [`FACTOR_EPSILON`].
pub fn nearly_equal(left: f64, right: f64) -> bool {
    left == right || (left - right).abs() <= FACTOR_EPSILON
}
