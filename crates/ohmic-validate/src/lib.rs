//! Tolerance-based comparison of solver outputs.
//!
//! The solver's numeric outputs are only meaningful against a
//! documented tolerance contract. A submitted value is accepted when it
//! is within an absolute tolerance of the expected value, or within a
//! relative tolerance of it, whichever admits it first.

use serde::{Deserialize, Serialize};

/// Comparison tolerances for voltages and currents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Absolute tolerance.
    pub abs: f64,
    /// Relative tolerance (fraction of the expected value).
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 0.01,
            rel: 0.01,
        }
    }
}

/// Check whether `got` matches `expected` within the tolerances.
///
/// Accepts iff `|got − expected| ≤ abs` or
/// `|got − expected| / max(ε, |expected|) ≤ rel`, with ε =
/// `f64::EPSILON` guarding the division for near-zero expectations.
pub fn values_match(expected: f64, got: f64, tol: &Tolerances) -> bool {
    let diff = (got - expected).abs();

    if diff <= tol.abs {
        return true;
    }

    diff / f64::EPSILON.max(expected.abs()) <= tol.rel
}

/// Relative error of `got` against `expected`, with the same ε guard.
pub fn relative_error(expected: f64, got: f64) -> f64 {
    (got - expected).abs() / f64::EPSILON.max(expected.abs())
}
