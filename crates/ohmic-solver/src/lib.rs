//! DC analysis for the ohmic circuit solver.
//!
//! Orchestrates reference-node selection, MNA assembly, dense linear
//! solving, and reconstruction of node voltages and branch currents.
//! Also computes the Thevenin-equivalent resistance between two
//! terminals of a passive network.

pub mod dc;
pub mod error;
pub mod linear;
pub mod thevenin;

pub use dc::{solve, Solution, SolveOptions, REFERENCE_PREFERENCE};
pub use error::{Error, Result};
pub use linear::solve_dense;
pub use thevenin::{equivalent_resistance, equivalent_resistance_at_terminals};
