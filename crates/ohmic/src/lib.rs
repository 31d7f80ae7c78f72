//! # Ohmic
//!
//! A DC resistive circuit solver built on Modified Nodal Analysis.
//!
//! Ohmic computes every node voltage and element branch current of a
//! circuit of resistors and ideal sources, and the Thevenin-equivalent
//! resistance between two terminals.
//!
//! ## Quick start
//!
//! ```rust
//! use ohmic::prelude::*;
//!
//! let mut circuit = Circuit::new();
//! circuit
//!     .add_node("0")
//!     .add_node("n1")
//!     .add_node("n2")
//!     .add_voltage_source("V1", "n1", "0", 10.0)
//!     .add_resistor("R1", "n1", "n2", 1000.0)
//!     .add_resistor("R2", "n2", "0", 1000.0);
//!
//! let solution = solve(&circuit, &SolveOptions::default()).unwrap();
//! assert!((solution.voltage(&NodeId::new("n2")) - 5.0).abs() < 1e-9);
//! ```

// Re-export member crates
pub use ohmic_core as core;
pub use ohmic_solver as solver;
pub use ohmic_validate as validate;

// ============================================================================
// Convenient re-exports from ohmic_core
// ============================================================================

pub use ohmic_core::{
    // MNA assembly
    assemble,
    // Circuit representation
    Circuit,
    Element,
    ElementId,
    // Errors
    Error as CoreError,
    MnaSystem,
    NodeId,
    UnknownIndex,
};

// ============================================================================
// Convenient re-exports from ohmic_solver
// ============================================================================

pub use ohmic_solver::{
    // Equivalent resistance
    equivalent_resistance,
    equivalent_resistance_at_terminals,
    // DC analysis
    solve,
    solve_dense,
    // Errors
    Error as SolverError,
    Solution,
    SolveOptions,
    REFERENCE_PREFERENCE,
};

// ============================================================================
// Convenient re-exports from ohmic_validate
// ============================================================================

pub use ohmic_validate::{relative_error, values_match, Tolerances};

// ============================================================================
// Re-export commonly used external types
// ============================================================================

/// Re-export of nalgebra's dynamic matrix type.
pub use nalgebra::DMatrix;

/// Re-export of nalgebra's dynamic vector type.
pub use nalgebra::DVector;

/// Prelude module containing commonly used types and functions.
///
/// ```rust
/// use ohmic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        equivalent_resistance, solve, values_match, Circuit, Element, ElementId, NodeId, Solution,
        SolveOptions, Tolerances,
    };
}
