//! Error types for ohmic-solver.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The assembled system has no unique solution: a floating
    /// subgraph, conflicting voltage constraints, or a node with no DC
    /// path to the reference. Structural, not transient; never retried.
    #[error("singular matrix")]
    SingularMatrix,

    #[error("invalid matrix dimensions: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("reference node not in circuit: {0}")]
    InvalidReferenceNode(String),

    #[error("circuit has no terminal pair set")]
    MissingTerminals,

    #[error(transparent)]
    Circuit(#[from] ohmic_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
