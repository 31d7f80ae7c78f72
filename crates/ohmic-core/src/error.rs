//! Error types for ohmic-core.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("circuit needs at least 2 nodes, found {found}")]
    InsufficientNodes { found: usize },

    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("duplicate element: {0}")]
    DuplicateElement(String),

    #[error("resistor {element} has non-positive resistance {ohms}")]
    NonPositiveResistance { element: String, ohms: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
