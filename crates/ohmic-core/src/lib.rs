//! Circuit representation and MNA assembly for the ohmic DC solver.
//!
//! This crate provides the data model for DC resistive circuits (nodes,
//! elements, circuits) and the Modified Nodal Analysis (MNA) machinery
//! that turns a circuit into a linear system: unknown indexing, the
//! accumulator matrix, and element stamping.

pub mod assemble;
pub mod circuit;
pub mod element;
pub mod error;
pub mod mna;
pub mod node;

pub use assemble::{assemble, UnknownIndex};
pub use circuit::Circuit;
pub use element::{Element, ElementId};
pub use error::{Error, Result};
pub use mna::MnaSystem;
pub use node::NodeId;
