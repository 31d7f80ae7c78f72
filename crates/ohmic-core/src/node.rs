//! Node identifiers for circuit graphs.

use std::fmt;

/// Unique name of a node in the circuit.
///
/// Nodes are caller-named strings; there is no reserved ground name.
/// The reference (0 V) node is chosen per solve, not baked into the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from a name.
    pub fn new(name: impl Into<String>) -> Self {
        NodeId(name.into())
    }

    /// Get the node name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        NodeId::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        NodeId(name)
    }
}
