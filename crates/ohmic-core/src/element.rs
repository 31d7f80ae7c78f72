//! Circuit elements: resistors and independent sources.

use std::fmt;

use crate::node::NodeId;

/// Unique name of an element in the circuit (e.g. "R1", "V1").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    /// Create an element id from a name.
    pub fn new(name: impl Into<String>) -> Self {
        ElementId(name.into())
    }

    /// Get the element name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(name: &str) -> Self {
        ElementId::new(name)
    }
}

/// A two-terminal DC circuit element.
///
/// Sign conventions, uniform across variants:
/// - A resistor's current is reported positive when flowing `a` → `b`.
/// - A voltage source enforces `V(a) − V(b) = volts` and defines one
///   auxiliary branch-current unknown, positive flowing `a` → `b`
///   through the source.
/// - A current source injects `amps` flowing `a` → `b` unconditionally.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Ideal resistor. `ohms` must be strictly positive.
    Resistor {
        id: ElementId,
        a: NodeId,
        b: NodeId,
        ohms: f64,
    },
    /// Ideal independent voltage source.
    VoltageSource {
        id: ElementId,
        a: NodeId,
        b: NodeId,
        volts: f64,
    },
    /// Ideal independent current source.
    CurrentSource {
        id: ElementId,
        a: NodeId,
        b: NodeId,
        amps: f64,
    },
}

impl Element {
    /// Get the element's id.
    pub fn id(&self) -> &ElementId {
        match self {
            Element::Resistor { id, .. }
            | Element::VoltageSource { id, .. }
            | Element::CurrentSource { id, .. } => id,
        }
    }

    /// Get the element's terminal nodes, in `(a, b)` order.
    pub fn nodes(&self) -> (&NodeId, &NodeId) {
        match self {
            Element::Resistor { a, b, .. }
            | Element::VoltageSource { a, b, .. }
            | Element::CurrentSource { a, b, .. } => (a, b),
        }
    }

    /// Number of auxiliary branch-current unknowns this element adds to
    /// the MNA system. Only voltage sources carry one.
    pub fn num_current_vars(&self) -> usize {
        match self {
            Element::VoltageSource { .. } => 1,
            Element::Resistor { .. } | Element::CurrentSource { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_accessors() {
        let r = Element::Resistor {
            id: ElementId::new("R1"),
            a: NodeId::new("n1"),
            b: NodeId::new("n2"),
            ohms: 1000.0,
        };
        assert_eq!(r.id().as_str(), "R1");
        let (a, b) = r.nodes();
        assert_eq!(a.as_str(), "n1");
        assert_eq!(b.as_str(), "n2");
        assert_eq!(r.num_current_vars(), 0);
    }

    #[test]
    fn test_voltage_source_has_branch_unknown() {
        let v = Element::VoltageSource {
            id: ElementId::new("V1"),
            a: NodeId::new("n1"),
            b: NodeId::new("0"),
            volts: 10.0,
        };
        assert_eq!(v.num_current_vars(), 1);
    }
}
