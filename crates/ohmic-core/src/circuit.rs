//! Circuit graph representation.

use indexmap::IndexSet;

use crate::element::{Element, ElementId};
use crate::error::{Error, Result};
use crate::node::NodeId;

/// A DC circuit: an ordered set of named nodes, an ordered list of
/// elements connecting them, and an optional terminal pair for
/// equivalent-resistance queries.
///
/// The circuit is a plain value; it is treated as read-only input by the
/// solver and is never mutated by a solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    /// Nodes in declaration order. Order determines unknown indexing.
    nodes: Vec<NodeId>,
    /// Elements in declaration order.
    elements: Vec<Element>,
    /// Terminal pair for equivalent-resistance queries, if any.
    terminals: Option<(NodeId, NodeId)>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Nodes keep their declaration order.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> &mut Self {
        self.nodes.push(id.into());
        self
    }

    /// Add a resistor between `a` and `b`.
    pub fn add_resistor(
        &mut self,
        id: impl Into<ElementId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        ohms: f64,
    ) -> &mut Self {
        self.elements.push(Element::Resistor {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            ohms,
        });
        self
    }

    /// Add a voltage source enforcing `V(a) − V(b) = volts`.
    pub fn add_voltage_source(
        &mut self,
        id: impl Into<ElementId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        volts: f64,
    ) -> &mut Self {
        self.elements.push(Element::VoltageSource {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            volts,
        });
        self
    }

    /// Add a current source injecting `amps` flowing `a` → `b`.
    pub fn add_current_source(
        &mut self,
        id: impl Into<ElementId>,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        amps: f64,
    ) -> &mut Self {
        self.elements.push(Element::CurrentSource {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            amps,
        });
        self
    }

    /// Add a pre-built element.
    pub fn add_element(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Set the terminal pair used by equivalent-resistance queries.
    pub fn set_terminals(&mut self, a: impl Into<NodeId>, b: impl Into<NodeId>) -> &mut Self {
        self.terminals = Some((a.into(), b.into()));
        self
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The terminal pair, if one was set.
    pub fn terminals(&self) -> Option<(&NodeId, &NodeId)> {
        self.terminals.as_ref().map(|(a, b)| (a, b))
    }

    /// Check if a node is declared.
    pub fn has_node(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// Number of voltage sources, i.e. auxiliary branch-current unknowns.
    pub fn num_current_vars(&self) -> usize {
        self.elements.iter().map(Element::num_current_vars).sum()
    }

    /// Validate the circuit's structural invariants.
    ///
    /// Checks: at least 2 nodes, unique node names, unique element ids,
    /// every element endpoint declared, every resistance strictly
    /// positive.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.len() < 2 {
            return Err(Error::InsufficientNodes {
                found: self.nodes.len(),
            });
        }

        let mut seen_nodes: IndexSet<&NodeId> = IndexSet::new();
        for node in &self.nodes {
            if !seen_nodes.insert(node) {
                return Err(Error::DuplicateNode(node.to_string()));
            }
        }

        let mut seen_elements: IndexSet<&ElementId> = IndexSet::new();
        for element in &self.elements {
            if !seen_elements.insert(element.id()) {
                return Err(Error::DuplicateElement(element.id().to_string()));
            }
            let (a, b) = element.nodes();
            for endpoint in [a, b] {
                if !seen_nodes.contains(endpoint) {
                    return Err(Error::NodeNotFound(endpoint.to_string()));
                }
            }
            if let Element::Resistor { id, ohms, .. } = element {
                if *ohms <= 0.0 {
                    return Err(Error::NonPositiveResistance {
                        element: id.to_string(),
                        ohms: *ohms,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider() -> Circuit {
        let mut circuit = Circuit::new();
        circuit
            .add_node("0")
            .add_node("n1")
            .add_node("n2")
            .add_voltage_source("V1", "n1", "0", 10.0)
            .add_resistor("R1", "n1", "n2", 1000.0)
            .add_resistor("R2", "n2", "0", 1000.0);
        circuit
    }

    #[test]
    fn test_valid_circuit() {
        assert!(divider().validate().is_ok());
    }

    #[test]
    fn test_too_few_nodes() {
        let mut circuit = Circuit::new();
        circuit.add_node("only");
        assert!(matches!(
            circuit.validate(),
            Err(Error::InsufficientNodes { found: 1 })
        ));
    }

    #[test]
    fn test_duplicate_node() {
        let mut circuit = Circuit::new();
        circuit.add_node("a").add_node("b").add_node("a");
        assert!(matches!(circuit.validate(), Err(Error::DuplicateNode(_))));
    }

    #[test]
    fn test_undeclared_endpoint() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("a")
            .add_node("b")
            .add_resistor("R1", "a", "missing", 100.0);
        assert!(matches!(circuit.validate(), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_non_positive_resistance() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("a")
            .add_node("b")
            .add_resistor("R1", "a", "b", 0.0);
        assert!(matches!(
            circuit.validate(),
            Err(Error::NonPositiveResistance { .. })
        ));
    }

    #[test]
    fn test_duplicate_element_id() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("a")
            .add_node("b")
            .add_resistor("R1", "a", "b", 100.0)
            .add_resistor("R1", "a", "b", 200.0);
        assert!(matches!(
            circuit.validate(),
            Err(Error::DuplicateElement(_))
        ));
    }

    #[test]
    fn test_current_var_count() {
        let circuit = divider();
        assert_eq!(circuit.num_current_vars(), 1);
    }

    #[test]
    fn test_terminals() {
        let mut circuit = divider();
        assert!(circuit.terminals().is_none());
        circuit.set_terminals("n1", "0");
        let (a, b) = circuit.terminals().unwrap();
        assert_eq!(a.as_str(), "n1");
        assert_eq!(b.as_str(), "0");
    }
}
