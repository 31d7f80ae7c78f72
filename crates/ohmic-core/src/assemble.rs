//! Unknown indexing and MNA assembly.

use indexmap::IndexMap;

use crate::circuit::Circuit;
use crate::element::{Element, ElementId};
use crate::mna::MnaSystem;
use crate::node::NodeId;

/// Mapping from circuit nodes and voltage sources to MNA unknown
/// indices.
///
/// Every node except the reference gets a voltage-unknown index in its
/// declaration order. Every voltage source gets a branch-current index
/// in element order, appended after the node unknowns. The reference
/// node maps to no index at all: its KCL row does not exist in the
/// system.
#[derive(Debug, Clone)]
pub struct UnknownIndex {
    reference: NodeId,
    node_index: IndexMap<NodeId, usize>,
    branch_index: IndexMap<ElementId, usize>,
}

impl UnknownIndex {
    /// Build the index for a circuit with the given reference node.
    ///
    /// The caller is responsible for having validated the circuit and
    /// chosen a reference that is one of its nodes.
    pub fn build(circuit: &Circuit, reference: &NodeId) -> Self {
        let node_index: IndexMap<NodeId, usize> = circuit
            .nodes()
            .iter()
            .filter(|node| *node != reference)
            .cloned()
            .zip(0..)
            .collect();

        let branch_index: IndexMap<ElementId, usize> = circuit
            .elements()
            .iter()
            .filter(|e| matches!(e, Element::VoltageSource { .. }))
            .map(|e| e.id().clone())
            .zip(0..)
            .collect();

        Self {
            reference: reference.clone(),
            node_index,
            branch_index,
        }
    }

    /// The reference node.
    pub fn reference(&self) -> &NodeId {
        &self.reference
    }

    /// Voltage-unknown index of a node, or `None` for the reference
    /// node (and for nodes outside the circuit).
    pub fn node_index(&self, node: &NodeId) -> Option<usize> {
        self.node_index.get(node).copied()
    }

    /// Branch-current index of a voltage source (0-based among voltage
    /// sources).
    pub fn branch_index(&self, element: &ElementId) -> Option<usize> {
        self.branch_index.get(element).copied()
    }

    /// Number of voltage unknowns.
    pub fn num_nodes(&self) -> usize {
        self.node_index.len()
    }

    /// Number of branch-current unknowns.
    pub fn num_vsources(&self) -> usize {
        self.branch_index.len()
    }

    /// Non-reference nodes in unknown order.
    pub fn indexed_nodes(&self) -> impl Iterator<Item = (&NodeId, usize)> {
        self.node_index.iter().map(|(node, &idx)| (node, idx))
    }
}

/// Assemble the MNA system for a circuit under the given indexing.
///
/// Stamps every element exactly once; contributions accumulate in the
/// shared matrix and RHS. Reference-node rows and columns are omitted
/// by construction (`node_index` returns `None` for the reference).
pub fn assemble(circuit: &Circuit, index: &UnknownIndex) -> MnaSystem {
    let mut mna = MnaSystem::new(index.num_nodes(), index.num_vsources());

    for element in circuit.elements() {
        match element {
            Element::Resistor { a, b, ohms, .. } => {
                let i = index.node_index(a);
                let j = index.node_index(b);
                mna.stamp_conductance(i, j, 1.0 / ohms);
            }
            Element::CurrentSource { a, b, amps, .. } => {
                let i = index.node_index(a);
                let j = index.node_index(b);
                mna.stamp_current_source(i, j, *amps);
            }
            Element::VoltageSource { id, a, b, volts } => {
                let i = index.node_index(a);
                let j = index.node_index(b);
                let branch = index
                    .branch_index(id)
                    .expect("voltage source indexed during build");
                mna.stamp_voltage_source(i, j, branch, *volts);
            }
        }
    }

    mna
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
    fn test_index_skips_reference() {
        let circuit = divider();
        let index = UnknownIndex::build(&circuit, &NodeId::new("0"));

        assert_eq!(index.num_nodes(), 2);
        assert_eq!(index.num_vsources(), 1);
        assert_eq!(index.node_index(&NodeId::new("0")), None);
        assert_eq!(index.node_index(&NodeId::new("n1")), Some(0));
        assert_eq!(index.node_index(&NodeId::new("n2")), Some(1));
        assert_eq!(index.branch_index(&ElementId::new("V1")), Some(0));
    }

    #[test]
    fn test_index_order_follows_declaration() {
        let circuit = divider();
        // Picking a mid-list reference shifts the remaining indices but
        // keeps declaration order.
        let index = UnknownIndex::build(&circuit, &NodeId::new("n1"));

        assert_eq!(index.node_index(&NodeId::new("0")), Some(0));
        assert_eq!(index.node_index(&NodeId::new("n2")), Some(1));
        assert_eq!(index.node_index(&NodeId::new("n1")), None);
    }

    #[test]
    fn test_assemble_divider() {
        let circuit = divider();
        let index = UnknownIndex::build(&circuit, &NodeId::new("0"));
        let mna = assemble(&circuit, &index);

        assert_eq!(mna.size(), 3);

        let g = 1.0 / 1000.0;
        // KCL at n1: R1 conductance plus the V1 branch coupling.
        assert!((mna.matrix()[(0, 0)] - g).abs() < 1e-15);
        assert!((mna.matrix()[(0, 1)] + g).abs() < 1e-15);
        assert_eq!(mna.matrix()[(0, 2)], 1.0);
        // KCL at n2: both resistors.
        assert!((mna.matrix()[(1, 1)] - 2.0 * g).abs() < 1e-15);
        // Constraint row: V(n1) = 10.
        assert_eq!(mna.matrix()[(2, 0)], 1.0);
        assert_eq!(mna.matrix()[(2, 1)], 0.0);
        assert_eq!(mna.rhs()[2], 10.0);
    }

    #[test]
    fn test_assemble_current_source_skips_reference_endpoint() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("0")
            .add_node("n1")
            .add_current_source("I1", "0", "n1", 0.01)
            .add_resistor("R1", "n1", "0", 500.0);

        let index = UnknownIndex::build(&circuit, &NodeId::new("0"));
        let mna = assemble(&circuit, &index);

        assert_eq!(mna.size(), 1);
        assert_eq!(mna.rhs()[0], 0.01);
    }
}
