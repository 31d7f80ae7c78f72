//! DC operating point analysis.

use indexmap::IndexMap;
use ohmic_core::{assemble, Circuit, Element, ElementId, NodeId, UnknownIndex};

use crate::error::{Error, Result};
use crate::linear::solve_dense;

/// Default reference-node preference list, checked in order against the
/// circuit's node set; the first match becomes the 0 V reference. When
/// nothing matches, the first declared node is used.
pub const REFERENCE_PREFERENCE: &[&str] = &["0", "GND", "gnd", "ref", "REF"];

/// Options for a DC solve.
#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Explicit reference node. Must be a circuit node when set;
    /// overrides the preference list entirely.
    pub reference: Option<NodeId>,
    /// Ordered reference-node preference list used when no explicit
    /// reference is given. Defaults to [`REFERENCE_PREFERENCE`].
    pub preference: Vec<String>,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            reference: None,
            preference: REFERENCE_PREFERENCE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SolveOptions {
    /// Options with an explicit reference node.
    pub fn with_reference(reference: impl Into<NodeId>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }
}

/// Result of a DC operating point analysis.
///
/// A fresh immutable value per solve, with no back-reference to the
/// circuit. Voltages are measured against the reference node; currents
/// follow each element's a→b sign convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    ref_node: NodeId,
    voltages: IndexMap<NodeId, f64>,
    currents: IndexMap<ElementId, f64>,
}

impl Solution {
    /// The node held at 0 V.
    pub fn ref_node(&self) -> &NodeId {
        &self.ref_node
    }

    /// Voltage at a node. Nodes outside the solved set (including any
    /// name a downstream consumer queries that this circuit never
    /// declared) read as 0.0.
    pub fn voltage(&self, node: &NodeId) -> f64 {
        self.voltages.get(node).copied().unwrap_or(0.0)
    }

    /// Voltage difference `V(a) − V(b)`.
    pub fn voltage_between(&self, a: &NodeId, b: &NodeId) -> f64 {
        self.voltage(a) - self.voltage(b)
    }

    /// Signed current through an element (positive flowing a→b), or
    /// 0.0 for an unknown element id.
    pub fn current(&self, element: &ElementId) -> f64 {
        self.currents.get(element).copied().unwrap_or(0.0)
    }

    /// All solved node voltages, in circuit node order (reference
    /// included at 0 V).
    pub fn voltages(&self) -> &IndexMap<NodeId, f64> {
        &self.voltages
    }

    /// All element currents, in circuit element order.
    pub fn currents(&self) -> &IndexMap<ElementId, f64> {
        &self.currents
    }
}

/// Resolve the reference node for a circuit.
///
/// An explicit reference must be one of the circuit's nodes. Otherwise
/// the preference list is scanned in order and the first hit wins, with
/// the first declared node as the final fallback.
fn select_reference(circuit: &Circuit, options: &SolveOptions) -> Result<NodeId> {
    if let Some(reference) = &options.reference {
        if !circuit.has_node(reference) {
            return Err(Error::InvalidReferenceNode(reference.to_string()));
        }
        return Ok(reference.clone());
    }

    for name in &options.preference {
        let candidate = NodeId::new(name.clone());
        if circuit.has_node(&candidate) {
            return Ok(candidate);
        }
    }

    // Validation guarantees at least two nodes.
    Ok(circuit.nodes()[0].clone())
}

/// Solve the DC operating point of a circuit.
///
/// Validates the circuit, resolves the reference node, assembles the
/// MNA system, solves it, and reconstructs node voltages and element
/// currents. A singular system propagates as
/// [`Error::SingularMatrix`]: it signals an ill-posed topology, never a
/// retryable fault.
pub fn solve(circuit: &Circuit, options: &SolveOptions) -> Result<Solution> {
    circuit.validate()?;
    let reference = select_reference(circuit, options)?;

    let index = UnknownIndex::build(circuit, &reference);
    let mna = assemble(circuit, &index);
    let x = solve_dense(mna.matrix(), mna.rhs())?;

    // Node voltages: reference at 0, the rest read from the unknown
    // vector, reported in circuit node order.
    let mut voltages: IndexMap<NodeId, f64> = IndexMap::with_capacity(circuit.nodes().len());
    for node in circuit.nodes() {
        let v = match index.node_index(node) {
            Some(idx) => x[idx],
            None => 0.0,
        };
        voltages.insert(node.clone(), v);
    }

    let num_nodes = index.num_nodes();
    let mut currents: IndexMap<ElementId, f64> = IndexMap::with_capacity(circuit.elements().len());
    for element in circuit.elements() {
        let i = match element {
            // Derived from the solved voltages rather than a solver
            // unknown, so reported voltages and resistor currents
            // always agree.
            Element::Resistor { a, b, ohms, .. } => {
                (voltages[a] - voltages[b]) / ohms
            }
            Element::VoltageSource { id, .. } => {
                let branch = index
                    .branch_index(id)
                    .expect("voltage source indexed during build");
                x[num_nodes + branch]
            }
            Element::CurrentSource { amps, .. } => *amps,
        };
        currents.insert(element.id().clone(), i);
    }

    Ok(Solution {
        ref_node: reference,
        voltages,
        currents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

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
    fn test_voltage_divider() {
        let solution = solve(&divider(), &SolveOptions::default()).unwrap();

        assert_eq!(solution.ref_node(), &NodeId::new("0"));
        assert_relative_eq!(solution.voltage(&NodeId::new("n1")), 10.0, epsilon = 1e-10);
        assert_relative_eq!(solution.voltage(&NodeId::new("n2")), 5.0, epsilon = 1e-10);
        assert_eq!(solution.voltage(&NodeId::new("0")), 0.0);

        // R2 carries 5 mA flowing n2 → 0.
        assert_relative_eq!(solution.current(&ElementId::new("R2")), 0.005, epsilon = 1e-12);
        // Through V1 the branch current flows 0 → n1 internally, so the
        // a→b reading is negative.
        assert_relative_eq!(solution.current(&ElementId::new("V1")), -0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_preference_order() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("x")
            .add_node("GND")
            .add_node("gnd")
            .add_resistor("R1", "x", "GND", 100.0)
            .add_resistor("R2", "GND", "gnd", 100.0);

        // "0" is absent, so "GND" wins over "gnd".
        let solution = solve(&circuit, &SolveOptions::default()).unwrap();
        assert_eq!(solution.ref_node(), &NodeId::new("GND"));
    }

    #[test]
    fn test_reference_fallback_is_first_node() {
        let mut circuit = Circuit::new();
        circuit
            .add_node("top")
            .add_node("bottom")
            .add_resistor("R1", "top", "bottom", 100.0)
            .add_voltage_source("V1", "top", "bottom", 1.0);

        let solution = solve(&circuit, &SolveOptions::default()).unwrap();
        assert_eq!(solution.ref_node(), &NodeId::new("top"));
        assert_relative_eq!(
            solution.voltage(&NodeId::new("bottom")),
            -1.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_explicit_reference_override() {
        let solution = solve(&divider(), &SolveOptions::with_reference("n2")).unwrap();

        assert_eq!(solution.ref_node(), &NodeId::new("n2"));
        assert_eq!(solution.voltage(&NodeId::new("n2")), 0.0);
        // Node-to-node differences are reference-independent.
        assert_relative_eq!(
            solution.voltage_between(&NodeId::new("n1"), &NodeId::new("0")),
            10.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_invalid_reference_override() {
        let result = solve(&divider(), &SolveOptions::with_reference("nowhere"));
        assert!(matches!(result, Err(Error::InvalidReferenceNode(_))));
    }

    #[test]
    fn test_insufficient_nodes() {
        let mut circuit = Circuit::new();
        circuit.add_node("only");
        let result = solve(&circuit, &SolveOptions::default());
        assert!(matches!(
            result,
            Err(Error::Circuit(ohmic_core::Error::InsufficientNodes { found: 1 }))
        ));
    }

    #[test]
    fn test_unknown_lookups_read_zero() {
        let solution = solve(&divider(), &SolveOptions::default()).unwrap();
        assert_eq!(solution.voltage(&NodeId::new("ghost")), 0.0);
        assert_eq!(solution.current(&ElementId::new("R99")), 0.0);
    }

    #[test]
    fn test_isolated_node_is_singular() {
        let mut circuit = divider();
        circuit.add_node("floating");
        let result = solve(&circuit, &SolveOptions::default());
        assert!(matches!(result, Err(Error::SingularMatrix)));
    }
}
