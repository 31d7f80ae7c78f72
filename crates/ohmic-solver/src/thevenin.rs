//! Thevenin-equivalent resistance between two terminals.

use ohmic_core::{Circuit, Element, ElementId, NodeId};

use crate::dc::{solve, SolveOptions};
use crate::error::{Error, Result};

/// Id of the synthetic probe current source. Double-underscore prefix
/// keeps it out of the way of caller-chosen element names.
const PROBE_ID: &str = "__req_probe";

/// Compute the equivalent resistance seen between `a` and `b`.
///
/// Independent sources are deactivated first: voltage sources become
/// shorts (volts = 0, branch unknown preserved), current sources become
/// opens (dropped). A 1 A probe current source is driven a→b through
/// the deactivated network and the resistance read off as
/// `|V(a) − V(b)|`.
///
/// Only the magnitude is meaningful: the transformed circuit picks its
/// own reference node, which can flip the raw sign of the difference.
/// The contract presumes a passive two-terminal network once sources
/// are deactivated.
///
/// Disconnected terminals make the inner system singular; that error
/// propagates unchanged.
pub fn equivalent_resistance(circuit: &Circuit, a: &NodeId, b: &NodeId) -> Result<f64> {
    if !circuit.has_node(a) {
        return Err(ohmic_core::Error::NodeNotFound(a.to_string()).into());
    }
    if !circuit.has_node(b) {
        return Err(ohmic_core::Error::NodeNotFound(b.to_string()).into());
    }

    let probed = deactivate_and_probe(circuit, a, b);
    let solution = solve(&probed, &SolveOptions::default())?;

    Ok(solution.voltage_between(a, b).abs())
}

/// Compute the equivalent resistance across the circuit's stored
/// terminal pair.
pub fn equivalent_resistance_at_terminals(circuit: &Circuit) -> Result<f64> {
    let (a, b) = circuit.terminals().ok_or(Error::MissingTerminals)?;
    let (a, b) = (a.clone(), b.clone());
    equivalent_resistance(circuit, &a, &b)
}

/// Build the deactivated-sources copy of a circuit with the unit probe
/// appended.
fn deactivate_and_probe(circuit: &Circuit, a: &NodeId, b: &NodeId) -> Circuit {
    let mut probed = Circuit::new();
    for node in circuit.nodes() {
        probed.add_node(node.clone());
    }

    for element in circuit.elements() {
        match element {
            Element::Resistor { .. } => {
                probed.add_element(element.clone());
            }
            Element::VoltageSource { id, a, b, .. } => {
                // Short: the constraint V(a) − V(b) = 0 still binds the
                // nodes, and the branch unknown keeps carrying current.
                probed.add_element(Element::VoltageSource {
                    id: id.clone(),
                    a: a.clone(),
                    b: b.clone(),
                    volts: 0.0,
                });
            }
            Element::CurrentSource { .. } => {
                // Open: contributes nothing to the deactivated network.
            }
        }
    }

    probed.add_current_source(ElementId::new(PROBE_ID), a.clone(), b.clone(), 1.0);
    probed
}
