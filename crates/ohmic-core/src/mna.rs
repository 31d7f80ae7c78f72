//! Modified Nodal Analysis (MNA) system accumulator.

use nalgebra::{DMatrix, DVector};

/// The assembled MNA system `Ax = z`.
///
/// `A` is the coefficient matrix (conductance block extended with
/// voltage-source coupling rows/columns), `x` the unknown vector (node
/// voltages followed by branch currents), `z` the right-hand side.
///
/// Unknown layout: indices `0..num_nodes` are the non-reference node
/// voltages; indices `num_nodes..num_nodes + num_vsources` are the
/// voltage-source branch currents. The reference node has no row or
/// column; stamps pass `None` for a reference endpoint and its
/// contribution is omitted.
///
/// All mutation goes through the additive primitives `add_coefficient`
/// and `add_rhs`: stamps accumulate, never overwrite, so a node touched
/// by several elements collects every contribution.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    /// Number of voltage unknowns (nodes excluding the reference).
    num_nodes: usize,
    /// Number of branch-current unknowns (voltage sources).
    num_vsources: usize,
}

impl MnaSystem {
    /// Create a zeroed system for `num_nodes` voltage unknowns and
    /// `num_vsources` branch-current unknowns.
    pub fn new(num_nodes: usize, num_vsources: usize) -> Self {
        let size = num_nodes + num_vsources;
        Self {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
            num_nodes,
            num_vsources,
        }
    }

    /// Total number of unknowns.
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_vsources
    }

    /// Number of voltage unknowns.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of branch-current unknowns.
    pub fn num_vsources(&self) -> usize {
        self.num_vsources
    }

    /// Add a value to the coefficient at `(row, col)`.
    pub fn add_coefficient(&mut self, row: usize, col: usize, value: f64) {
        self.matrix[(row, col)] += value;
    }

    /// Add a value to the right-hand side at `row`.
    pub fn add_rhs(&mut self, row: usize, value: f64) {
        self.rhs[row] += value;
    }

    /// Stamp a conductance `g` between node unknowns `i` and `j`
    /// (`None` = reference node, skipped).
    ///
    /// Diagonal entries gain `g` for each non-reference endpoint; when
    /// both endpoints are non-reference the two off-diagonal entries
    /// lose `g`, keeping the stamp symmetric.
    pub fn stamp_conductance(&mut self, i: Option<usize>, j: Option<usize>, g: f64) {
        if let Some(i) = i {
            self.add_coefficient(i, i, g);
        }
        if let Some(j) = j {
            self.add_coefficient(j, j, g);
        }
        if let (Some(i), Some(j)) = (i, j) {
            self.add_coefficient(i, j, -g);
            self.add_coefficient(j, i, -g);
        }
    }

    /// Stamp an independent current source of `amps` flowing from node
    /// unknown `i` to node unknown `j` (`None` = reference, skipped).
    ///
    /// The current leaves node `i` and enters node `j`, so `amps` is
    /// subtracted from row `i` of the RHS and added to row `j`.
    pub fn stamp_current_source(&mut self, i: Option<usize>, j: Option<usize>, amps: f64) {
        if let Some(i) = i {
            self.add_rhs(i, -amps);
        }
        if let Some(j) = j {
            self.add_rhs(j, amps);
        }
    }

    /// Stamp an ideal voltage source enforcing `V(i) − V(j) = volts`,
    /// with branch-current unknown `branch_idx` (0-based among voltage
    /// sources).
    ///
    /// The branch column couples the source current into the KCL rows of
    /// its endpoints; the branch row is the voltage constraint. The
    /// solved branch unknown is the current flowing `i` → `j` through
    /// the source.
    pub fn stamp_voltage_source(
        &mut self,
        i: Option<usize>,
        j: Option<usize>,
        branch_idx: usize,
        volts: f64,
    ) {
        let row = self.num_nodes + branch_idx;

        if let Some(i) = i {
            self.add_coefficient(i, row, 1.0);
            self.add_coefficient(row, i, 1.0);
        }
        if let Some(j) = j {
            self.add_coefficient(j, row, -1.0);
            self.add_coefficient(row, j, -1.0);
        }
        self.add_rhs(row, volts);
    }

    /// The coefficient matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The right-hand side vector.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }
}
