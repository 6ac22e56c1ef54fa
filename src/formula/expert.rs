//! Hand-selected formulas for common high-level cube operations.

use super::Formula;
use crate::error::FormulaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpertFormula {
    pub name: &'static str,
    pub notation: &'static str,
}

pub const R_PERMUTATION: ExpertFormula = ExpertFormula {
    name: "r_permutation",
    notation: "R' U2 R U2 R' F R U R' U' R' F' R2 U'",
};

pub const SWAP_3_EDGES_FACE: ExpertFormula = ExpertFormula {
    name: "swap_3_edges_face",
    notation: "R U' R U R U R U' R' U' R2",
};

pub const SWAP_3_EDGES_MID: ExpertFormula = ExpertFormula {
    name: "swap_3_edges_mid",
    notation: "R L' F2 R' L U2 R L' F2 R' L U2",
};

pub const SWAP_3_CORNERS: ExpertFormula = ExpertFormula {
    name: "swap_3_corners",
    notation: "R' F R' B2 R F' R' B2 R2",
};

pub const ORIENT_2_EDGES: ExpertFormula = ExpertFormula {
    name: "orient_2_edges",
    notation: "F R U R' U' F'",
};

pub const ORIENT_2_CORNERS: ExpertFormula = ExpertFormula {
    name: "orient_2_corners",
    notation: "R' D' R D R' D' R D U R' D' R D R' D' R D R' D' R D R' D' R D U'",
};

/// Expert formulas in catalog order.
pub const ALG_FORMULAS: [ExpertFormula; 6] = [
    R_PERMUTATION,
    SWAP_3_EDGES_FACE,
    SWAP_3_EDGES_MID,
    SWAP_3_CORNERS,
    ORIENT_2_EDGES,
    ORIENT_2_CORNERS,
];

impl ExpertFormula {
    pub fn formula(&self) -> Result<Formula, FormulaError> {
        self.notation.parse()
    }
}

pub fn alg_formulas() -> Result<Vec<Formula>, FormulaError> {
    ALG_FORMULAS.iter().map(ExpertFormula::formula).collect()
}
