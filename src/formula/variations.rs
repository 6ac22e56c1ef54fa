//! Whole-cube symmetries and formula variations.
//!
//! The 24 rotations are the closure of the `x` (about R) and `y` (about U)
//! quarter rotations, listed in breadth-first discovery order from the
//! identity. Mirrored symmetries follow, each one a rotation composed with the
//! L/R reflection. The order is fixed, so `variations` is pure and stable.

use super::{Formula, Term};
use crate::cube::geometry::rotate_cw;
use crate::cube::{Move, MoveSequence};
use std::collections::{HashSet, VecDeque};
use std::sync::OnceLock;

/// Relabelling of faces induced by a whole-cube rotation or reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symmetry {
    faces: [Move; 6],
    mirrored: bool,
}

impl Symmetry {
    pub const IDENTITY: Symmetry = Symmetry {
        faces: Move::ALL,
        mirrored: false,
    };

    fn rotation_about(axis: Move) -> Symmetry {
        let mut faces = Move::ALL;
        for mv in Move::ALL {
            faces[mv.index()] = match Move::from_axis(rotate_cw(mv.axis(), axis.axis())) {
                Some(image) => image,
                None => unreachable!("rotations map faces onto faces"),
            };
        }
        Symmetry {
            faces,
            mirrored: false,
        }
    }

    /// Symmetry that applies `self` first, then `next`.
    fn then(self, next: Symmetry) -> Symmetry {
        let mut faces = Move::ALL;
        for mv in Move::ALL {
            faces[mv.index()] = next.image(self.image(mv));
        }
        Symmetry {
            faces,
            mirrored: self.mirrored != next.mirrored,
        }
    }

    fn reflection() -> Symmetry {
        let mut faces = Move::ALL;
        faces[Move::L.index()] = Move::R;
        faces[Move::R.index()] = Move::L;
        Symmetry {
            faces,
            mirrored: true,
        }
    }

    pub fn image(&self, mv: Move) -> Move {
        self.faces[mv.index()]
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    /// Reflections reverse handedness, so turn directions flip.
    pub fn apply_term(&self, term: Term) -> Term {
        Term {
            mv: self.image(term.mv),
            turns: if self.mirrored {
                4 - term.turns
            } else {
                term.turns
            },
        }
    }

    pub fn apply(&self, formula: &Formula) -> Formula {
        Formula::new(
            formula
                .terms()
                .iter()
                .map(|term| self.apply_term(*term))
                .collect(),
        )
    }
}

fn rotations() -> Vec<Symmetry> {
    let generators = [
        Symmetry::rotation_about(Move::R),
        Symmetry::rotation_about(Move::U),
    ];
    let mut seen: HashSet<Symmetry> = HashSet::from([Symmetry::IDENTITY]);
    let mut order = vec![Symmetry::IDENTITY];
    let mut queue = VecDeque::from([Symmetry::IDENTITY]);
    while let Some(current) = queue.pop_front() {
        for generator in generators {
            let next = current.then(generator);
            if seen.insert(next) {
                order.push(next);
                queue.push_back(next);
            }
        }
    }
    order
}

/// All 48 cube symmetries: rotations first, then their mirror images.
pub fn symmetries() -> &'static [Symmetry] {
    static SYMMETRIES: OnceLock<Vec<Symmetry>> = OnceLock::new();
    SYMMETRIES.get_or_init(|| {
        let rotations = rotations();
        let mirrored: Vec<Symmetry> = rotations
            .iter()
            .map(|rotation| rotation.then(Symmetry::reflection()))
            .collect();
        rotations.into_iter().chain(mirrored).collect()
    })
}

/// Distinct expansions of `formula` under every symmetry, first occurrence kept.
///
/// Index 0 is always the formula's own expansion.
pub fn variations(formula: &Formula) -> Vec<MoveSequence> {
    let mut seen: HashSet<MoveSequence> = HashSet::new();
    let mut out = Vec::new();
    for symmetry in symmetries() {
        let expanded = symmetry.apply(formula).expand();
        if seen.insert(expanded.clone()) {
            out.push(expanded);
        }
    }
    out
}
