//! Facelet model of the 3x3x3 cube.
//!
//! States are 54-entry arrays where each slot holds the home index of the
//! sticker currently occupying it. Turn permutations are derived once from the
//! cube geometry (rotate every sticker's position and normal about the face
//! axis) and cached for the process lifetime.

mod effects;
pub(crate) mod geometry;

pub use effects::{EffectModel, summarize_effects};

use crate::error::DomainError;
use geometry::{Vec3, axis_index, dot, rotate_cw};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of stickers on the cube.
pub const FACELETS: usize = 54;

/// Primitive move: a clockwise quarter turn of one face.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Move {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Move {
    /// Canonical enumeration order of the primitive moves.
    pub const ALL: [Move; 6] = [Move::U, Move::D, Move::L, Move::R, Move::F, Move::B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::U => "U",
            Move::D => "D",
            Move::L => "L",
            Move::R => "R",
            Move::F => "F",
            Move::B => "B",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Outward normal of the face turned by this move.
    pub(crate) fn axis(self) -> Vec3 {
        match self {
            Move::U => [0, 1, 0],
            Move::D => [0, -1, 0],
            Move::L => [-1, 0, 0],
            Move::R => [1, 0, 0],
            Move::F => [0, 0, 1],
            Move::B => [0, 0, -1],
        }
    }

    pub(crate) fn from_axis(axis: Vec3) -> Option<Move> {
        Move::ALL.into_iter().find(|mv| mv.axis() == axis)
    }
}

impl TryFrom<&str> for Move {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "U" => Ok(Move::U),
            "D" => Ok(Move::D),
            "L" => Ok(Move::L),
            "R" => Ok(Move::R),
            "F" => Ok(Move::F),
            "B" => Ok(Move::B),
            other => Err(DomainError::UnknownMove(other.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, immutable sequence of primitive moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> Self {
        Self(moves)
    }

    pub fn single(mv: Move) -> Self {
        Self(vec![mv])
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.0.iter().copied()
    }

    /// Sequence that undoes this one. Each quarter turn is undone by three more.
    pub fn inverse(&self) -> Self {
        self.0
            .iter()
            .rev()
            .flat_map(|&mv| [mv, mv, mv])
            .collect()
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, mv) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(mv.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Move::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Cube state as a facelet permutation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    facelets: [u8; FACELETS],
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube {
    /// The canonical start state: every sticker at its home position.
    pub fn solved() -> Self {
        let mut facelets = [0u8; FACELETS];
        for (idx, slot) in facelets.iter_mut().enumerate() {
            *slot = idx as u8;
        }
        Self { facelets }
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    pub fn facelets(&self) -> &[u8; FACELETS] {
        &self.facelets
    }

    /// Returns the state reached by applying `sequence` to this one.
    pub fn apply(&self, sequence: &MoveSequence) -> Cube {
        let mut next = self.clone();
        for mv in sequence.iter() {
            next.turn(mv);
        }
        next
    }

    /// Effect summary of the transition from `self` to `after`.
    pub fn summarize_effects(&self, after: &Cube) -> EffectModel {
        summarize_effects(self, after)
    }

    fn turn(&mut self, mv: Move) {
        let perm = &turn_tables()[mv.index()];
        let old = self.facelets;
        for (from, &to) in perm.iter().enumerate() {
            self.facelets[to as usize] = old[from];
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Sticker {
    pos: Vec3,
    normal: Vec3,
}

/// Stickers in home-index order: face by face in `Move::ALL` order, nine per face.
fn stickers() -> Vec<Sticker> {
    let mut out = Vec::with_capacity(FACELETS);
    for face in Move::ALL {
        let normal = face.axis();
        let k = axis_index(normal);
        let (i, j) = ((k + 1) % 3, (k + 2) % 3);
        for a in -1..=1 {
            for b in -1..=1 {
                let mut pos = normal;
                pos[i] = a;
                pos[j] = b;
                out.push(Sticker { pos, normal });
            }
        }
    }
    out
}

/// `table[mv][from] = to` for each primitive move.
fn turn_tables() -> &'static [[u8; FACELETS]; 6] {
    static TABLES: OnceLock<[[u8; FACELETS]; 6]> = OnceLock::new();
    TABLES.get_or_init(|| {
        let stickers = stickers();
        let index: HashMap<Sticker, u8> = stickers
            .iter()
            .enumerate()
            .map(|(idx, sticker)| (*sticker, idx as u8))
            .collect();

        let mut tables = [[0u8; FACELETS]; 6];
        for mv in Move::ALL {
            let axis = mv.axis();
            let table = &mut tables[mv.index()];
            for (from, sticker) in stickers.iter().enumerate() {
                if dot(sticker.pos, axis) != 1 {
                    table[from] = from as u8;
                    continue;
                }
                let moved = Sticker {
                    pos: rotate_cw(sticker.pos, axis),
                    normal: rotate_cw(sticker.normal, axis),
                };
                table[from] = match index.get(&moved) {
                    Some(&to) => to,
                    None => unreachable!("face turns map stickers onto stickers"),
                };
            }
        }
        tables
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> MoveSequence {
        text.parse().expect("valid moves")
    }

    #[test]
    fn four_quarter_turns_restore_solved() {
        for mv in Move::ALL {
            let cube = Cube::solved().apply(&MoveSequence::new(vec![mv; 4]));
            assert!(cube.is_solved(), "{mv}^4 should be the identity");
        }
    }

    #[test]
    fn single_turn_is_not_identity() {
        for mv in Move::ALL {
            assert!(!Cube::solved().apply(&MoveSequence::single(mv)).is_solved());
        }
    }

    #[test]
    fn sequence_then_inverse_restores_solved() {
        let s = seq("R U F D L B R R U");
        let cube = Cube::solved().apply(&s).apply(&s.inverse());
        assert!(cube.is_solved());
    }

    #[test]
    fn opposite_faces_commute() {
        let a = Cube::solved().apply(&seq("U D"));
        let b = Cube::solved().apply(&seq("D U"));
        assert_eq!(a, b);
        let c = Cube::solved().apply(&seq("U R"));
        let d = Cube::solved().apply(&seq("R U"));
        assert_ne!(c, d);
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = seq("R U R R R U U U");
        let repeated: MoveSequence = (0..6).flat_map(|_| sexy.iter()).collect();
        assert!(Cube::solved().apply(&repeated).is_solved());
        let five: MoveSequence = (0..5).flat_map(|_| sexy.iter()).collect();
        assert!(!Cube::solved().apply(&five).is_solved());
    }

    #[test]
    fn parse_rejects_unknown_moves() {
        assert_eq!(
            "R X U".parse::<MoveSequence>(),
            Err(DomainError::UnknownMove("X".to_string()))
        );
        assert_eq!(seq("  R  U ").to_string(), "R U");
    }

    #[test]
    fn sequences_serialize_as_letter_arrays() {
        let json = serde_json::to_string(&seq("R U R")).unwrap();
        assert_eq!(json, r#"["R","U","R"]"#);
        let back: MoveSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq("R U R"));
    }
}
