//! Formula algebra over face turns.
//!
//! A `Formula` is written in standard notation (`R`, `R2`, `R'`) and expands
//! into a `MoveSequence` of primitive clockwise quarter turns. Formulas can be
//! simplified, expanded under whole-cube symmetries, or synthesized at random.

pub mod expert;
mod variations;

pub use variations::{Symmetry, symmetries, variations};

use crate::cube::{Move, MoveSequence};
use crate::error::FormulaError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One face turned 1, 2 or 3 quarter turns clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    pub mv: Move,
    pub turns: u8,
}

impl Term {
    pub fn new(mv: Move, turns: u8) -> Result<Self, FormulaError> {
        if !(1..=3).contains(&turns) {
            return Err(FormulaError::InvalidTurns(turns));
        }
        Ok(Self { mv, turns })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turns {
            1 => write!(f, "{}", self.mv),
            2 => write!(f, "{}2", self.mv),
            _ => write!(f, "{}'", self.mv),
        }
    }
}

impl FromStr for Term {
    type Err = FormulaError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || FormulaError::InvalidToken(token.to_string());
        let (face, suffix) = token.split_at_checked(1).ok_or_else(invalid)?;
        let mv = Move::try_from(face).map_err(|_| invalid())?;
        let turns = match suffix {
            "" => 1,
            "2" | "2'" => 2,
            "'" => 3,
            _ => return Err(invalid()),
        };
        Ok(Self { mv, turns })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formula(Vec<Term>);

impl Formula {
    pub fn new(terms: Vec<Term>) -> Self {
        Self(terms)
    }

    pub fn single(mv: Move) -> Self {
        Self(vec![Term { mv, turns: 1 }])
    }

    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    /// Number of terms, the unit random synthesis matches against.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concrete primitive moves, each term repeated `turns` times.
    pub fn expand(&self) -> MoveSequence {
        self.0
            .iter()
            .flat_map(|term| std::iter::repeat_n(term.mv, term.turns as usize))
            .collect()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, term) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Term::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<String> for Formula {
    type Error = FormulaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Formula> for String {
    fn from(formula: Formula) -> Self {
        formula.to_string()
    }
}

/// Cancels adjacent turns of the same face.
///
/// Turn counts are summed mod 4 and full rotations dropped; the stack makes
/// cancellations cascade (`R U U' R'` collapses to nothing).
pub fn simplify(formula: &Formula) -> Formula {
    let mut stack: Vec<Term> = Vec::with_capacity(formula.len());
    for term in formula.terms() {
        match stack.last_mut() {
            Some(top) if top.mv == term.mv => {
                let turns = (top.turns + term.turns) % 4;
                if turns == 0 {
                    stack.pop();
                } else {
                    top.turns = turns;
                }
            }
            _ => stack.push(*term),
        }
    }
    Formula(stack)
}

/// Draws a formula of exactly `length` terms.
///
/// Consecutive terms never share a face; turn counts are uniform over 1..=3.
pub fn random_formula<R: Rng + ?Sized>(
    length: usize,
    rng: &mut R,
) -> Result<Formula, FormulaError> {
    if length == 0 {
        return Err(FormulaError::ZeroLength);
    }

    let mut terms: Vec<Term> = Vec::with_capacity(length);
    for _ in 0..length {
        let previous = terms.last().map(|term| term.mv);
        let choices: Vec<Move> = Move::ALL
            .into_iter()
            .filter(|mv| Some(*mv) != previous)
            .collect();
        let mv = choices[rng.gen_range(0..choices.len())];
        let turns = rng.gen_range(1..=3u8);
        terms.push(Term { mv, turns });
    }
    Ok(Formula(terms))
}
