use super::{Cube, FACELETS};
use serde::{Deserialize, Serialize};

/// Net facelet displacement produced by a transition between two states.
///
/// Each entry is `(position, source)`: the sticker that sat at `source` in the
/// earlier state now sits at `position`. Only displaced facelets are listed,
/// sorted by position, so two sequences with the same net effect compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectModel {
    moved: Vec<(u8, u8)>,
}

impl EffectModel {
    pub fn is_identity(&self) -> bool {
        self.moved.is_empty()
    }

    /// Number of displaced facelets.
    pub fn len(&self) -> usize {
        self.moved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }

    pub fn changed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.moved.iter().map(|&(position, _)| position as usize)
    }

    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.moved
    }
}

pub fn summarize_effects(before: &Cube, after: &Cube) -> EffectModel {
    let mut home_to_position = [0u8; FACELETS];
    for (position, &home) in before.facelets.iter().enumerate() {
        home_to_position[home as usize] = position as u8;
    }

    let moved = after
        .facelets
        .iter()
        .enumerate()
        .filter_map(|(position, &home)| {
            let source = home_to_position[home as usize];
            (source as usize != position).then_some((position as u8, source))
        })
        .collect();
    EffectModel { moved }
}
