//! Macro-action catalogs.
//!
//! A `Catalog` pairs each macro-action with the effect model it produces from
//! the solved cube. The two lists live behind private fields and only grow
//! together, so `models()[i]` is always `effect_model(&macros()[i])`.
//! Builders for the four catalog kinds live in `builders` and `learned`;
//! `CatalogStore` owns one of each for the life of the process.

pub mod builders;
pub mod learned;
pub mod store;

pub use builders::{expert_catalog, primitive_catalog, random_catalog};
pub use learned::{learned_macros_path, load_learned_macros, write_learned_macros};
pub use store::{CatalogStore, CatalogSummary};

use crate::cube::{Cube, EffectModel, MoveSequence, summarize_effects};
use crate::error::CatalogError;
use crate::formula::Formula;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Primitive,
    Expert,
    Learned,
    Random,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Primitive,
        CatalogKind::Expert,
        CatalogKind::Learned,
        CatalogKind::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Primitive => "primitive",
            CatalogKind::Expert => "expert",
            CatalogKind::Learned => "learned",
            CatalogKind::Random => "random",
        }
    }
}

impl TryFrom<&str> for CatalogKind {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "primitive" => Ok(CatalogKind::Primitive),
            "expert" => Ok(CatalogKind::Expert),
            "learned" => Ok(CatalogKind::Learned),
            "random" => Ok(CatalogKind::Random),
            other => Err(CatalogError::UnknownCatalog(other.to_string())),
        }
    }
}

/// Where a catalog's macros came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Provenance {
    /// Fixed definitions compiled into the crate.
    Builtin,
    /// Learned macros read from disk; `found` is false when the file was absent.
    Persisted {
        version: String,
        path: PathBuf,
        found: bool,
    },
    /// Synthesized from the given seed.
    Seeded { seed: u64 },
}

/// Effect of `sequence` applied to a freshly solved cube.
pub fn effect_model(sequence: &MoveSequence) -> EffectModel {
    let start = Cube::solved();
    let end = start.apply(sequence);
    summarize_effects(&start, &end)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    kind: CatalogKind,
    provenance: Provenance,
    formulas: Vec<Formula>,
    macros: Vec<MoveSequence>,
    models: Vec<EffectModel>,
}

impl Catalog {
    pub fn empty(kind: CatalogKind) -> Self {
        Self::from_macros(kind, Vec::new())
    }

    /// Builds a catalog and computes one effect model per macro.
    pub fn from_macros(kind: CatalogKind, macros: Vec<MoveSequence>) -> Self {
        let models = macros.iter().map(effect_model).collect();
        Self {
            kind,
            provenance: Provenance::Builtin,
            formulas: Vec::new(),
            macros,
            models,
        }
    }

    pub(crate) fn with_formulas(mut self, formulas: Vec<Formula>) -> Self {
        self.formulas = formulas;
        self
    }

    pub(crate) fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Appends a macro together with its effect model.
    pub fn push(&mut self, sequence: MoveSequence) {
        self.models.push(effect_model(&sequence));
        self.macros.push(sequence);
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Formulas the macros were expanded from (random formulas before
    /// simplification for seeded catalogs).
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn seed(&self) -> Option<u64> {
        match self.provenance {
            Provenance::Seeded { seed } => Some(seed),
            _ => None,
        }
    }

    /// Path of the learned-macro file that was expected but absent.
    pub fn missing_persisted_path(&self) -> Option<&Path> {
        match &self.provenance {
            Provenance::Persisted {
                path, found: false, ..
            } => Some(path.as_path()),
            _ => None,
        }
    }

    pub fn macros(&self) -> &[MoveSequence] {
        &self.macros
    }

    pub fn models(&self) -> &[EffectModel] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&MoveSequence, &EffectModel)> {
        Some((self.macros.get(index)?, self.models.get(index)?))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&MoveSequence, &EffectModel)> {
        self.macros.iter().zip(self.models.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Move;

    #[test]
    fn push_keeps_models_aligned() {
        let mut catalog = Catalog::empty(CatalogKind::Learned);
        assert!(catalog.is_empty());
        catalog.push("R U R".parse().unwrap());
        catalog.push(MoveSequence::single(Move::F));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.models().len(), 2);
        for (sequence, model) in catalog.entries() {
            assert_eq!(*model, effect_model(sequence));
        }
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn catalog_kind_names_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(CatalogKind::try_from(kind.as_str()).unwrap(), kind);
            assert_eq!(
                <CatalogKind as ValueEnum>::from_str(kind.as_str(), false).unwrap(),
                kind
            );
        }
        assert!(matches!(
            CatalogKind::try_from("bogus"),
            Err(CatalogError::UnknownCatalog(name)) if name == "bogus"
        ));
    }

    #[test]
    fn seed_and_missing_path_follow_provenance() {
        let seeded = Catalog::empty(CatalogKind::Random)
            .with_provenance(Provenance::Seeded { seed: 4 });
        assert_eq!(seeded.seed(), Some(4));
        assert!(seeded.missing_persisted_path().is_none());

        let missing = Catalog::empty(CatalogKind::Learned).with_provenance(Provenance::Persisted {
            version: "9".to_string(),
            path: PathBuf::from("results/v9-clean_skills.json"),
            found: false,
        });
        assert_eq!(
            missing.missing_persisted_path(),
            Some(Path::new("results/v9-clean_skills.json"))
        );
        assert_eq!(missing.seed(), None);
    }

    #[test]
    fn empty_sequence_has_identity_effect() {
        assert!(effect_model(&MoveSequence::default()).is_identity());
    }
}
