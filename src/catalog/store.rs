//! Process-wide set of named catalogs.
//!
//! `primitive` and `expert` are built once and never change. `learned` and
//! `random` are replaced wholesale by `reload_learned` and
//! `regenerate_random`; a failed rebuild leaves the previous catalog in place.

use super::{
    Catalog, CatalogKind, Provenance, expert_catalog, load_learned_macros, primitive_catalog,
    random_catalog,
};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::rng::SharedRng;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct CatalogStore {
    results_dir: PathBuf,
    primitive: Catalog,
    expert: Catalog,
    learned: Catalog,
    random: Catalog,
}

/// Counts and provenance for one catalog, as printed by `macro-catalog summary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub name: CatalogKind,
    pub macros: usize,
    pub formulas: Vec<String>,
    pub provenance: Provenance,
}

impl CatalogStore {
    /// Builds every catalog eagerly: the learned set from
    /// `config.learned_version` and the random set from `config.random_seed`.
    pub fn initialize(config: &CatalogConfig, rng: &mut SharedRng) -> Result<Self, CatalogError> {
        let primitive = primitive_catalog();
        let expert = expert_catalog()?;
        let learned = load_learned_macros(&config.results_dir, &config.learned_version)?;
        let random = random_catalog(config.random_seed, expert.formulas(), rng)?;
        Ok(Self {
            results_dir: config.results_dir.clone(),
            primitive,
            expert,
            learned,
            random,
        })
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Primitive => &self.primitive,
            CatalogKind::Expert => &self.expert,
            CatalogKind::Learned => &self.learned,
            CatalogKind::Random => &self.random,
        }
    }

    pub fn primitive(&self) -> &Catalog {
        &self.primitive
    }

    pub fn expert(&self) -> &Catalog {
        &self.expert
    }

    pub fn learned(&self) -> &Catalog {
        &self.learned
    }

    pub fn random(&self) -> &Catalog {
        &self.random
    }

    pub fn reload_learned(&mut self, version: &str) -> Result<&Catalog, CatalogError> {
        self.learned = load_learned_macros(&self.results_dir, version)?;
        Ok(&self.learned)
    }

    /// Regenerates the random catalog from `seed`, shaped like the expert formulas.
    pub fn regenerate_random(
        &mut self,
        seed: u64,
        rng: &mut SharedRng,
    ) -> Result<&Catalog, CatalogError> {
        self.random = random_catalog(seed, self.expert.formulas(), rng)?;
        Ok(&self.random)
    }

    pub fn summary(&self) -> Vec<CatalogSummary> {
        CatalogKind::ALL
            .into_iter()
            .map(|kind| {
                let catalog = self.get(kind);
                CatalogSummary {
                    name: kind,
                    macros: catalog.len(),
                    formulas: catalog.formulas().iter().map(|f| f.to_string()).collect(),
                    provenance: catalog.provenance().clone(),
                }
            })
            .collect()
    }
}
