//! Macro-action catalogs for the cube domain.
//!
//! The crate builds four named catalogs of macro-actions (primitive moves,
//! expert formulas, learned sequences loaded from disk, and seeded random
//! formulas) and precomputes the effect model of every macro against the
//! solved cube. `CatalogStore` holds the set; `SharedRng` is the generator
//! random catalogs borrow without disturbing.

pub mod catalog;
pub mod config;
pub mod cube;
pub mod error;
pub mod formula;
pub mod rng;

pub use catalog::{
    Catalog, CatalogKind, CatalogStore, CatalogSummary, Provenance, effect_model,
    expert_catalog, learned_macros_path, load_learned_macros, primitive_catalog, random_catalog,
    write_learned_macros,
};
pub use config::{CatalogConfig, ConfigOverrides};
pub use cube::{Cube, EffectModel, Move, MoveSequence, summarize_effects};
pub use error::{CatalogError, DomainError, FormulaError};
pub use formula::{Formula, Term, random_formula, simplify, variations};
pub use rng::{ReseedGuard, SharedRng};
