//! Primitive, expert and seeded random catalog builders.

use super::{Catalog, CatalogKind, Provenance};
use crate::cube::{Move, MoveSequence};
use crate::error::CatalogError;
use crate::formula::{Formula, expert::alg_formulas, random_formula, simplify, variations};
use crate::rng::SharedRng;
use tracing::debug;

/// One single-move macro per primitive move, in `Move::ALL` order.
pub fn primitive_catalog() -> Catalog {
    let macros = Move::ALL.into_iter().map(MoveSequence::single).collect();
    let formulas = Move::ALL.into_iter().map(Formula::single).collect();
    let catalog = Catalog::from_macros(CatalogKind::Primitive, macros).with_formulas(formulas);
    debug!(macros = catalog.len(), "built primitive catalog");
    catalog
}

/// Every variation of every expert formula, formula by formula.
pub fn expert_catalog() -> Result<Catalog, CatalogError> {
    let formulas = alg_formulas()?;
    let macros = flatten_variations(&formulas);
    let catalog = Catalog::from_macros(CatalogKind::Expert, macros).with_formulas(formulas);
    debug!(
        formulas = catalog.formulas().len(),
        macros = catalog.len(),
        "built expert catalog"
    );
    Ok(catalog)
}

/// Reproducible random catalog shaped like `templates`.
///
/// One random formula is drawn per template, matching its length, from `rng`
/// reseeded with `seed`. `rng` is back in its prior state when this returns,
/// including on error. The stored formulas are the raw draws; the macros are
/// the variations of their simplified forms.
pub fn random_catalog(
    seed: u64,
    templates: &[Formula],
    rng: &mut SharedRng,
) -> Result<Catalog, CatalogError> {
    let random_formulas = {
        let mut seeded = rng.reseeded(seed);
        templates
            .iter()
            .map(|template| random_formula(template.len(), &mut *seeded))
            .collect::<Result<Vec<_>, _>>()?
    };

    let simplified: Vec<Formula> = random_formulas.iter().map(simplify).collect();
    let macros = flatten_variations(&simplified);
    let catalog = Catalog::from_macros(CatalogKind::Random, macros)
        .with_formulas(random_formulas)
        .with_provenance(Provenance::Seeded { seed });
    debug!(seed, macros = catalog.len(), "generated random catalog");
    Ok(catalog)
}

fn flatten_variations(formulas: &[Formula]) -> Vec<MoveSequence> {
    formulas.iter().flat_map(variations).collect()
}
