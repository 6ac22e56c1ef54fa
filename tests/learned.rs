// Learned-macro persistence: missing files degrade, everything else fails loudly.
mod support;

use anyhow::Result;
use cube_macros::{
    CatalogConfig, CatalogError, CatalogKind, CatalogStore, MoveSequence, Provenance, SharedRng,
    expert_catalog, learned_macros_path, load_learned_macros, write_learned_macros,
};
use std::fs;
use tempfile::TempDir;

use support::{assert_aligned, write_learned_fixture};

#[test]
fn missing_file_yields_empty_catalog_with_warning_path() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog = load_learned_macros(dir.path(), "0.4")?;
    assert_eq!(catalog.kind(), CatalogKind::Learned);
    assert!(catalog.macros().is_empty());
    assert!(catalog.models().is_empty());
    assert_eq!(
        catalog.missing_persisted_path(),
        Some(learned_macros_path(dir.path(), "0.4").as_path())
    );
    Ok(())
}

#[test]
fn persisted_macros_load_with_models() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_learned_fixture(
        dir.path(),
        "1.2",
        r#"[["R", "U", "R", "R", "R"], ["F"], []]"#,
    )?;
    let catalog = load_learned_macros(dir.path(), "1.2")?;
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.macros()[0], "R U R R R".parse::<MoveSequence>()?);
    assert!(catalog.models()[2].is_identity());
    assert_eq!(
        catalog.provenance(),
        &Provenance::Persisted {
            version: "1.2".to_string(),
            path,
            found: true,
        }
    );
    assert!(catalog.missing_persisted_path().is_none());
    assert_aligned(&catalog);

    let again = load_learned_macros(dir.path(), "1.2")?;
    assert_eq!(catalog, again);
    Ok(())
}

#[test]
fn corrupt_file_is_fatal() -> Result<()> {
    let dir = TempDir::new()?;
    write_learned_fixture(dir.path(), "bad-move", r#"[["R", "X"]]"#)?;
    write_learned_fixture(dir.path(), "not-json", "(lp0\n.")?;
    write_learned_fixture(dir.path(), "wrong-shape", r#"{"macros": []}"#)?;
    fs::write(learned_macros_path(dir.path(), "binary"), [0x80, 0x03, 0x5d, 0x71])?;

    for version in ["bad-move", "not-json", "wrong-shape", "binary"] {
        let err = load_learned_macros(dir.path(), version).unwrap_err();
        assert!(
            matches!(err, CatalogError::CorruptPersistedCatalog { .. }),
            "{version} should be reported as corrupt, got {err:?}"
        );
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_path_is_not_treated_as_missing() -> Result<()> {
    let dir = TempDir::new()?;
    fs::create_dir(learned_macros_path(dir.path(), "dir"))?;
    let err = load_learned_macros(dir.path(), "dir").unwrap_err();
    assert!(matches!(err, CatalogError::PersistedCatalogIo { .. }));
    Ok(())
}

#[test]
fn exported_catalog_reloads_identically() -> Result<()> {
    let dir = TempDir::new()?;
    let results = dir.path().join("results/macros/cube");
    let expert = expert_catalog()?;
    let path = write_learned_macros(&results, "9.9", expert.macros())?;
    assert!(path.is_file());

    let learned = load_learned_macros(&results, "9.9")?;
    assert_eq!(learned.macros(), expert.macros());
    assert_eq!(learned.models(), expert.models());
    Ok(())
}

#[test]
fn store_reload_replaces_learned_catalog() -> Result<()> {
    let dir = TempDir::new()?;
    let config = CatalogConfig {
        results_dir: dir.path().to_path_buf(),
        ..CatalogConfig::default()
    };
    let mut rng = SharedRng::seed_from_u64(0);
    let mut store = CatalogStore::initialize(&config, &mut rng)?;
    assert!(store.learned().is_empty());

    write_learned_fixture(dir.path(), "0.5", r#"[["U", "U"], ["L", "D"]]"#)?;
    let reloaded = store.reload_learned("0.5")?;
    assert_eq!(reloaded.len(), 2);
    assert_aligned(store.learned());

    write_learned_fixture(dir.path(), "0.6", "[[")?;
    assert!(store.reload_learned("0.6").is_err());
    assert_eq!(store.learned().len(), 2, "failed reload keeps previous catalog");
    Ok(())
}
