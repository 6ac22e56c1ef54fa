//! Persisted learned macro-actions.
//!
//! Learned macros are stored as concrete move sequences (a JSON array of
//! arrays of move letters) at `<results_dir>/v<version>-clean_skills.json`.
//! An absent file is the one tolerated failure: it is logged and yields an
//! empty catalog. Every other read or parse failure is returned to the caller.

use super::{Catalog, CatalogKind, Provenance};
use crate::cube::MoveSequence;
use crate::error::CatalogError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CLEAN_SKILLS_SUFFIX: &str = "-clean_skills.json";

pub fn learned_macros_path(results_dir: &Path, version: &str) -> PathBuf {
    results_dir.join(format!("v{version}{CLEAN_SKILLS_SUFFIX}"))
}

pub fn load_learned_macros(results_dir: &Path, version: &str) -> Result<Catalog, CatalogError> {
    let path = learned_macros_path(results_dir, version);
    let macros = match fs::read(&path) {
        Ok(raw) => Some(serde_json::from_slice::<Vec<MoveSequence>>(&raw).map_err(|source| {
            CatalogError::CorruptPersistedCatalog {
                path: path.clone(),
                source,
            }
        })?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "failed to load learned macros; file not found");
            None
        }
        Err(source) => return Err(CatalogError::PersistedCatalogIo { path, source }),
    };

    let found = macros.is_some();
    let catalog = Catalog::from_macros(CatalogKind::Learned, macros.unwrap_or_default())
        .with_provenance(Provenance::Persisted {
            version: version.to_string(),
            path,
            found,
        });
    debug!(version, found, macros = catalog.len(), "loaded learned catalog");
    Ok(catalog)
}

/// Writes `macros` in the learned-macro format, creating `results_dir` if needed.
pub fn write_learned_macros(
    results_dir: &Path,
    version: &str,
    macros: &[MoveSequence],
) -> Result<PathBuf, CatalogError> {
    let path = learned_macros_path(results_dir, version);
    let write = || -> io::Result<()> {
        fs::create_dir_all(results_dir)?;
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, macros).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()
    };
    write().map_err(|source| CatalogError::PersistWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
