#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use cube_macros::{Catalog, effect_model};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_macro-catalog"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    if !output.status.success() {
        bail!(
            "{cmd:?} exited with {:?}; stderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(output)
}

/// Writes raw learned-macro file contents for `version` under `dir`.
pub fn write_learned_fixture(dir: &Path, version: &str, contents: &str) -> Result<PathBuf> {
    let path = cube_macros::learned_macros_path(dir, version);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write fixture at {}", path.display()))?;
    Ok(path)
}

// The alignment invariant every builder must uphold.
pub fn assert_aligned(catalog: &Catalog) {
    assert_eq!(
        catalog.macros().len(),
        catalog.models().len(),
        "{} catalog lists out of step",
        catalog.kind().as_str()
    );
    for (idx, (sequence, model)) in catalog.entries().enumerate() {
        assert_eq!(
            *model,
            effect_model(sequence),
            "{} catalog model {idx} does not match its macro",
            catalog.kind().as_str()
        );
    }
}
