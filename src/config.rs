//! Catalog configuration.
//!
//! Each setting resolves from an explicit override (CLI flag), then its
//! environment variable, then the built-in default.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_DIR: &str = "results/macros/cube";
pub const DEFAULT_LEARNED_VERSION: &str = "0.4";
pub const DEFAULT_RANDOM_SEED: u64 = 0;

const ENV_RESULTS_DIR: &str = "CUBE_RESULTS_DIR";
const ENV_LEARNED_VERSION: &str = "CUBE_LEARNED_VERSION";
const ENV_RANDOM_SEED: &str = "CUBE_RANDOM_SEED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub results_dir: PathBuf,
    pub learned_version: String,
    pub random_seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            learned_version: DEFAULT_LEARNED_VERSION.to_string(),
            random_seed: DEFAULT_RANDOM_SEED,
        }
    }
}

/// Explicit values that take precedence over the environment.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub results_dir: Option<PathBuf>,
    pub learned_version: Option<String>,
    pub random_seed: Option<u64>,
}

impl CatalogConfig {
    pub fn from_env(overrides: ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, env_non_empty)
    }

    /// Resolution with an injectable environment lookup.
    pub fn resolve(
        overrides: ConfigOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let results_dir = overrides
            .results_dir
            .or_else(|| lookup(ENV_RESULTS_DIR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR));

        let learned_version = overrides
            .learned_version
            .or_else(|| lookup(ENV_LEARNED_VERSION))
            .unwrap_or_else(|| DEFAULT_LEARNED_VERSION.to_string());

        let random_seed = match overrides.random_seed {
            Some(seed) => seed,
            None => match lookup(ENV_RANDOM_SEED) {
                Some(raw) => raw.trim().parse().with_context(|| {
                    format!("{ENV_RANDOM_SEED} must be an unsigned integer, got '{raw}'")
                })?,
                None => DEFAULT_RANDOM_SEED,
            },
        };

        Ok(Self {
            results_dir,
            learned_version,
            random_seed,
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_without_env() {
        let config = CatalogConfig::resolve(ConfigOverrides::default(), lookup_from(&[])).unwrap();
        assert_eq!(config.learned_version, DEFAULT_LEARNED_VERSION);
        assert_eq!(config.random_seed, DEFAULT_RANDOM_SEED);
        assert_eq!(config.results_dir, PathBuf::from(DEFAULT_RESULTS_DIR));
    }

    #[test]
    fn env_values_are_used_and_overrides_win() {
        let lookup = lookup_from(&[
            (ENV_RESULTS_DIR, "/tmp/results"),
            (ENV_LEARNED_VERSION, "0.7"),
            (ENV_RANDOM_SEED, " 12 "),
        ]);
        let config = CatalogConfig::resolve(ConfigOverrides::default(), &lookup).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/tmp/results"));
        assert_eq!(config.learned_version, "0.7");
        assert_eq!(config.random_seed, 12);

        let overrides = ConfigOverrides {
            results_dir: None,
            learned_version: Some("1.0".to_string()),
            random_seed: Some(5),
        };
        let config = CatalogConfig::resolve(overrides, &lookup).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("/tmp/results"));
        assert_eq!(config.learned_version, "1.0");
        assert_eq!(config.random_seed, 5);
    }

    #[test]
    fn malformed_seed_is_rejected() {
        let err = CatalogConfig::resolve(
            ConfigOverrides::default(),
            lookup_from(&[(ENV_RANDOM_SEED, "minus-one")]),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains(ENV_RANDOM_SEED));
    }
}
