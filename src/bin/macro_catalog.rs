//! Builds the macro-action catalogs and prints them as JSON.
//!
//! Usage:
//!   macro-catalog summary
//!   macro-catalog --seed 7 show random
//!   macro-catalog effect "R U R R R U U U"
//!   macro-catalog export expert --to-version 0.5
//!
//! JSON goes to stdout; tracing output (`RUST_LOG`, default `warn`) goes to
//! stderr, including the warning for a missing learned-macro file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cube_macros::{
    CatalogConfig, CatalogKind, CatalogStore, ConfigOverrides, EffectModel, MoveSequence,
    SharedRng, effect_model, write_learned_macros,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "macro-catalog")]
#[command(about = "Build and inspect cube macro-action catalogs")]
struct Cli {
    /// Directory holding learned-macro files (or set CUBE_RESULTS_DIR).
    #[arg(long, global = true)]
    results_dir: Option<PathBuf>,
    /// Learned-macro version to load (or set CUBE_LEARNED_VERSION).
    #[arg(long, global = true)]
    learned_version: Option<String>,
    /// Seed for the random catalog (or set CUBE_RANDOM_SEED).
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print macro counts, formulas and provenance for every catalog.
    Summary,
    /// Print one JSON record per macro in a catalog.
    Show {
        #[arg(value_enum)]
        catalog: CatalogKind,
    },
    /// Print the effect model of a space-separated move sequence.
    Effect { moves: String },
    /// Write a catalog's macros as a learned-macro file under the results directory.
    Export {
        #[arg(value_enum)]
        catalog: CatalogKind,
        #[arg(long)]
        to_version: String,
    },
}

#[derive(Serialize)]
struct MacroRecord<'a> {
    catalog: CatalogKind,
    index: usize,
    moves: String,
    length: usize,
    effect_size: usize,
    effect: &'a EffectModel,
}

#[derive(Serialize)]
struct ExportRecord {
    catalog: CatalogKind,
    macros: usize,
    path: PathBuf,
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        results_dir: cli.results_dir,
        learned_version: cli.learned_version,
        random_seed: cli.seed,
    };

    match cli.command {
        Command::Effect { moves } => print_effect(&moves),
        command => {
            let config = CatalogConfig::from_env(overrides)?;
            let mut rng = SharedRng::from_entropy();
            let store =
                CatalogStore::initialize(&config, &mut rng).context("building catalogs")?;
            run_catalog_command(command, &store)
        }
    }
}

fn print_effect(moves: &str) -> Result<()> {
    let sequence: MoveSequence = moves
        .parse()
        .with_context(|| format!("parsing move sequence '{moves}'"))?;
    println!("{}", serde_json::to_string(&effect_model(&sequence))?);
    Ok(())
}

fn run_catalog_command(command: Command, store: &CatalogStore) -> Result<()> {
    match command {
        Command::Summary => {
            println!("{}", serde_json::to_string_pretty(&store.summary())?);
        }
        Command::Show { catalog: kind } => {
            for (index, (sequence, model)) in store.get(kind).entries().enumerate() {
                let record = MacroRecord {
                    catalog: kind,
                    index,
                    moves: sequence.to_string(),
                    length: sequence.len(),
                    effect_size: model.len(),
                    effect: model,
                };
                println!("{}", serde_json::to_string(&record)?);
            }
        }
        Command::Export {
            catalog: kind,
            to_version,
        } => {
            let source = store.get(kind);
            let path = write_learned_macros(store.results_dir(), &to_version, source.macros())?;
            let record = ExportRecord {
                catalog: kind,
                macros: source.len(),
                path,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
        Command::Effect { moves } => print_effect(&moves)?,
    }
    Ok(())
}
