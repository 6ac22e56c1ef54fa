//! Error taxonomy for catalog construction.
//!
//! A missing learned-macro file is deliberately absent from this list: it is
//! recovered in place (warning plus empty catalog) and reported through the
//! catalog's provenance instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the cube domain when text cannot be read as moves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown move '{0}'; expected one of U D L R F B")]
    UnknownMove(String),
}

/// Failures raised by the formula algebra.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("cannot synthesize a random formula of length 0")]
    ZeroLength,
    #[error("invalid formula token '{0}'")]
    InvalidToken(String),
    #[error("quarter-turn count {0} is not in 1..=3")]
    InvalidTurns(u8),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown catalog '{0}'; expected one of primitive expert learned random")]
    UnknownCatalog(String),
    /// The learned-macro file exists but could not be read.
    #[error("reading learned macros from {}", path.display())]
    PersistedCatalogIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The learned-macro file was read but is not a list of move sequences.
    #[error("learned macros at {} are corrupt", path.display())]
    CorruptPersistedCatalog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("writing learned macros to {}", path.display())]
    PersistWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("formula synthesis failed")]
    FormulaSynthesis(#[from] FormulaError),
}
