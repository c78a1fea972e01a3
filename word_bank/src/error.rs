//! Error types for the word bank.

use thiserror::Error;

/// Errors surfaced by dataset loading and configuration parsing.
///
/// Per-file loading failures are reported and skipped by the directory
/// loader; these variants are what the skipped-file reports carry, so
/// "unreadable" (I/O, CSV) stays distinguishable from "unusable" (no
/// identifier column, no rows).
#[derive(Debug, Error)]
pub enum WordBankError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("table '{table}' has no '{column}' column")]
    MissingNameColumn { table: String, column: &'static str },

    #[error("table '{table}' has no rows")]
    EmptyTable { table: String },
}
