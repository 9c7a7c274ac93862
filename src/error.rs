//! Error types for catalog-targets

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::DescriptorId;

/// Errors that can occur while resolving targets against a catalog snapshot
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("table pattern \"{pattern}\" has no database qualifier and no default database is set")]
    UnqualifiedPatternError { pattern: String },

    #[error("unknown table pattern kind: \"{pattern}\"")]
    UnknownPatternKindError { pattern: String },

    #[error("table \"{table}\" references unknown parent database id {parent_id}")]
    OrphanedTableError {
        table: String,
        parent_id: DescriptorId,
    },

    #[error("invalid target pattern \"{pattern}\": {message}")]
    PatternSyntaxError { pattern: String, message: String },

    #[error("Failed to read manifest file: {path}")]
    ManifestReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest file: {path}")]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid manifest: {message}")]
    InvalidManifestFormat { message: String },
}
