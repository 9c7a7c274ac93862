//! catalog-targets: resolve backup/restore targets against a catalog snapshot
//!
//! Given a snapshot of database and table descriptors and a list of targets
//! (`DATABASE finance`, `TABLE bank.accounts`, `TABLE bank.*`), this library
//! computes exactly which descriptors an operation must act on.

pub mod catalog;
pub mod error;
pub mod manifest;
pub mod names;
pub mod parser;
pub mod report;
pub mod resolve;
pub mod targets;

use std::path::PathBuf;

use anyhow::Result;

pub use catalog::{Descriptor, DescriptorId};
pub use error::TargetError;
pub use resolve::descriptors_matching_targets;
pub use targets::TargetList;

/// Options for resolving a manifest
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Path to the manifest file
    pub manifest_path: PathBuf,
    /// Extra database targets, added to the manifest's own
    pub databases: Vec<String>,
    /// Extra table patterns, added to the manifest's own
    pub table_patterns: Vec<String>,
    /// Overrides the manifest's DefaultDatabase property
    pub default_database: Option<String>,
    /// Enable verbose output
    pub verbose: bool,
}

/// Outcome of resolving a manifest
#[derive(Debug, Clone)]
pub struct ResolvedTargets {
    /// Manifest name
    pub name: String,
    /// Default database used for qualification (empty if none)
    pub default_database: String,
    /// Selected descriptors: databases first, then tables
    pub descriptors: Vec<Descriptor>,
}

impl ResolvedTargets {
    pub fn databases(&self) -> impl Iterator<Item = &catalog::DatabaseDescriptor> {
        self.descriptors.iter().filter_map(|d| d.as_database())
    }

    pub fn tables(&self) -> impl Iterator<Item = &catalog::TableDescriptor> {
        self.descriptors.iter().filter_map(|d| d.as_table())
    }
}

/// Load a manifest and resolve its targets against its catalog
pub fn resolve_manifest(options: ResolveOptions) -> Result<ResolvedTargets> {
    if options.verbose {
        println!("Loading manifest: {}", options.manifest_path.display());
    }

    // Step 1: Parse the manifest file
    let manifest = manifest::parse_manifest(&options.manifest_path)?;

    if options.verbose {
        println!("Found {} catalog descriptors", manifest.descriptors.len());
    }

    // Step 2: Merge command-line targets into the manifest's targets
    let mut targets = manifest.targets;
    for db in &options.databases {
        targets.add_database(parser::parse_database_name(db)?);
    }
    for pattern in &options.table_patterns {
        targets.add_table_pattern(parser::parse_table_pattern(pattern)?);
    }

    let default_database = match options.default_database.unwrap_or(manifest.default_database) {
        db if db.trim().is_empty() => String::new(),
        db => parser::parse_database_name(&db)?,
    };

    if options.verbose {
        println!(
            "Resolving {} database targets and {} table patterns",
            targets.databases.len(),
            targets.tables.len()
        );
        if !default_database.is_empty() {
            println!("Default database: {}", default_database);
        }
    }

    // Step 3: Resolve
    let selected =
        descriptors_matching_targets(&default_database, &manifest.descriptors, &targets)?;

    let resolved = ResolvedTargets {
        name: manifest.name,
        default_database,
        descriptors: selected.into_iter().cloned().collect(),
    };

    if options.verbose {
        println!(
            "Resolved {} databases and {} tables",
            resolved.databases().count(),
            resolved.tables().count()
        );
    }

    Ok(resolved)
}
