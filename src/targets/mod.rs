//! Target lists and their normalization into lookup structures

mod index;
mod pattern;

pub use index::ResolutionIndex;
pub use pattern::{normalize_table_pattern, NamePart, TablePattern, UnresolvedName};

use crate::error::TargetError;
use crate::parser::parse_table_pattern;

/// The objects a user asked for: whole databases and table patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    /// Databases selected together with all their tables
    pub databases: Vec<String>,
    /// Raw table patterns, not yet qualified
    pub tables: Vec<UnresolvedName>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a target list from database names and pattern text
    /// (`db.table`, `table`, `db.*` or `*`).
    pub fn parse<D, P>(databases: &[D], patterns: &[P]) -> Result<Self, TargetError>
    where
        D: AsRef<str>,
        P: AsRef<str>,
    {
        let tables = patterns
            .iter()
            .map(|p| parse_table_pattern(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            databases: databases.iter().map(|d| d.as_ref().to_string()).collect(),
            tables,
        })
    }

    pub fn add_database(&mut self, database: impl Into<String>) {
        self.databases.push(database.into());
    }

    pub fn add_table_pattern(&mut self, pattern: UnresolvedName) {
        self.tables.push(pattern);
    }

    /// Append another list's targets to this one
    pub fn extend(&mut self, other: TargetList) {
        self.databases.extend(other.databases);
        self.tables.extend(other.tables);
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty() && self.tables.is_empty()
    }
}
