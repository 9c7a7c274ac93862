//! Lookup structures built from a target list for one resolution

use std::collections::{HashMap, HashSet};

use crate::names::NormalizedName;

use super::TablePattern;

/// Normalized target lookup tables.
///
/// `wildcard_databases` holds every database whose tables are all selected.
/// `explicit_tables` maps a database to the table names selected inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionIndex {
    pub wildcard_databases: HashSet<NormalizedName>,
    pub explicit_tables: HashMap<NormalizedName, HashSet<NormalizedName>>,
}

impl ResolutionIndex {
    /// Build the index from explicit database targets and classified patterns
    pub fn build<S: AsRef<str>>(databases: &[S], patterns: &[TablePattern]) -> Self {
        let mut index = ResolutionIndex::default();

        for db in databases {
            index
                .wildcard_databases
                .insert(NormalizedName::new(db.as_ref()));
        }

        for pattern in patterns {
            match pattern {
                TablePattern::AllTablesInDatabase { database } => {
                    index.wildcard_databases.insert(NormalizedName::new(database));
                }
                TablePattern::ExplicitTable { database, table } => {
                    index
                        .explicit_tables
                        .entry(NormalizedName::new(database))
                        .or_default()
                        .insert(NormalizedName::new(table));
                }
            }
        }

        index
    }

    /// Whether every table of `database` is selected
    #[inline]
    pub fn is_wildcard(&self, database: &NormalizedName) -> bool {
        self.wildcard_databases.contains(database)
    }

    /// Whether at least one table of `database` was named explicitly
    #[inline]
    pub fn has_explicit_tables(&self, database: &NormalizedName) -> bool {
        self.explicit_tables.contains_key(database)
    }

    /// Whether `table` inside `database` was named explicitly
    pub fn is_explicit_table(&self, database: &NormalizedName, table: &NormalizedName) -> bool {
        self.explicit_tables
            .get(database)
            .is_some_and(|tables| tables.contains(table))
    }
}
