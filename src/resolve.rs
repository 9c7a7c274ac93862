//! Match a target list against a catalog descriptor snapshot
//!
//! Resolution runs in two passes over the snapshot. The first selects
//! databases and records every database by id. The second selects tables,
//! looking each parent up by id. A table whose parent is missing from the
//! snapshot fails the whole resolution.

use std::collections::HashMap;

use crate::catalog::{Descriptor, DescriptorId};
use crate::error::TargetError;
use crate::names::NormalizedName;
use crate::targets::{normalize_table_pattern, ResolutionIndex, TargetList};

/// Return the descriptors selected by `targets`.
///
/// A database is selected when it is targeted directly, by `db.*`, or hosts
/// an explicitly targeted table. A table is selected when its database is
/// wholly targeted or the table itself is named. The result lists selected
/// databases first, then selected tables, each in snapshot order.
///
/// `default_database` qualifies patterns written without a database; pass
/// `""` when there is none.
pub fn descriptors_matching_targets<'a>(
    default_database: &str,
    descriptors: &'a [Descriptor],
    targets: &TargetList,
) -> Result<Vec<&'a Descriptor>, TargetError> {
    let patterns = targets
        .tables
        .iter()
        .map(|pattern| normalize_table_pattern(pattern, default_database))
        .collect::<Result<Vec<_>, _>>()?;

    let index = ResolutionIndex::build(&targets.databases, &patterns);

    let mut database_names: HashMap<DescriptorId, NormalizedName> = HashMap::new();
    let mut selected = Vec::new();

    for desc in descriptors {
        if let Some(db) = desc.as_database() {
            let name = NormalizedName::new(&db.name);
            if index.is_wildcard(&name) || index.has_explicit_tables(&name) {
                selected.push(desc);
            }
            database_names.insert(db.id, name);
        }
    }

    for desc in descriptors {
        if let Some(table) = desc.as_table() {
            let Some(db_name) = database_names.get(&table.parent_id) else {
                return Err(TargetError::OrphanedTableError {
                    table: table.name.clone(),
                    parent_id: table.parent_id,
                });
            };

            if index.is_wildcard(db_name)
                || index.is_explicit_table(db_name, &NormalizedName::new(&table.name))
            {
                selected.push(desc);
            }
        }
    }

    Ok(selected)
}
