//! Table pattern classification and default-database qualification

use std::fmt;

use crate::error::TargetError;

/// One dot-separated part of a raw table pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePart {
    Ident(String),
    /// The `*` wildcard
    Star,
}

/// A table pattern as written by the user, before classification.
///
/// Holds the dot-separated parts in source order, e.g. `bank.accounts` is
/// `[Ident("bank"), Ident("accounts")]` and `bank.*` is
/// `[Ident("bank"), Star]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedName {
    pub parts: Vec<NamePart>,
}

impl UnresolvedName {
    pub fn new(parts: Vec<NamePart>) -> Self {
        Self { parts }
    }

    /// `table`
    pub fn table(table: &str) -> Self {
        Self::new(vec![NamePart::Ident(table.to_string())])
    }

    /// `database.table`
    pub fn qualified_table(database: &str, table: &str) -> Self {
        Self::new(vec![
            NamePart::Ident(database.to_string()),
            NamePart::Ident(table.to_string()),
        ])
    }

    /// `database.*`, or `*` when `database` is `None`
    pub fn all_tables(database: Option<&str>) -> Self {
        match database {
            Some(db) => Self::new(vec![NamePart::Ident(db.to_string()), NamePart::Star]),
            None => Self::new(vec![NamePart::Star]),
        }
    }
}

impl fmt::Display for UnresolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match part {
                NamePart::Ident(name) => f.write_str(name)?,
                NamePart::Star => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

/// A classified table pattern with its database qualifier resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePattern {
    /// A single named table
    ExplicitTable { database: String, table: String },
    /// Every table in a database
    AllTablesInDatabase { database: String },
}

impl TablePattern {
    pub fn database(&self) -> &str {
        match self {
            TablePattern::ExplicitTable { database, .. } => database,
            TablePattern::AllTablesInDatabase { database } => database,
        }
    }
}

impl fmt::Display for TablePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TablePattern::ExplicitTable { database, table } => write!(f, "{}.{}", database, table),
            TablePattern::AllTablesInDatabase { database } => write!(f, "{}.*", database),
        }
    }
}

/// Classify a raw pattern and qualify it with `default_database` if needed.
///
/// An empty `default_database` means there is no default.
pub fn normalize_table_pattern(
    pattern: &UnresolvedName,
    default_database: &str,
) -> Result<TablePattern, TargetError> {
    let (database, table) = match pattern.parts.as_slice() {
        [NamePart::Ident(table)] => (None, Some(table)),
        [NamePart::Ident(db), NamePart::Ident(table)] => (Some(db), Some(table)),
        [NamePart::Star] => (None, None),
        [NamePart::Ident(db), NamePart::Star] => (Some(db), None),
        _ => {
            return Err(TargetError::UnknownPatternKindError {
                pattern: pattern.to_string(),
            })
        }
    };

    let database = match database {
        Some(db) => db.clone(),
        None if !default_database.is_empty() => default_database.to_string(),
        None => {
            return Err(TargetError::UnqualifiedPatternError {
                pattern: pattern.to_string(),
            })
        }
    };

    Ok(match table {
        Some(table) => TablePattern::ExplicitTable {
            database,
            table: table.clone(),
        },
        None => TablePattern::AllTablesInDatabase { database },
    })
}
