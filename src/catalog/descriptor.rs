//! Catalog descriptor types

use std::fmt;

/// Identifier of a catalog descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptorId(pub u32);

impl fmt::Display for DescriptorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DescriptorId {
    fn from(id: u32) -> Self {
        DescriptorId(id)
    }
}

/// Kind of object a descriptor describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    Database,
    Table,
}

impl DescriptorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptorKind::Database => "Database",
            DescriptorKind::Table => "Table",
        }
    }
}

/// Database descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseDescriptor {
    pub id: DescriptorId,
    pub name: String,
}

/// Table descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    pub id: DescriptorId,
    pub name: String,
    /// Id of the database descriptor that owns this table
    pub parent_id: DescriptorId,
}

/// A catalog metadata entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Database(DatabaseDescriptor),
    Table(TableDescriptor),
}

impl Descriptor {
    pub fn database(id: u32, name: impl Into<String>) -> Self {
        Descriptor::Database(DatabaseDescriptor {
            id: DescriptorId(id),
            name: name.into(),
        })
    }

    pub fn table(id: u32, name: impl Into<String>, parent_id: u32) -> Self {
        Descriptor::Table(TableDescriptor {
            id: DescriptorId(id),
            name: name.into(),
            parent_id: DescriptorId(parent_id),
        })
    }

    pub fn as_database(&self) -> Option<&DatabaseDescriptor> {
        match self {
            Descriptor::Database(db) => Some(db),
            Descriptor::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableDescriptor> {
        match self {
            Descriptor::Table(table) => Some(table),
            Descriptor::Database(_) => None,
        }
    }

    pub fn id(&self) -> DescriptorId {
        match self {
            Descriptor::Database(db) => db.id,
            Descriptor::Table(table) => table.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Descriptor::Database(db) => &db.name,
            Descriptor::Table(table) => &table.name,
        }
    }

    pub fn kind(&self) -> DescriptorKind {
        match self {
            Descriptor::Database(_) => DescriptorKind::Database,
            Descriptor::Table(_) => DescriptorKind::Table,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Database(db) => write!(f, "Database {} (id {})", db.name, db.id),
            Descriptor::Table(t) => write!(
                f,
                "Table {} (id {}, parent {})",
                t.name, t.id, t.parent_id
            ),
        }
    }
}
