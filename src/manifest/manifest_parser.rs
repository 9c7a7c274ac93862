//! Parser for target manifest files
//!
//! A manifest bundles a catalog snapshot with the targets to resolve:
//!
//! ```xml
//! <TargetManifest>
//!   <PropertyGroup>
//!     <DefaultDatabase>bank</DefaultDatabase>
//!   </PropertyGroup>
//!   <Catalog>
//!     <Database Id="1" Name="bank" />
//!     <Table Id="51" Name="accounts" ParentId="1" />
//!   </Catalog>
//!   <Targets>
//!     <Database Name="finance" />
//!     <Table Pattern="bank.accounts" />
//!   </Targets>
//! </TargetManifest>
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use roxmltree::{Document, Node};

use crate::catalog::{Descriptor, DescriptorId};
use crate::error::TargetError;
use crate::parser::{parse_database_name, parse_table_pattern};
use crate::targets::TargetList;

/// Contents of a target manifest
#[derive(Debug, Clone)]
pub struct TargetManifest {
    /// Manifest name (file stem)
    pub name: String,
    /// Database used to qualify unqualified patterns; empty when unset
    pub default_database: String,
    /// Catalog snapshot in document order
    pub descriptors: Vec<Descriptor>,
    /// Targets declared in the manifest
    pub targets: TargetList,
    /// Path the manifest was read from
    pub path: PathBuf,
}

/// Parse a target manifest file
pub fn parse_manifest(path: &Path) -> Result<TargetManifest> {
    let content = std::fs::read_to_string(path).map_err(|e| TargetError::ManifestReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let doc = Document::parse(&content).map_err(|e| TargetError::ManifestParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("manifest")
        .to_string();

    let root = doc.root_element();

    let default_database = find_property_value(&root, "DefaultDatabase")
        .map(|v| v.trim().to_string())
        .unwrap_or_default();

    let descriptors = match find_child(&root, "Catalog") {
        Some(catalog) => parse_catalog(&catalog)?,
        None => Vec::new(),
    };

    let targets = match find_child(&root, "Targets") {
        Some(targets) => parse_targets(&targets)?,
        None => TargetList::new(),
    };

    Ok(TargetManifest {
        name,
        default_database,
        descriptors,
        targets,
        path: path.to_path_buf(),
    })
}

fn parse_catalog(catalog: &Node) -> Result<Vec<Descriptor>, TargetError> {
    let mut descriptors = Vec::new();
    let mut seen_ids: HashSet<DescriptorId> = HashSet::new();

    for node in catalog.children().filter(|n| n.is_element()) {
        let descriptor = match node.tag_name().name() {
            "Database" => Descriptor::database(
                required_id(&node, "Id")?,
                required_attribute(&node, "Name")?,
            ),
            "Table" => Descriptor::table(
                required_id(&node, "Id")?,
                required_attribute(&node, "Name")?,
                required_id(&node, "ParentId")?,
            ),
            other => {
                return Err(TargetError::InvalidManifestFormat {
                    message: format!("unknown catalog element <{}>", other),
                })
            }
        };

        if !seen_ids.insert(descriptor.id()) {
            return Err(TargetError::InvalidManifestFormat {
                message: format!("duplicate descriptor id {}", descriptor.id()),
            });
        }
        descriptors.push(descriptor);
    }

    Ok(descriptors)
}

fn parse_targets(targets: &Node) -> Result<TargetList, TargetError> {
    let mut list = TargetList::new();

    for node in targets.children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "Database" => {
                let name = required_attribute(&node, "Name")?;
                list.add_database(parse_database_name(name)?);
            }
            "Table" => {
                let pattern = required_attribute(&node, "Pattern")?;
                list.add_table_pattern(parse_table_pattern(pattern)?);
            }
            other => {
                return Err(TargetError::InvalidManifestFormat {
                    message: format!("unknown target element <{}>", other),
                })
            }
        }
    }

    Ok(list)
}

fn find_property_value(root: &Node, property_name: &str) -> Option<String> {
    root.descendants()
        .filter(|n| n.tag_name().name() == "PropertyGroup")
        .flat_map(|group| group.children())
        .find(|n| n.tag_name().name() == property_name)
        .and_then(|n| n.text())
        .map(|s| s.to_string())
}

fn find_child<'a, 'input>(node: &Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.tag_name().name() == name)
}

fn required_attribute<'a>(node: &Node<'a, '_>, attribute: &str) -> Result<&'a str, TargetError> {
    node.attribute(attribute)
        .ok_or_else(|| TargetError::InvalidManifestFormat {
            message: format!(
                "<{}> is missing the {} attribute",
                node.tag_name().name(),
                attribute
            ),
        })
}

fn required_id(node: &Node, attribute: &str) -> Result<u32, TargetError> {
    let value = required_attribute(node, attribute)?;
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| TargetError::InvalidManifestFormat {
            message: format!(
                "<{}> has a non-numeric {} \"{}\"",
                node.tag_name().name(),
                attribute,
                value
            ),
        })
}
