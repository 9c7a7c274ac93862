//! Text and XML reports of resolved targets

use std::collections::HashMap;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::catalog::{Descriptor, DescriptorId};
use crate::ResolvedTargets;

/// Render the human-readable report.
pub fn render_text(resolved: &ResolvedTargets) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Resolved Targets: {} ===\n", resolved.name));
    if !resolved.default_database.is_empty() {
        out.push_str(&format!("Default database: {}\n", resolved.default_database));
    }
    out.push('\n');

    let databases: Vec<_> = resolved.databases().collect();
    out.push_str(&format!("Databases ({}):\n", databases.len()));
    if databases.is_empty() {
        out.push_str("  (none)\n");
    }
    for db in &databases {
        out.push_str(&format!("  {} (id {})\n", db.name, db.id));
    }
    out.push('\n');

    let parent_names: HashMap<DescriptorId, &str> = databases
        .iter()
        .map(|db| (db.id, db.name.as_str()))
        .collect();

    let tables: Vec<_> = resolved.tables().collect();
    out.push_str(&format!("Tables ({}):\n", tables.len()));
    if tables.is_empty() {
        out.push_str("  (none)\n");
    }
    for table in &tables {
        let parent = parent_names.get(&table.parent_id).copied().unwrap_or("?");
        out.push_str(&format!("  {}.{} (id {})\n", parent, table.name, table.id));
    }

    out
}

/// Print the report to stdout
pub fn print_report(resolved: &ResolvedTargets) {
    print!("{}", render_text(resolved));
}

/// Write the resolved descriptors as XML, in result order.
pub fn write_report_xml<W: Write>(writer: W, resolved: &ResolvedTargets) -> anyhow::Result<()> {
    let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("ResolvedTargets");
    root.push_attribute(("Name", resolved.name.as_str()));
    if !resolved.default_database.is_empty() {
        root.push_attribute(("DefaultDatabase", resolved.default_database.as_str()));
    }
    xml_writer.write_event(Event::Start(root))?;

    for desc in &resolved.descriptors {
        let id = desc.id().to_string();
        let mut elem = BytesStart::new(desc.kind().as_str());
        elem.push_attribute(("Id", id.as_str()));
        elem.push_attribute(("Name", desc.name()));
        if let Descriptor::Table(table) = desc {
            let parent_id = table.parent_id.to_string();
            elem.push_attribute(("ParentId", parent_id.as_str()));
        }
        xml_writer.write_event(Event::Empty(elem))?;
    }

    xml_writer.write_event(Event::End(BytesEnd::new("ResolvedTargets")))?;

    Ok(())
}
