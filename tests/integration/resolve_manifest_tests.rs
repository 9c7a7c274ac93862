//! Manifest resolution tests
//!
//! These tests run the full pipeline: manifest file -> targets -> resolution
//! -> report.

use pretty_assertions::assert_eq;

use catalog_targets::report::{render_text, write_report_xml};
use catalog_targets::{resolve_manifest, TargetError};

use crate::common::{TestContext, BANK_CATALOG};

#[test]
fn test_resolve_mixed_targets() {
    let ctx = TestContext::with_manifest(
        "",
        BANK_CATALOG,
        r#"
    <Database Name="finance" />
    <Table Pattern="bank.accounts" />"#,
    );

    let labels = ctx.resolve_labels(ctx.options());
    assert_eq!(
        labels,
        vec![
            "Database:bank",
            "Database:finance",
            "Table:accounts",
            "Table:ledger"
        ]
    );
}

#[test]
fn test_manifest_default_database_qualifies_patterns() {
    let ctx = TestContext::with_manifest("bank", BANK_CATALOG, r#"<Table Pattern="payments" />"#);
    let labels = ctx.resolve_labels(ctx.options());
    assert_eq!(labels, vec!["Database:bank", "Table:payments"]);
}

const SALES_CATALOG: &str = r#"
    <Database Id="1" Name="Sales Data" />
    <Table Id="51" Name="orders" ParentId="1" />
    <Table Id="52" Name="returns" ParentId="1" />"#;

#[test]
fn test_bracketed_manifest_default_database() {
    let ctx = TestContext::with_manifest("[Sales Data]", SALES_CATALOG, r#"<Table Pattern="orders" />"#);
    let labels = ctx.resolve_labels(ctx.options());
    assert_eq!(labels, vec!["Database:Sales Data", "Table:orders"]);
}

#[test]
fn test_quoted_command_line_default_database() {
    let ctx = TestContext::with_manifest("", SALES_CATALOG, "");
    let mut options = ctx.options();
    options.table_patterns = vec!["returns".to_string()];
    options.default_database = Some("\"sales data\"".to_string());

    let resolved = resolve_manifest(options).unwrap();
    assert_eq!(resolved.default_database, "sales data");
    assert_eq!(resolved.tables().map(|t| t.name.as_str()).collect::<Vec<_>>(), vec!["returns"]);
}

#[test]
fn test_malformed_default_database_fails() {
    let ctx = TestContext::with_manifest("", SALES_CATALOG, r#"<Table Pattern="orders" />"#);
    let mut options = ctx.options();
    options.default_database = Some("sales.data".to_string());
    let err = resolve_manifest(options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TargetError>(),
        Some(TargetError::PatternSyntaxError { .. })
    ));
}

#[test]
fn test_command_line_default_database_overrides_manifest() {
    let ctx = TestContext::with_manifest("bank", BANK_CATALOG, r#"<Table Pattern="*" />"#);
    let mut options = ctx.options();
    options.default_database = Some("finance".to_string());

    let labels = ctx.resolve_labels(options);
    assert_eq!(labels, vec!["Database:finance", "Table:ledger"]);
}

#[test]
fn test_command_line_targets_extend_manifest() {
    let ctx = TestContext::with_manifest("", BANK_CATALOG, r#"<Table Pattern="bank.payments" />"#);
    let mut options = ctx.options();
    options.databases = vec!["finance".to_string()];
    options.table_patterns = vec!["bank.accounts".to_string()];

    let labels = ctx.resolve_labels(options);
    assert_eq!(
        labels,
        vec![
            "Database:bank",
            "Database:finance",
            "Table:accounts",
            "Table:payments",
            "Table:ledger"
        ]
    );
}

#[test]
fn test_unqualified_pattern_without_default_fails() {
    let ctx = TestContext::with_manifest("", BANK_CATALOG, r#"<Table Pattern="accounts" />"#);
    let err = resolve_manifest(ctx.options()).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<TargetError>(),
            Some(TargetError::UnqualifiedPatternError { pattern }) if pattern == "accounts"
        ),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_orphaned_table_fails_whole_resolution() {
    let catalog = format!(
        "{}\n    <Table Id=\"90\" Name=\"ghost\" ParentId=\"77\" />",
        BANK_CATALOG
    );
    let ctx = TestContext::with_manifest("", &catalog, r#"<Database Name="finance" />"#);
    let err = resolve_manifest(ctx.options()).unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<TargetError>(),
            Some(TargetError::OrphanedTableError { table, .. }) if table == "ghost"
        ),
        "unexpected error: {:?}",
        err
    );
}

#[test]
fn test_bad_command_line_pattern_fails() {
    let ctx = TestContext::with_manifest("", BANK_CATALOG, "");
    let mut options = ctx.options();
    options.table_patterns = vec!["bank..accounts".to_string()];
    let err = resolve_manifest(options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TargetError>(),
        Some(TargetError::PatternSyntaxError { .. })
    ));
}

#[test]
fn test_resolution_is_repeatable() {
    let ctx = TestContext::with_manifest(
        "bank",
        BANK_CATALOG,
        r#"
    <Table Pattern="accounts" />
    <Table Pattern="finance.*" />"#,
    );
    let first = resolve_manifest(ctx.options()).unwrap();
    let second = resolve_manifest(ctx.options()).unwrap();
    assert_eq!(first.descriptors, second.descriptors);
}

#[test]
fn test_reports_from_resolved_manifest() {
    let ctx = TestContext::with_manifest(
        "",
        BANK_CATALOG,
        r#"
    <Database Name="finance" />
    <Table Pattern="bank.accounts" />"#,
    );
    let resolved = resolve_manifest(ctx.options()).unwrap();
    assert_eq!(resolved.name, "manifest");
    assert_eq!(resolved.databases().count(), 2);
    assert_eq!(resolved.tables().count(), 2);

    let text = render_text(&resolved);
    assert!(text.contains("bank.accounts (id 51)"));
    assert!(text.contains("finance.ledger (id 53)"));
    assert!(!text.contains("payments"));

    let xml_path = ctx.output_path("resolved.xml");
    let file = std::fs::File::create(&xml_path).unwrap();
    write_report_xml(file, &resolved).unwrap();

    let xml = std::fs::read_to_string(&xml_path).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let names: Vec<&str> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element())
        .filter_map(|n| n.attribute("Name"))
        .collect();
    assert_eq!(names, vec!["bank", "finance", "accounts", "ledger"]);
}
