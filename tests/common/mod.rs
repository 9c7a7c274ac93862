//! Common test utilities for catalog-targets tests

use std::path::PathBuf;

use tempfile::TempDir;

/// The catalog used by most integration tests:
/// bank(1): accounts, payments; finance(2): ledger
pub const BANK_CATALOG: &str = r#"
    <Database Id="1" Name="bank" />
    <Table Id="51" Name="accounts" ParentId="1" />
    <Table Id="52" Name="payments" ParentId="1" />
    <Database Id="2" Name="finance" />
    <Table Id="53" Name="ledger" ParentId="2" />"#;

/// Test context with temporary directory for isolated test execution
pub struct TestContext {
    /// Owns the manifest and output files; removed when the context drops
    temp_dir: TempDir,
    pub manifest_path: PathBuf,
}

impl TestContext {
    /// Create a context whose manifest has the given catalog and targets XML
    pub fn with_manifest(default_database: &str, catalog: &str, targets: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let manifest_path = temp_dir.path().join("manifest.xml");

        let content = format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<TargetManifest>
  <PropertyGroup>
    <DefaultDatabase>{}</DefaultDatabase>
  </PropertyGroup>
  <Catalog>{}
  </Catalog>
  <Targets>{}
  </Targets>
</TargetManifest>"#,
            default_database, catalog, targets
        );
        std::fs::write(&manifest_path, content).expect("Failed to write manifest");

        Self {
            temp_dir,
            manifest_path,
        }
    }

    /// Options resolving this context's manifest with no extra targets
    pub fn options(&self) -> catalog_targets::ResolveOptions {
        catalog_targets::ResolveOptions {
            manifest_path: self.manifest_path.clone(),
            ..Default::default()
        }
    }

    /// Resolve and return `Kind:name` labels, panicking if resolution fails.
    pub fn resolve_labels(&self, options: catalog_targets::ResolveOptions) -> Vec<String> {
        let resolved = catalog_targets::resolve_manifest(options)
            .unwrap_or_else(|e| panic!("Resolution failed: {:?}", e));
        resolved
            .descriptors
            .iter()
            .map(|d| format!("{}:{}", d.kind().as_str(), d.name()))
            .collect()
    }

    /// Path for an output file inside the temp directory
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}
