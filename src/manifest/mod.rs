//! Target manifest file parsing

mod manifest_parser;

pub use manifest_parser::{parse_manifest, TargetManifest};
