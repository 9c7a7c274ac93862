use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use catalog_targets::parser::{parse_database_name, parse_table_pattern};
use catalog_targets::report::{print_report, write_report_xml};
use catalog_targets::targets::normalize_table_pattern;
use catalog_targets::{resolve_manifest, ResolveOptions};

#[derive(Parser)]
#[command(name = "catalog-targets")]
#[command(author, version, about = "Resolve database and table targets against a catalog snapshot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Xml,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the targets of a manifest against its catalog snapshot
    Resolve {
        /// Path to the manifest file
        #[arg(short, long)]
        manifest: PathBuf,

        /// Additional database target (repeatable)
        #[arg(short, long = "database")]
        databases: Vec<String>,

        /// Additional table pattern: db.table, table, db.* or * (repeatable)
        #[arg(short, long = "table")]
        tables: Vec<String>,

        /// Default database for unqualified patterns (overrides the manifest)
        #[arg(long)]
        default_database: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show how table patterns are classified and qualified
    Check {
        /// Table patterns to check
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Default database for unqualified patterns
        #[arg(long, default_value = "")]
        default_database: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            manifest,
            databases,
            tables,
            default_database,
            format,
            output,
            verbose,
        } => {
            let options = ResolveOptions {
                manifest_path: manifest,
                databases,
                table_patterns: tables,
                default_database,
                verbose,
            };

            let resolved = resolve_manifest(options)?;

            match (format, output) {
                (OutputFormat::Text, None) => print_report(&resolved),
                (OutputFormat::Text, Some(path)) => {
                    std::fs::write(&path, catalog_targets::report::render_text(&resolved))?;
                    if verbose {
                        println!("Wrote report: {}", path.display());
                    }
                }
                (OutputFormat::Xml, None) => {
                    write_report_xml(std::io::stdout().lock(), &resolved)?;
                    println!();
                }
                (OutputFormat::Xml, Some(path)) => {
                    let mut writer = BufWriter::new(File::create(&path)?);
                    write_report_xml(&mut writer, &resolved)?;
                    writer.flush()?;
                    if verbose {
                        println!("Wrote report: {}", path.display());
                    }
                }
            }
        }
        Commands::Check {
            patterns,
            default_database,
        } => {
            let default_database = if default_database.trim().is_empty() {
                String::new()
            } else {
                parse_database_name(&default_database)?
            };
            for text in &patterns {
                let raw = parse_table_pattern(text)?;
                let pattern = normalize_table_pattern(&raw, &default_database)?;
                println!("{} -> {:?}", text, pattern);
            }
        }
    }

    Ok(())
}
