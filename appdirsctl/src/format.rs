//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors.

use anyhow::Result;
use appdirs_core::{DirSpec, StaticDirSpec};
use colored::*;
use std::path::PathBuf;

use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Parse a validated config value, falling back to table
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the six directories of a spec
pub fn format_dirs(title: &str, spec: &impl DirSpec, format: &OutputFormat) -> Result<String> {
    let snapshot = StaticDirSpec::from_spec(spec);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct DirRow {
                #[tabled(rename = "Directory")]
                name: String,
                #[tabled(rename = "Path")]
                path: String,
            }

            let single = [
                ("Config home", snapshot.config_home),
                ("Data home", snapshot.data_home),
                ("Cache home", snapshot.cache_home),
                ("Runtime dir", snapshot.runtime_dir),
            ];
            let lists = [
                ("Config dirs", snapshot.config_dirs),
                ("Data dirs", snapshot.data_dirs),
            ];

            let mut rows: Vec<DirRow> = single
                .into_iter()
                .map(|(name, path)| DirRow {
                    name: name.cyan().to_string(),
                    path: path.display().to_string(),
                })
                .collect();

            rows.extend(lists.into_iter().map(|(name, paths)| DirRow {
                name: name.cyan().to_string(),
                path: if paths.is_empty() {
                    "(none)".dimmed().to_string()
                } else {
                    join_paths(&paths)
                },
            }));

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", title.bold(), table))
        }
    }
}

/// Format a list of paths, one per line in table mode
pub fn format_paths(paths: &[PathBuf], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(paths)?),
        OutputFormat::Table => Ok(join_paths(paths)),
    }
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}
