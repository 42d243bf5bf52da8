//! Command execution handlers

use anyhow::{Context, Result};
use appdirs_core::{AppDirs, XdgBaseDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::CliConfig;
use crate::format::{format_dirs, format_paths, format_success};

use super::commands::*;

/// Resolve base directories for `user`, or for the current user
pub fn resolve_base_dirs(user: Option<&str>) -> Result<XdgBaseDirs> {
    match user {
        Some(username) => XdgBaseDirs::with_username(username)
            .with_context(|| format!("Cannot resolve directories for user '{}'", username)),
        None => XdgBaseDirs::current().context("Cannot resolve directories for current user"),
    }
}

/// Scope base directories to the configured application
pub fn open_app(config: &CliConfig, base: XdgBaseDirs) -> Result<AppDirs> {
    let app = config.app.as_deref().ok_or_else(|| {
        anyhow::anyhow!("No application name. Use --app, APPDIRS_APP or 'config set app <NAME>'")
    })?;
    debug!("Resolving directories of '{}' for {}", app, base.identity().username);

    Ok(AppDirs::with_spec(app, base)?)
}

/// Directories of one kind, as a list
pub fn dir_paths<S: appdirs_core::DirSpec>(app: &AppDirs<S>, kind: DirKind) -> Vec<PathBuf> {
    match kind {
        DirKind::Config => vec![app.config_home()],
        DirKind::Data => vec![app.data_home()],
        DirKind::Cache => vec![app.cache_home()],
        DirKind::Runtime => vec![app.runtime_dir()],
        DirKind::ConfigDirs => app.config_dirs(),
        DirKind::DataDirs => app.data_dirs(),
    }
}

/// Candidate paths for `filename`, highest priority first
pub fn file_candidates<S: appdirs_core::DirSpec>(
    app: &AppDirs<S>,
    kind: FileKind,
    filename: &str,
    system: bool,
) -> Result<Vec<PathBuf>> {
    if filename.is_empty() {
        return Err(anyhow::anyhow!("File name cannot be empty"));
    }

    let files = match (kind, system) {
        (FileKind::Config, false) => app.config_files(filename),
        (FileKind::Config, true) => app.system_config_files(filename),
        (FileKind::Data, false) => app.data_files(filename),
        (FileKind::Data, true) => app.system_data_files(filename),
        (FileKind::Cache, false) => vec![app.cache_file(filename)],
        (FileKind::Runtime, false) => vec![app.runtime_file(filename)],
        (FileKind::Cache | FileKind::Runtime, true) => {
            return Err(anyhow::anyhow!(
                "{:?} files have no system-wide locations",
                kind
            ));
        }
    };

    Ok(files)
}

/// Handle show command
pub fn handle_show(app: &AppDirs, format: &OutputFormat) -> Result<()> {
    let title = format!("Directories for {}", app.app());
    println!("{}", format_dirs(&title, app, format)?);
    Ok(())
}

/// Handle base command
pub fn handle_base(base: &XdgBaseDirs, format: &OutputFormat) -> Result<()> {
    let title = format!("Base directories for {}", base.identity().username);
    println!("{}", format_dirs(&title, base, format)?);
    Ok(())
}

/// Handle dir command
pub fn handle_dir(app: &AppDirs, kind: DirKind, format: &OutputFormat) -> Result<()> {
    let paths = dir_paths(app, kind);
    if !paths.is_empty() || matches!(format, OutputFormat::Json) {
        println!("{}", format_paths(&paths, format)?);
    }
    Ok(())
}

/// Handle files command
pub fn handle_files(
    app: &AppDirs,
    kind: FileKind,
    filename: &str,
    system: bool,
    format: &OutputFormat,
) -> Result<()> {
    let files = file_candidates(app, kind, filename, system)?;
    if !files.is_empty() || matches!(format, OutputFormat::Json) {
        println!("{}", format_paths(&files, format)?);
    }
    Ok(())
}

/// Handle create command
pub fn handle_create(app: &AppDirs, format: &OutputFormat) -> Result<()> {
    let created = app
        .create_directories()
        .with_context(|| format!("Failed to create directories for {}", app.app()))?;

    match format {
        OutputFormat::Json => println!("{}", format_paths(&created, format)?),
        OutputFormat::Table => {
            for dir in &created {
                println!("{}", format_success(&dir.display().to_string()));
            }
        }
    }
    Ok(())
}

/// Handle config commands
pub fn handle_config(
    command: ConfigCommands,
    current_config: &CliConfig,
    config_path: &Path,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(current_config)?);
            }
            OutputFormat::Table => {
                println!("CLI Configuration:");
                println!("{:<20} Value", "Setting");
                println!("{}", "-".repeat(40));
                println!(
                    "{:<20} {}",
                    "App",
                    current_config.app.as_deref().unwrap_or("(unset)")
                );
                println!("{:<20} {}", "Output Format", current_config.output_format);
                println!("{:<20} {}", "Verbose", current_config.verbose);
            }
        },
        ConfigCommands::Set { key, value } => {
            // Start from the file, not the merged view, so env and flags aren't persisted
            let mut config = CliConfig::load_from(config_path)?.unwrap_or_default();
            config.set(&key, &value)?;
            config.save_to(config_path)?;
            println!("{}", format_success(&format!("Set {} = {}", key, value)));
        }
        ConfigCommands::Reset => {
            CliConfig::default().save_to(config_path)?;
            println!("{}", format_success("Configuration reset to defaults"));
        }
        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
