//! CLI command and subcommand definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use crate::format::OutputFormat;

/// XDG application directories CLI
#[derive(Parser, Debug)]
#[command(name = "appdirsctl")]
#[command(version, about = "Show and create XDG application directories", long_about = None)]
pub struct Cli {
    /// Application name (overrides config file)
    #[arg(short, long, global = true)]
    pub app: Option<String>,

    /// Resolve directories for another user instead of the current one
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long, global = true)]
    pub verbose: Option<bool>,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    /// Config file path (default: ~/.config/appdirs/cli.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every directory of the application
    Show,

    /// Show the base directories, without an application
    Base,

    /// Print one directory (or directory list) of the application
    Dir {
        #[arg(value_enum)]
        kind: DirKind,
    },

    /// Print candidate paths for a file, highest priority first
    Files {
        #[arg(value_enum)]
        kind: FileKind,

        /// File name inside the application directory
        filename: String,

        /// Only list system-wide candidates (config and data only)
        #[arg(long)]
        system: bool,
    },

    /// Create the user config, data and cache directories of the application
    Create,

    /// Show or manage CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirKind {
    Config,
    Data,
    Cache,
    Runtime,
    ConfigDirs,
    DataDirs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileKind {
    Config,
    Data,
    Cache,
    Runtime,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set configuration value
    Set {
        /// Configuration key (app, output_format, verbose)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}
