//! appdirs CLI Library
//!
//! Command-line front end for [`appdirs_core`]. The configuration types are
//! available via [`config::CliConfig`] and [`config::ConfigBuilder`].

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// Configuration types for the CLI tool.
pub mod config;

/// Table and JSON output.
pub mod format;
