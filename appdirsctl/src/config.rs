//! CLI configuration management
//!
//! The CLI keeps its own settings in `cli.toml`, located with appdirs itself
//! (`$XDG_CONFIG_HOME/appdirs/cli.toml` by default).

use anyhow::{Context, Result};
use appdirs_core::{AppDirs, SystemUsers, UserDirectory, XdgBaseDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name the CLI resolves its own directories under
pub const CLI_APP_NAME: &str = "appdirs";

/// File name of the CLI config inside its config home
pub const CLI_CONFIG_FILE: &str = "cli.toml";

pub const ENV_APP: &str = "APPDIRS_APP";
pub const ENV_FORMAT: &str = "APPDIRS_FORMAT";
pub const ENV_VERBOSE: &str = "APPDIRS_VERBOSE";
pub const ENV_CLI_CONFIG: &str = "APPDIRS_CLI_CONFIG";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Default application name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,

    /// Default output format
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Enable verbose logging by default
    #[serde(default)]
    pub verbose: bool,
}

fn default_output_format() -> String {
    "table".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            app: None,
            output_format: default_output_format(),
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, `None` if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CLI config file {}", path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse CLI config file {}", path.display()))?;

        Ok(Some(config))
    }

    /// Save configuration to `path`, creating its parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize CLI config")?;

        std::fs::write(path, content).context("Failed to write CLI config file")?;

        Ok(())
    }

    /// Get the configuration file path
    ///
    /// `APPDIRS_CLI_CONFIG` wins over the XDG location.
    pub fn default_path() -> Result<PathBuf> {
        Self::default_path_in(&SystemUsers)
    }

    /// Like [`CliConfig::default_path`], resolving the current user in `users`
    pub fn default_path_in(users: &impl UserDirectory) -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(ENV_CLI_CONFIG).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let base = XdgBaseDirs::current_in(users).context("Cannot determine config directory")?;
        let dirs = AppDirs::with_spec(CLI_APP_NAME, base)?;
        Ok(dirs.config_file(CLI_CONFIG_FILE))
    }

    /// Path of the file to load at startup, `None` when nothing is loaded
    ///
    /// Only looks up the current user when the default location is needed.
    pub fn startup_path(explicit: Option<&Path>, load_file: bool) -> Result<Option<PathBuf>> {
        match (explicit, load_file) {
            (Some(path), _) => Ok(Some(path.to_path_buf())),
            (None, false) => Ok(None),
            (None, true) => Self::default_path().map(Some),
        }
    }

    /// Update a single setting by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "app" => {
                ConfigBuilder::validate_app(value)?;
                self.app = Some(value.to_string());
            }
            "output_format" => {
                ConfigBuilder::validate_output_format(value)?;
                self.output_format = value.to_string();
            }
            "verbose" => {
                self.verbose = parse_bool(value)?;
            }
            _ => {
                return Err(anyhow::anyhow!(
                    "Unknown configuration key '{}'. Valid keys: app, output_format, verbose",
                    key
                ));
            }
        }
        Ok(())
    }

    /// Create a new builder for constructing configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "Invalid boolean '{}'. Must be true, false, 1 or 0",
            value
        )),
    }
}

/// Builder for CLI configuration with validation and priority chain support
///
/// Priority chain (lowest to highest), each layer overriding the previous:
/// 1. Defaults
/// 2. Config file
/// 3. Environment variables
/// 4. CLI arguments
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    app: Option<String>,
    output_format: Option<String>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set application name (with validation)
    pub fn with_app(mut self, app: impl Into<String>) -> Result<Self> {
        let app = app.into();
        Self::validate_app(&app)?;
        self.app = Some(app);
        Ok(self)
    }

    /// Set output format (with validation)
    pub fn with_output_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        Self::validate_output_format(&format)?;
        self.output_format = Some(format);
        Ok(self)
    }

    /// Set verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Load configuration from file; a missing file leaves the builder unchanged
    pub fn with_config_file(mut self, path: &Path) -> Result<Self> {
        let Some(config) = CliConfig::load_from(path)? else {
            return Ok(self);
        };

        if let Some(app) = config.app {
            Self::validate_app(&app).context("Invalid 'app' in CLI config file")?;
            self.app = Some(app);
        }
        Self::validate_output_format(&config.output_format)
            .context("Invalid 'output_format' in CLI config file")?;
        self.output_format = Some(config.output_format);
        self.verbose = Some(config.verbose);

        Ok(self)
    }

    /// Apply environment variable overrides; invalid values are ignored
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(app) = std::env::var(ENV_APP) {
            if Self::validate_app(&app).is_ok() {
                self.app = Some(app);
            }
        }

        if let Ok(format) = std::env::var(ENV_FORMAT) {
            if Self::validate_output_format(&format).is_ok() {
                self.output_format = Some(format);
            }
        }

        if let Ok(verbose) = std::env::var(ENV_VERBOSE) {
            if let Ok(verbose) = parse_bool(&verbose) {
                self.verbose = Some(verbose);
            }
        }

        self
    }

    /// Build the final configuration with validation
    pub fn build(self) -> Result<CliConfig> {
        let defaults = CliConfig::default();

        let output_format = self.output_format.unwrap_or(defaults.output_format);
        Self::validate_output_format(&output_format)?;
        if let Some(ref app) = self.app {
            Self::validate_app(app)?;
        }

        Ok(CliConfig {
            app: self.app,
            output_format,
            verbose: self.verbose.unwrap_or(defaults.verbose),
        })
    }

    /// Validate application name
    fn validate_app(app: &str) -> Result<()> {
        if app.is_empty() {
            return Err(anyhow::anyhow!("App name cannot be empty"));
        }

        if app.contains('/') {
            return Err(anyhow::anyhow!(
                "App name '{}' must be a single path segment",
                app
            ));
        }

        Ok(())
    }

    /// Validate output format
    fn validate_output_format(format: &str) -> Result<()> {
        match format {
            "table" | "json" => Ok(()),
            _ => Err(anyhow::anyhow!(
                "Invalid output format '{}'. Must be 'table' or 'json'",
                format
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdirs_core::{AppDirsError, Identity};
    use serial_test::serial;

    struct FakeUsers;

    impl UserDirectory for FakeUsers {
        fn current_user(&self) -> appdirs_core::Result<Identity> {
            Identity::new("/home/ggicci", "1000", "ggicci")
        }

        fn lookup_user(&self, username: &str) -> appdirs_core::Result<Identity> {
            Err(AppDirsError::UserNotFound(username.to_string()))
        }
    }

    struct NoUsers;

    impl UserDirectory for NoUsers {
        fn current_user(&self) -> appdirs_core::Result<Identity> {
            Err(AppDirsError::UserNotFound("uid 54321".to_string()))
        }

        fn lookup_user(&self, username: &str) -> appdirs_core::Result<Identity> {
            Err(AppDirsError::UserNotFound(username.to_string()))
        }
    }

    fn clear_env() {
        std::env::remove_var(ENV_APP);
        std::env::remove_var(ENV_FORMAT);
        std::env::remove_var(ENV_VERBOSE);
        std::env::remove_var(ENV_CLI_CONFIG);
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.app, None);
        assert_eq!(config.output_format, "table");
        assert!(!config.verbose);
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig {
            app: Some("myapp".to_string()),
            ..CliConfig::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);

        // No app key when unset
        let toml_str = toml::to_string(&CliConfig::default()).unwrap();
        assert!(!toml_str.contains("app"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: CliConfig = toml::from_str("app = \"myapp\"\n").unwrap();
        assert_eq!(parsed.app.as_deref(), Some("myapp"));
        assert_eq!(parsed.output_format, "table");
        assert!(!parsed.verbose);
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("cli.toml");

        assert_eq!(CliConfig::load_from(&path).unwrap(), None);

        let config = CliConfig {
            app: Some("myapp".to_string()),
            output_format: "json".to_string(),
            verbose: true,
        };
        config.save_to(&path).unwrap();

        assert_eq!(CliConfig::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_load_invalid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.toml");
        std::fs::write(&path, "verbose = \"not a bool").unwrap();

        let err = CliConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse CLI config file"));
    }

    #[test]
    fn test_set() {
        let mut config = CliConfig::default();
        config.set("app", "myapp").unwrap();
        config.set("output_format", "json").unwrap();
        config.set("verbose", "1").unwrap();
        assert_eq!(config.app.as_deref(), Some("myapp"));
        assert_eq!(config.output_format, "json");
        assert!(config.verbose);

        assert!(config.set("output_format", "xml").is_err());
        assert!(config.set("app", "").is_err());
        assert!(config.set("timeout", "10").is_err());
    }

    #[test]
    fn test_set_verbose_rejects_non_boolean() {
        let mut config = CliConfig::default();
        config.set("verbose", "TRUE").unwrap();
        assert!(config.verbose);
        config.set("verbose", "0").unwrap();
        assert!(!config.verbose);

        let err = config.set("verbose", "maybe").unwrap_err();
        assert!(err.to_string().contains("Invalid boolean 'maybe'"));
        assert!(!config.verbose);

        config.verbose = true;
        assert!(config.set("verbose", "").is_err());
        assert!(config.verbose);
    }

    #[test]
    #[serial]
    fn test_default_path_env_override() {
        clear_env();
        std::env::set_var(ENV_CLI_CONFIG, "/tmp/custom/cli.toml");
        assert_eq!(
            CliConfig::default_path().unwrap(),
            PathBuf::from("/tmp/custom/cli.toml")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_default_path_uses_xdg_config_home() {
        clear_env();
        std::env::remove_var("XDG_CONFIG_HOME");
        assert_eq!(
            CliConfig::default_path_in(&FakeUsers).unwrap(),
            PathBuf::from("/home/ggicci/.config/appdirs/cli.toml")
        );

        std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-config");
        assert_eq!(
            CliConfig::default_path_in(&FakeUsers).unwrap(),
            PathBuf::from("/tmp/xdg-config/appdirs/cli.toml")
        );

        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn test_default_path_without_current_user() {
        clear_env();
        let err = CliConfig::default_path_in(&NoUsers).unwrap_err();
        assert!(err.to_string().contains("Cannot determine config directory"));

        // The env override needs no user at all
        std::env::set_var(ENV_CLI_CONFIG, "/tmp/custom/cli.toml");
        assert_eq!(
            CliConfig::default_path_in(&NoUsers).unwrap(),
            PathBuf::from("/tmp/custom/cli.toml")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_startup_path() {
        clear_env();
        let explicit = Path::new("/tmp/explicit/cli.toml");

        assert_eq!(
            CliConfig::startup_path(Some(explicit), true).unwrap(),
            Some(explicit.to_path_buf())
        );
        assert_eq!(
            CliConfig::startup_path(Some(explicit), false).unwrap(),
            Some(explicit.to_path_buf())
        );
        // --no-config without --config never resolves the default location
        assert_eq!(CliConfig::startup_path(None, false).unwrap(), None);

        std::env::set_var(ENV_CLI_CONFIG, "/tmp/custom/cli.toml");
        assert_eq!(
            CliConfig::startup_path(None, true).unwrap(),
            Some(PathBuf::from("/tmp/custom/cli.toml"))
        );
        clear_env();
    }

    // ConfigBuilder tests

    #[test]
    fn test_builder_with_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_builder_with_custom_values() {
        let config = ConfigBuilder::new()
            .with_app("myapp")
            .unwrap()
            .with_output_format("json")
            .unwrap()
            .with_verbose(true)
            .build()
            .unwrap();

        assert_eq!(config.app.as_deref(), Some("myapp"));
        assert_eq!(config.output_format, "json");
        assert!(config.verbose);
    }

    #[test]
    fn test_builder_app_validation() {
        assert!(ConfigBuilder::new().with_app("").is_err());
        assert!(ConfigBuilder::new().with_app("vendor/app").is_err());
        assert!(ConfigBuilder::new().with_app("my-app").is_ok());
    }

    #[test]
    fn test_builder_format_validation() {
        assert!(ConfigBuilder::new().with_output_format("xml").is_err());
        assert!(ConfigBuilder::new().with_output_format("table").is_ok());
        assert!(ConfigBuilder::new().with_output_format("json").is_ok());
    }

    #[test]
    #[serial]
    fn test_builder_priority_chain() {
        clear_env();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.toml");
        std::fs::write(
            &path,
            "app = \"fromfile\"\noutput_format = \"json\"\nverbose = true\n",
        )
        .unwrap();

        std::env::set_var(ENV_APP, "fromenv");

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .unwrap()
            .with_env_overrides()
            .with_verbose(false)
            .build()
            .unwrap();

        // Env beats file
        assert_eq!(config.app.as_deref(), Some("fromenv"));
        // File beats defaults
        assert_eq!(config.output_format, "json");
        // CLI arg beats file
        assert!(!config.verbose);

        clear_env();
    }

    #[test]
    fn test_builder_missing_file_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_config_file(&tmp.path().join("absent.toml"))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_builder_rejects_invalid_file_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cli.toml");
        std::fs::write(&path, "output_format = \"xml\"\n").unwrap();

        assert!(ConfigBuilder::new().with_config_file(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_builder_invalid_env_values_ignored() {
        clear_env();
        std::env::set_var(ENV_FORMAT, "xml");
        std::env::set_var(ENV_APP, "");
        std::env::set_var(ENV_VERBOSE, "maybe");

        let config = ConfigBuilder::new()
            .with_verbose(true)
            .with_env_overrides()
            .build()
            .unwrap();

        assert_eq!(config.output_format, "table");
        assert_eq!(config.app, None);
        assert!(config.verbose);

        clear_env();
    }
}
