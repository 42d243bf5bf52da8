//! Application-scoped directories
//!
//! [`AppDirs`] appends the application name to every base directory of a
//! [`DirSpec`]. For example, if the root config home is `~/.config` and the
//! app is `myapp`, the app's config home is `~/.config/myapp`.
//!
//! Multi-file helpers return candidates ordered by priority: the user file
//! first, then one per system directory. Callers usually take the first one
//! that exists.

use crate::error::{AppDirsError, Result};
use crate::paths::{path_append, path_append_list};
use crate::spec::DirSpec;
use crate::xdg::XdgBaseDirs;
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;
use std::path::PathBuf;
use tracing::debug;

/// Mode for directories created by [`AppDirs::create_directories`].
pub const DIRECTORY_MODE: u32 = 0o755;

/// Directories of one application on top of a root [`DirSpec`].
#[derive(Debug, Clone)]
pub struct AppDirs<S = XdgBaseDirs> {
    app: String,
    root: S,
}

impl AppDirs<XdgBaseDirs> {
    /// XDG directories of `app` for the user running this process.
    pub fn new(app: impl Into<String>) -> Result<Self> {
        let app = app.into();
        validate_app(&app)?;
        Self::with_spec(app, XdgBaseDirs::current()?)
    }
}

impl<S: DirSpec> AppDirs<S> {
    /// Directories of `app` under an arbitrary root spec.
    pub fn with_spec(app: impl Into<String>, root: S) -> Result<Self> {
        let app = app.into();
        validate_app(&app)?;
        Ok(Self { app, root })
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn root(&self) -> &S {
        &self.root
    }

    pub fn config_home(&self) -> PathBuf {
        path_append(&self.root.config_home(), &self.app)
    }

    pub fn data_home(&self) -> PathBuf {
        path_append(&self.root.data_home(), &self.app)
    }

    pub fn cache_home(&self) -> PathBuf {
        path_append(&self.root.cache_home(), &self.app)
    }

    pub fn runtime_dir(&self) -> PathBuf {
        path_append(&self.root.runtime_dir(), &self.app)
    }

    pub fn config_dirs(&self) -> Vec<PathBuf> {
        path_append_list(&self.root.config_dirs(), &self.app)
    }

    pub fn data_dirs(&self) -> Vec<PathBuf> {
        path_append_list(&self.root.data_dirs(), &self.app)
    }

    /// User-specific config file, e.g. `~/.config/APP/myconfig.conf`.
    pub fn config_file(&self, filename: &str) -> PathBuf {
        path_append(&self.config_home(), filename)
    }

    /// System-wide config files, e.g. `[/etc/xdg/APP/myconfig.conf]`.
    pub fn system_config_files(&self, filename: &str) -> Vec<PathBuf> {
        path_append_list(&self.config_dirs(), filename)
    }

    /// [`AppDirs::config_file`] followed by [`AppDirs::system_config_files`].
    pub fn config_files(&self, filename: &str) -> Vec<PathBuf> {
        let mut files = vec![self.config_file(filename)];
        files.extend(self.system_config_files(filename));
        files
    }

    /// User-specific data file, e.g. `~/.local/share/APP/mydata.dat`.
    pub fn data_file(&self, filename: &str) -> PathBuf {
        path_append(&self.data_home(), filename)
    }

    pub fn system_data_files(&self, filename: &str) -> Vec<PathBuf> {
        path_append_list(&self.data_dirs(), filename)
    }

    /// [`AppDirs::data_file`] followed by [`AppDirs::system_data_files`].
    pub fn data_files(&self, filename: &str) -> Vec<PathBuf> {
        let mut files = vec![self.data_file(filename)];
        files.extend(self.system_data_files(filename));
        files
    }

    pub fn cache_file(&self, filename: &str) -> PathBuf {
        path_append(&self.cache_home(), filename)
    }

    pub fn runtime_file(&self, filename: &str) -> PathBuf {
        path_append(&self.runtime_dir(), filename)
    }

    /// Create the user's config, data and cache homes for the app.
    ///
    /// The runtime directory is left to the session manager and system-wide
    /// directories are never touched. Stops at the first failure; directories
    /// created before it are kept.
    pub fn create_directories(&self) -> Result<Vec<PathBuf>> {
        let dirs = vec![self.config_home(), self.data_home(), self.cache_home()];

        let mut builder = DirBuilder::new();
        builder.recursive(true).mode(DIRECTORY_MODE);

        for dir in &dirs {
            debug!("Creating directory {}", dir.display());
            builder.create(dir)?;
        }

        Ok(dirs)
    }
}

/// App-scoped directories are themselves a spec, so apps can be nested
/// (`~/.config/vendor/app`).
impl<S: DirSpec> DirSpec for AppDirs<S> {
    fn config_home(&self) -> PathBuf {
        AppDirs::config_home(self)
    }

    fn data_home(&self) -> PathBuf {
        AppDirs::data_home(self)
    }

    fn cache_home(&self) -> PathBuf {
        AppDirs::cache_home(self)
    }

    fn runtime_dir(&self) -> PathBuf {
        AppDirs::runtime_dir(self)
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        AppDirs::config_dirs(self)
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        AppDirs::data_dirs(self)
    }
}

fn validate_app(app: &str) -> Result<()> {
    if app.is_empty() {
        return Err(AppDirsError::InvalidAppName);
    }
    Ok(())
}
