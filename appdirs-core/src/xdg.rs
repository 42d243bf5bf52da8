//! XDG Base Directory resolution
//!
//! Each directory is the value of its environment variable when that is set
//! and non-empty, otherwise a default computed from the user's identity.
//! Nothing is cached: the environment is read again on every call.

use crate::error::Result;
use crate::identity::{Identity, SystemUsers, UserDirectory};
use crate::spec::DirSpec;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const ENV_XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const ENV_XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const ENV_XDG_CACHE_HOME: &str = "XDG_CACHE_HOME";
pub const ENV_XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";
pub const ENV_XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const ENV_XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";

/// All six variables, in accessor order.
pub const XDG_ENV_VARS: [&str; 6] = [
    ENV_XDG_CONFIG_HOME,
    ENV_XDG_DATA_HOME,
    ENV_XDG_CACHE_HOME,
    ENV_XDG_RUNTIME_DIR,
    ENV_XDG_CONFIG_DIRS,
    ENV_XDG_DATA_DIRS,
];

const DEFAULT_CONFIG_DIRS: &[&str] = &["/etc/xdg"];
const DEFAULT_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];

/// Environment-driven [`DirSpec`] for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdgBaseDirs {
    identity: Identity,
}

impl XdgBaseDirs {
    /// Resolve directories for the user running this process.
    pub fn current() -> Result<Self> {
        Self::current_in(&SystemUsers)
    }

    /// Resolve directories for the named user.
    ///
    /// Fails with [`crate::AppDirsError::UserNotFound`] when the host has no
    /// such user.
    pub fn with_username(username: &str) -> Result<Self> {
        Self::with_username_in(&SystemUsers, username)
    }

    /// Like [`XdgBaseDirs::current`], against any user directory.
    pub fn current_in(users: &impl UserDirectory) -> Result<Self> {
        Self::with_identity(users.current_user()?)
    }

    /// Like [`XdgBaseDirs::with_username`], against any user directory.
    pub fn with_username_in(users: &impl UserDirectory, username: &str) -> Result<Self> {
        Self::with_identity(users.lookup_user(username)?)
    }

    /// Resolve directories for an explicit identity.
    pub fn with_identity(identity: Identity) -> Result<Self> {
        identity.validate()?;
        Ok(Self { identity })
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The user's home directory, `/home/{username}` if unknown.
    pub fn user_home_dir(&self) -> PathBuf {
        self.identity.home_dir_or_default()
    }

    /// `~/.config`
    pub fn default_config_home(&self) -> PathBuf {
        self.user_home_dir().join(".config")
    }

    /// `~/.local/share`
    pub fn default_data_home(&self) -> PathBuf {
        self.user_home_dir().join(".local/share")
    }

    /// `~/.cache`
    pub fn default_cache_home(&self) -> PathBuf {
        self.user_home_dir().join(".cache")
    }

    /// `/run/user/{uid}`, the directory systemd-logind manages per session.
    pub fn default_runtime_dir(&self) -> PathBuf {
        Path::new("/run/user").join(&self.identity.uid)
    }

    pub fn default_config_dirs(&self) -> Vec<PathBuf> {
        DEFAULT_CONFIG_DIRS.iter().map(PathBuf::from).collect()
    }

    pub fn default_data_dirs(&self) -> Vec<PathBuf> {
        DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect()
    }
}

impl DirSpec for XdgBaseDirs {
    fn config_home(&self) -> PathBuf {
        resolve_dir(ENV_XDG_CONFIG_HOME, || self.default_config_home())
    }

    fn data_home(&self) -> PathBuf {
        resolve_dir(ENV_XDG_DATA_HOME, || self.default_data_home())
    }

    fn cache_home(&self) -> PathBuf {
        resolve_dir(ENV_XDG_CACHE_HOME, || self.default_cache_home())
    }

    fn runtime_dir(&self) -> PathBuf {
        resolve_dir(ENV_XDG_RUNTIME_DIR, || self.default_runtime_dir())
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        resolve_dirs(ENV_XDG_CONFIG_DIRS, || self.default_config_dirs())
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        resolve_dirs(ENV_XDG_DATA_DIRS, || self.default_data_dirs())
    }
}

/// Value of `var`, treating an empty value the same as an unset one.
fn non_empty_var(var: &str) -> Option<OsString> {
    std::env::var_os(var).filter(|value| !value.is_empty())
}

fn resolve_dir(var: &str, default: impl FnOnce() -> PathBuf) -> PathBuf {
    non_empty_var(var).map(PathBuf::from).unwrap_or_else(default)
}

fn resolve_dirs(var: &str, default: impl FnOnce() -> Vec<PathBuf>) -> Vec<PathBuf> {
    match non_empty_var(var) {
        Some(value) => split_dir_list(&value),
        None => default(),
    }
}

/// Split a colon-separated directory list, dropping empty segments.
///
/// A value made only of separators yields an empty list.
pub fn split_dir_list(value: &std::ffi::OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}
