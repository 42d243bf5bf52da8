//! The directory-spec capability
//!
//! Anything that can answer the six base-directory questions can back an
//! [`crate::AppDirs`]. [`crate::XdgBaseDirs`] answers them from the environment,
//! [`crate::StaticDirSpec`] from fixed values.

use std::path::PathBuf;

/// Provider of the six base directories.
///
/// Lists are ordered by preference, most important first.
pub trait DirSpec {
    /// Base directory for user-specific configuration files.
    fn config_home(&self) -> PathBuf;

    /// Base directory for user-specific data files.
    fn data_home(&self) -> PathBuf;

    /// Base directory for user-specific non-essential data.
    fn cache_home(&self) -> PathBuf;

    /// Base directory for user-specific runtime files (sockets, pipes, ...).
    fn runtime_dir(&self) -> PathBuf;

    /// System-wide configuration directories.
    fn config_dirs(&self) -> Vec<PathBuf>;

    /// System-wide data directories.
    fn data_dirs(&self) -> Vec<PathBuf>;
}

impl<T: DirSpec + ?Sized> DirSpec for &T {
    fn config_home(&self) -> PathBuf {
        (**self).config_home()
    }

    fn data_home(&self) -> PathBuf {
        (**self).data_home()
    }

    fn cache_home(&self) -> PathBuf {
        (**self).cache_home()
    }

    fn runtime_dir(&self) -> PathBuf {
        (**self).runtime_dir()
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        (**self).config_dirs()
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        (**self).data_dirs()
    }
}

impl<T: DirSpec + ?Sized> DirSpec for Box<T> {
    fn config_home(&self) -> PathBuf {
        (**self).config_home()
    }

    fn data_home(&self) -> PathBuf {
        (**self).data_home()
    }

    fn cache_home(&self) -> PathBuf {
        (**self).cache_home()
    }

    fn runtime_dir(&self) -> PathBuf {
        (**self).runtime_dir()
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        (**self).config_dirs()
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        (**self).data_dirs()
    }
}
