//! Fixed-value directory spec

use crate::spec::DirSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A [`DirSpec`] whose directories are fixed at construction.
///
/// Useful in tests, on hosts that don't follow XDG, or to freeze a snapshot of
/// an environment-driven spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDirSpec {
    pub config_home: PathBuf,
    pub data_home: PathBuf,
    pub cache_home: PathBuf,
    pub runtime_dir: PathBuf,
    #[serde(default)]
    pub config_dirs: Vec<PathBuf>,
    #[serde(default)]
    pub data_dirs: Vec<PathBuf>,
}

impl StaticDirSpec {
    /// Capture the current values of another spec.
    pub fn from_spec(spec: &impl DirSpec) -> Self {
        Self {
            config_home: spec.config_home(),
            data_home: spec.data_home(),
            cache_home: spec.cache_home(),
            runtime_dir: spec.runtime_dir(),
            config_dirs: spec.config_dirs(),
            data_dirs: spec.data_dirs(),
        }
    }
}

impl DirSpec for StaticDirSpec {
    fn config_home(&self) -> PathBuf {
        self.config_home.clone()
    }

    fn data_home(&self) -> PathBuf {
        self.data_home.clone()
    }

    fn cache_home(&self) -> PathBuf {
        self.cache_home.clone()
    }

    fn runtime_dir(&self) -> PathBuf {
        self.runtime_dir.clone()
    }

    fn config_dirs(&self) -> Vec<PathBuf> {
        self.config_dirs.clone()
    }

    fn data_dirs(&self) -> Vec<PathBuf> {
        self.data_dirs.clone()
    }
}
