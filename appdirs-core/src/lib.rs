//! appdirs core library
//!
//! Per-application configuration, data, cache and runtime directories following
//! the XDG Base Directory convention.
//!
//! ```no_run
//! use appdirs_core::AppDirs;
//!
//! # fn example() -> appdirs_core::Result<()> {
//! let dirs = AppDirs::new("myapp")?;
//! for candidate in dirs.config_files("config.toml") {
//!     println!("{}", candidate.display());
//! }
//! dirs.create_directories()?;
//! # Ok(())
//! # }
//! ```

pub mod app_dirs;
pub mod error;
pub mod identity;
pub mod paths;
pub mod spec;
pub mod static_spec;
pub mod xdg;

// Re-export commonly used types
pub use app_dirs::AppDirs;
pub use error::*;
pub use identity::{Identity, SystemUsers, UserDirectory};
pub use spec::DirSpec;
pub use static_spec::StaticDirSpec;
pub use xdg::XdgBaseDirs;
