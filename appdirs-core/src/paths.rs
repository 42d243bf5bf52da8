//! Path joining helpers
//!
//! The appended item is always treated as a relative segment, so a leading
//! `/` on an app name or filename never escapes the base directory.

use std::path::{Path, PathBuf};

/// Append `item` as the last segment of `base`.
pub fn path_append(base: &Path, item: &str) -> PathBuf {
    base.join(item.trim_start_matches('/'))
}

/// Append `item` to every path in `bases`, preserving order.
pub fn path_append_list(bases: &[PathBuf], item: &str) -> Vec<PathBuf> {
    bases.iter().map(|base| path_append(base, item)).collect()
}
