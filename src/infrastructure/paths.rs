//! Path handling inside the Zellij plugin sandbox.
//!
//! The host filesystem is visible under `/host`, which maps to the directory
//! Zellij was started from (usually the user's home).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory holding the trace file.
///
/// ```
/// use zbooks::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zbooks"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("zbooks")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// Used for the `catalog_file` and `theme_file` options, which users write
/// relative to their home directory.
///
/// ```
/// use zbooks::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/books.json"), "/host/books.json");
/// assert_eq!(expand_tilde("/data/books.json"), "/data/books.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}
