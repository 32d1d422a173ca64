//! Path utilities for locating durable storage.
//!
//! This module resolves where the JSON storage files live. The default data
//! directory follows the XDG convention under the user's home directory; a
//! configured `data_dir` (possibly tilde-prefixed) takes precedence.

use std::path::PathBuf;

/// Returns the default data directory for trailshare storage.
///
/// Resolves to `$HOME/.local/share/trailshare`, falling back to a relative
/// `.trailshare` directory when `HOME` is unset (unusual outside of stripped
/// service environments).
///
/// # Examples
///
/// ```
/// use trailshare::infrastructure::default_data_dir;
///
/// let dir = default_data_dir();
/// assert!(dir.ends_with("trailshare") || dir.ends_with(".trailshare"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".trailshare"),
        |home| PathBuf::from(home).join(".local/share/trailshare"),
    )
}

/// Expands a leading tilde in a configured path to the home directory.
///
/// Paths without a tilde prefix are returned unchanged. When `HOME` is unset
/// the tilde is left in place.
///
/// # Examples
///
/// ```
/// use trailshare::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = std::env::var_os("HOME") else {
        return path.to_string();
    };
    let home = home.to_string_lossy();

    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(expand_tilde("/data/trailshare"), "/data/trailshare");
        assert_eq!(expand_tilde("relative/dir"), "relative/dir");
    }

    #[test]
    fn tilde_expands_against_home_when_set() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_tilde("~/shares"), format!("{home}/shares"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
