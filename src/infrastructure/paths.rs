//! Path utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, so
//! anything the plugin writes (trace files, custom themes) resolves through
//! that prefix.

use std::path::PathBuf;

/// Returns the data directory for Zemoji output.
///
/// The directory is located at `/host/.local/share/zellij/zemoji`. In
/// Zellij's plugin environment `/host` points to the cwd of the last focused
/// terminal, or the folder where Zellij was started, so this typically
/// resolves to `~/.local/share/zellij/zemoji`. The rotating trace file lives
/// inside it.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zemoji")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// Used when resolving user-supplied paths such as a custom theme file.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host_mount() {
        assert_eq!(
            get_data_dir().to_str().unwrap(),
            "/host/.local/share/zellij/zemoji"
        );
    }

    #[test]
    fn expand_tilde_rewrites_home_paths() {
        assert_eq!(expand_tilde("~/themes/custom.toml"), "/host/themes/custom.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
    }
}
