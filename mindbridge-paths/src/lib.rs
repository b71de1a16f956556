//! XDG Base Directory paths for mindbridge.
//!
//! The server keeps no files of its own; the CLI reads its user-level
//! configuration from here.

use std::path::PathBuf;

/// Directory name used under the XDG roots.
const APP_DIR: &str = "mindbridge";

/// Get the mindbridge config directory.
///
/// Returns `$XDG_CONFIG_HOME/mindbridge` if set, otherwise `~/.config/mindbridge`.
///
/// # Examples
///
/// ```
/// use mindbridge_paths::config_dir;
///
/// let config_file = config_dir().join("config.toml");
/// assert!(config_file.ends_with("mindbridge/config.toml"));
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Path of the user-level config file.
pub fn user_config_file() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_dir() {
        let path = config_dir();
        assert!(
            path.ends_with("mindbridge"),
            "config_dir should end with 'mindbridge'"
        );
    }

    #[test]
    fn test_user_config_file_is_toml() {
        let path = user_config_file();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
    }

    #[test]
    fn test_config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        let path = config_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-config/mindbridge"));
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}
