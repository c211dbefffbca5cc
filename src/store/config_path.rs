use std::path::PathBuf;

/// Returns the config directory path for coursepick.
/// Checks `$XDG_CONFIG_HOME` first (cross-platform), then falls back to
/// platform-native config via `dirs::config_dir()`, then `~/.config`.
pub fn get_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("coursepick")
}

/// Ensures the config directory exists, creating it if necessary.
/// Returns the config directory path.
pub fn ensure_config_dir() -> PathBuf {
    let dir = get_config_dir();
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Path of the log file inside `config_dir`.
pub fn log_file_path(config_dir: &std::path::Path) -> PathBuf {
    config_dir.join("coursepick.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_dir_ends_with_app_name() {
        let dir = get_config_dir();
        assert!(dir.ends_with("coursepick"));
    }

    #[test]
    fn test_config_dir_is_consistent() {
        assert_eq!(get_config_dir(), get_config_dir());
    }

    #[test]
    fn test_log_file_lives_in_config_dir() {
        let dir = PathBuf::from("/tmp/cfg/coursepick");
        let log = log_file_path(&dir);
        assert!(log.starts_with(&dir));
        assert!(log.ends_with("coursepick.log"));
    }
}
