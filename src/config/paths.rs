use std::path::Path;

/// Returns the path of the optional settings file.
///
/// `TENNIS_SCORES_CONFIG` wins when set; otherwise the file lives in the
/// platform config directory (e.g. `~/.config/tennis_scores/config.toml` on Linux),
/// falling back to the current directory if that is unavailable.
pub fn get_config_path() -> String {
    if let Ok(path) = std::env::var(crate::constants::env::CONFIG_PATH)
        && !path.trim().is_empty()
    {
        return path;
    }

    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("tennis_scores")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("tennis_scores")
        .join("logs")
        .to_string_lossy()
        .to_string()
}
