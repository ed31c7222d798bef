use crate::constants::APP_NAME;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Directory holding the config file and the default log directory.
///
/// Uses the platform config directory (e.g. `~/.config` on Linux) and falls
/// back to the current directory when there is none.
fn app_dir_in(config_root: Option<PathBuf>) -> PathBuf {
    config_root
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_NAME)
}

/// Returns the platform-specific path for the config file.
pub fn get_config_path() -> String {
    app_dir_in(dirs::config_dir())
        .join(CONFIG_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory, next to the config file.
pub fn get_log_dir_path() -> String {
    app_dir_in(dirs::config_dir())
        .join(LOG_DIR_NAME)
        .to_string_lossy()
        .to_string()
}
