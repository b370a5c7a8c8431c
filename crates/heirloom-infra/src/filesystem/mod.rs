//! Data directory layout for Heirloom.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "HEIRLOOM_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `HEIRLOOM_DATA_DIR` environment variable
/// 2. `~/.heirloom`
/// 3. `./.heirloom`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".heirloom");
    }

    PathBuf::from(".heirloom")
}

/// Path of `config.toml` inside a data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}
