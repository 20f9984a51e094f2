//! Application constants and path helpers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};


/// Default refresh interval for dashboard data (seconds).
pub const DEFAULT_REFRESH_INTERVAL: u64 = 300;

/// Persistence key for the settings record.
pub const SETTINGS_KEY: &str = "dashboard-settings";

/// Persistence key for the widget collection.
pub const WIDGETS_KEY: &str = "dashboard-widgets";

/// Database file name inside the data directory.
pub const DB_FILE_NAME: &str = "dashboard.db";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WDASH_DATA_DIR";


/// Get the default data directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wdash")
}


/// Get the database path inside `data_dir`.
pub fn get_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE_NAME)
}


/// Make sure the data directory exists.
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_REFRESH_INTERVAL, 300);
        assert_eq!(SETTINGS_KEY, "dashboard-settings");
        assert_eq!(WIDGETS_KEY, "dashboard-widgets");
    }

    #[test]
    fn test_default_data_dir() {
        let dir = default_data_dir();
        assert!(dir.ends_with("wdash"));
    }

    #[test]
    fn test_get_db_path() {
        let path = get_db_path(Path::new("/tmp/wdash"));
        assert_eq!(path, PathBuf::from("/tmp/wdash/dashboard.db"));
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let tmp_dir = TempDir::new().unwrap();
        let nested = tmp_dir.path().join("a").join("b");
        ensure_data_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
