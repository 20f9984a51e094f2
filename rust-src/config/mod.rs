//! Configuration constants and paths for the dashboard.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    default_data_dir,
    ensure_data_dir,
    get_db_path,
    DATA_DIR_ENV,
    DB_FILE_NAME,
    DEFAULT_REFRESH_INTERVAL,
    SETTINGS_KEY,
    WIDGETS_KEY,
};
