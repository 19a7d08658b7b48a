pub mod constants;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;
pub mod settings;

use std::path::PathBuf;

use dirs::preference_dir;

pub use error::AppError;

/// Directory holding the settings file.
pub fn base_path() -> PathBuf {
    preference_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::APP_DIR)
}
