pub const APP_DIR: &str = "mazerunner";
pub const SETTINGS_FILE: &str = "settings.ron";

/// Size the original maze page starts with.
pub const DEFAULT_SIZE: u16 = 10;
pub const MIN_SIZE: u16 = 10;
pub const MAX_SIZE: u16 = 20;
