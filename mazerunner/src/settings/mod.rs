use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{base_path, constants, AppError};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePreset {
    pub title: String,
    pub cols: u16,
    pub rows: u16,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min: u16,
    pub max: u16,
}

impl SizeLimits {
    pub fn contains(&self, size: u16) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        SizeLimits {
            min: constants::MIN_SIZE,
            max: constants::MAX_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Raises the level by `steps`, saturating at [`LogLevel::Trace`].
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];

        let idx = ORDER.iter().position(|l| *l == self).unwrap_or(0);
        ORDER[(idx + steps as usize).min(ORDER.len() - 1)]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cols: Option<u16>,
    #[serde(default)]
    pub rows: Option<u16>,
    #[serde(default)]
    pub size_limits: Option<SizeLimits>,
    #[serde(default)]
    pub show_path_list: Option<bool>,
    #[serde(default)]
    pub colored: Option<bool>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub presets: Option<Vec<MazePreset>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_cols(&self) -> u16 {
        self.cols.unwrap_or(constants::DEFAULT_SIZE)
    }

    pub fn get_rows(&self) -> u16 {
        self.rows.unwrap_or(constants::DEFAULT_SIZE)
    }

    pub fn set_size_limits(mut self, value: SizeLimits) -> Self {
        self.size_limits = Some(value);
        self
    }

    pub fn get_size_limits(&self) -> SizeLimits {
        self.size_limits.unwrap_or_default()
    }

    pub fn get_show_path_list(&self) -> bool {
        self.show_path_list.unwrap_or(true)
    }

    pub fn get_colored(&self) -> bool {
        self.colored.unwrap_or(true)
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn set_presets(mut self, value: Vec<MazePreset>) -> Self {
        self.presets = Some(value);
        self
    }

    pub fn get_presets(&self) -> Vec<MazePreset> {
        self.presets.clone().unwrap_or_default()
    }

    /// Finds a preset by its title, ignoring case.
    pub fn find_preset(&self, title: &str) -> Option<MazePreset> {
        self.get_presets()
            .into_iter()
            .find(|p| p.title.eq_ignore_ascii_case(title))
    }

    /// Size as `(cols, rows)`, taken from the preset marked as default if any,
    /// otherwise from `cols` and `rows`.
    pub fn default_size(&self) -> (u16, u16) {
        self.get_presets()
            .into_iter()
            .find(|p| p.default)
            .map(|p| (p.cols, p.rows))
            .unwrap_or((self.get_cols(), self.get_rows()))
    }

    pub fn default_path() -> PathBuf {
        base_path().join(constants::SETTINGS_FILE)
    }

    pub fn parse(source: &str) -> Result<Self, AppError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    /// Loads settings from `path`, writing the default settings there first if
    /// the file doesn't exist yet.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        match fs::read_to_string(&path) {
            Ok(source) => {
                log::debug!("Loading settings from {:?}", path);
                Self::parse(&source)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: PathBuf) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
