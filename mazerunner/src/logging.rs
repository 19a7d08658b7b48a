use std::{
    io::Write as _,
    sync::{OnceLock, RwLock},
};

use crossterm::style::{Color, Stylize};
use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(log::LevelFilter::Warn, true))
}

/// Installs the stderr logger. Can be called only once per process.
pub fn init(level: log::LevelFilter, colored: bool) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_level(level);
    logger.set_colored(colored);

    log::set_logger(logger)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub struct AppLogger {
    min_level: RwLock<log::LevelFilter>,
    colored: RwLock<bool>,
}

impl AppLogger {
    fn new(min_level: log::LevelFilter, colored: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            colored: RwLock::new(colored),
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        self.min_level.read().map(|l| *l).unwrap_or(log::LevelFilter::Warn)
    }

    pub fn set_level(&self, level: log::LevelFilter) {
        if let Ok(mut min_level) = self.min_level.write() {
            *min_level = level;
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored.read().map(|c| *c).unwrap_or(false)
    }

    pub fn set_colored(&self, colored: bool) {
        if let Ok(mut value) = self.colored.write() {
            *value = colored;
        }
    }

    /// Formats a single log line, without the trailing newline.
    pub fn format(&self, level: log::Level, source: &str, message: &str) -> String {
        let label = format!("{:<5}", level);
        if !self.is_colored() {
            return format!("{} {} -> {}", label, source, message);
        }

        let color = match level {
            log::Level::Error => Color::Red,
            log::Level::Warn => Color::Yellow,
            log::Level::Info => Color::White,
            log::Level::Debug => Color::Blue,
            log::Level::Trace => Color::Grey,
        };

        format!("{} {} -> {}", label.with(color), source.dim(), message)
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.format(
                record.level(),
                record.module_path().unwrap_or("unknown"),
                &record.args().to_string(),
            );
            // nowhere to report a failed write to stderr
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_format() {
        let logger = AppLogger::new(log::LevelFilter::Info, false);
        assert_eq!(
            logger.format(log::Level::Info, "gridmaze::solver", "done"),
            "INFO  gridmaze::solver -> done"
        );
    }

    #[test]
    fn second_init_fails_as_app_error() {
        use crate::AppError;

        // another test may already have installed it, so only the second call is certain to fail
        let _ = init(log::LevelFilter::Warn, false);
        let err: AppError = init(log::LevelFilter::Warn, false).unwrap_err().into();
        assert!(matches!(err, AppError::Logger(_)));
        assert!(err.to_string().starts_with("Logger error; "));
    }

    #[test]
    fn level_filtering() {
        let logger = AppLogger::new(log::LevelFilter::Info, false);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));

        logger.set_level(log::LevelFilter::Trace);
        assert!(logger.enabled(&debug));
    }
}
