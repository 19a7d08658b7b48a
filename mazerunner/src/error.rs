use gridmaze::{GenError, SolveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Generator error; {0}")]
    Generate(#[from] GenError),
    #[error("Solver error; {0}")]
    Solve(#[from] SolveError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Serialization error; {0}")]
    Ron(#[from] ron::Error),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("No maze was generated yet")]
    NoMaze,
    #[error("Maze size {cols}x{rows} is outside of the allowed range {min}..={max}")]
    SizeOutOfRange {
        cols: u16,
        rows: u16,
        min: u16,
        max: u16,
    },
    #[error("Unknown maze preset '{0}'")]
    UnknownPreset(String),
}
