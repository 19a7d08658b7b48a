//! Grid maze generation and solving.
//!
//! [`generator`] carves a maze into a walled grid with randomized depth-first
//! search, [`solver`] finds a path through it by backtracking.

pub mod array;
pub mod dims;
pub mod generator;
pub mod grid;
pub mod path;
pub mod solver;

pub use dims::Dims;
pub use generator::{generate, generate_seeded, generate_with, GenError, Random};
pub use grid::{CellState, Grid};
pub use path::Path;
pub use solver::{solve, solve_corners, SolveError};
