use gridmaze::{generate_seeded, solve_corners, Grid, Path};
use rand::{thread_rng, Rng as _};

use crate::AppError;

/// State of one run: the current maze and its solution.
///
/// Generating a new maze always drops the previous solution.
#[derive(Debug, Default, Clone)]
pub struct Session {
    maze: Option<Grid>,
    path: Option<Path>,
    seed: Option<u64>,
    solved: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a new `cols × rows` maze, a random seed is used if `seed` is `None`.
    pub fn generate(
        &mut self,
        cols: usize,
        rows: usize,
        seed: Option<u64>,
    ) -> Result<&Grid, AppError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let maze = generate_seeded(cols, rows, seed)?;
        log::info!("Generated {}x{} maze, seed {}", cols, rows, seed);

        self.seed = Some(seed);
        self.path = None;
        self.solved = false;
        Ok(self.maze.insert(maze))
    }

    /// Solves the current maze from the top left to the bottom right corner.
    ///
    /// `Ok(None)` means the exit isn't reachable.
    pub fn solve(&mut self) -> Result<Option<&Path>, AppError> {
        let maze = self.maze.as_mut().ok_or(AppError::NoMaze)?;
        let path = solve_corners(maze)?;
        match &path {
            Some(path) => log::info!("Solved maze, path has {} cells", path.len()),
            None => log::warn!("Exit is not connected to the entrance, no path exists"),
        }

        self.solved = true;
        self.path = path;
        Ok(self.path.as_ref())
    }

    pub fn maze(&self) -> Option<&Grid> {
        self.maze.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether the current maze was already solved, successfully or not.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The maze with the path marked on it, if there is one.
    pub fn view(&self) -> Option<Grid> {
        let maze = self.maze.as_ref()?;
        Some(match &self.path {
            Some(path) => maze.with_path(path),
            None => maze.clone(),
        })
    }
}
