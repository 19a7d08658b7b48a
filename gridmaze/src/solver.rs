use thiserror::Error;

use crate::{
    dims::{Dims, DIRECTIONS},
    grid::{CellState, Grid},
    path::Path,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("position {0} is outside of the maze")]
    OutOfBounds(Dims),
    #[error("position {0} is a wall")]
    Blocked(Dims),
}

/// One cell of the active search branch.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Dims,
    /// Index into [`DIRECTIONS`] of the next direction to try.
    next_dir: usize,
}

impl Frame {
    fn new(pos: Dims) -> Self {
        Frame { pos, next_dir: 0 }
    }
}

/// Finds a path from `start` to `end` by depth-first backtracking.
///
/// Directions are tried up, down, left, right, and the first path found is
/// returned, which is not necessarily the shortest one. Returns `Ok(None)` when
/// `end` can't be reached.
///
/// Cells of the active branch are marked as [`CellState::Path`] during the
/// search. Marks are removed before returning in both outcomes, including ones
/// left in the grid before the call, so walls and open cells are exactly as they
/// were. Use [`Grid::with_path`] to show the result.
pub fn solve(grid: &mut Grid, start: Dims, end: Dims) -> Result<Option<Path>, SolveError> {
    for pos in [start, end] {
        match grid.get(pos) {
            None => return Err(SolveError::OutOfBounds(pos)),
            Some(CellState::Wall) => return Err(SolveError::Blocked(pos)),
            Some(_) => {}
        }
    }

    grid.clear_marks();

    if start == end {
        return Ok(Some(Path::new(vec![start])));
    }

    let mut steps = 0usize;
    let mut stack = vec![Frame::new(start)];
    grid.set(start, CellState::Path);

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = DIRECTIONS.get(frame.next_dir) else {
            // dead end, backtrack
            let pos = frame.pos;
            stack.pop();
            grid.set(pos, CellState::Open);
            continue;
        };
        frame.next_dir += 1;

        let next = frame.pos + dir;
        if grid.get(next) != Some(CellState::Open) {
            continue;
        }
        steps += 1;

        if next == end {
            let cells: Vec<Dims> = stack
                .iter()
                .map(|frame| frame.pos)
                .chain(std::iter::once(next))
                .collect();
            for pos in &cells {
                grid.set(*pos, CellState::Open);
            }

            log::debug!("Found path of {} cells after {} steps", cells.len(), steps);
            return Ok(Some(Path::new(cells)));
        }

        grid.set(next, CellState::Path);
        stack.push(Frame::new(next));
    }

    log::debug!("No path from {} to {} after {} steps", start, end, steps);
    Ok(None)
}

/// Solves the maze from the top left to the bottom right cell.
pub fn solve_corners(grid: &mut Grid) -> Result<Option<Path>, SolveError> {
    let (start, end) = (grid.entrance(), grid.exit());
    solve(grid, start, end)
}
