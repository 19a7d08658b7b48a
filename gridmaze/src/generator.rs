use rand::{seq::SliceRandom as _, thread_rng, Rng, SeedableRng as _};
use thiserror::Error;

use crate::{
    dims::Dims,
    grid::{CellState, Grid},
};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("invalid maze size {cols}x{rows}, both dimensions must be between 1 and {}", i32::MAX)]
    InvalidDimensions { cols: usize, rows: usize },
}

/// Generates a maze using a seed from the thread local generator.
pub fn generate(cols: usize, rows: usize) -> Result<Grid, GenError> {
    generate_seeded(cols, rows, thread_rng().gen())
}

/// Generates a maze, same seed and size always give the same maze.
pub fn generate_seeded(cols: usize, rows: usize, seed: u64) -> Result<Grid, GenError> {
    log::debug!("Generating {}x{} maze with seed {}", cols, rows, seed);
    generate_with(cols, rows, &mut Random::seed_from_u64(seed))
}

/// Carves a maze out of a fully walled `cols × rows` grid using randomized
/// depth-first search starting at the top left cell, then opens the bottom
/// right cell.
///
/// The exit is opened unconditionally, so it may end up disconnected from the
/// rest of the maze, or close a loop when it borders two carved cells.
pub fn generate_with<R: Rng + ?Sized>(
    cols: usize,
    rows: usize,
    rng: &mut R,
) -> Result<Grid, GenError> {
    let mut grid =
        Grid::new_walled(cols, rows).ok_or(GenError::InvalidDimensions { cols, rows })?;

    let carved = carve(&mut grid, rng);
    log::trace!("Carved {} cells", carved);

    let exit = grid.exit();
    if grid.is_wall(exit) {
        log::debug!("Exit {} was not reached while carving, it is disconnected", exit);
    }
    grid.set(exit, CellState::Open);

    Ok(grid)
}

/// Carving phase alone, returns the number of opened cells.
///
/// Open cells of the result always form a tree rooted at the entrance.
pub(crate) fn carve<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let start = grid.entrance();
    grid.set(start, CellState::Open);

    let mut carved = 1;
    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let candidates = candidates(grid, current);

        match candidates.choose(rng) {
            Some(&chosen) => {
                grid.set(chosen, CellState::Open);
                // neighbours are a single step away, so this is always one of the two
                grid.set(current.midpoint(chosen), CellState::Open);
                stack.push(chosen);
                carved += 1;
            }
            None => {
                stack.pop();
            }
        }
    }

    carved
}

/// Walled neighbours of `pos` that border less than two open cells, opening
/// any of them keeps the carved cells acyclic.
fn candidates(grid: &Grid, pos: Dims) -> Vec<Dims> {
    grid.neighbors(pos)
        .filter(|&next| grid.is_wall(next) && grid.open_neighbor_count(next) < 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            generate_seeded(0, 5, 1),
            Err(GenError::InvalidDimensions { cols: 0, rows: 5 })
        );
        assert_eq!(
            generate_seeded(5, 0, 1),
            Err(GenError::InvalidDimensions { cols: 5, rows: 0 })
        );
    }

    #[test]
    fn oversized_dimensions() {
        assert_eq!(
            generate_seeded(usize::MAX, usize::MAX, 1),
            Err(GenError::InvalidDimensions {
                cols: usize::MAX,
                rows: usize::MAX
            })
        );

        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            generate_seeded(too_wide, 1, 1),
            Err(GenError::InvalidDimensions {
                cols: too_wide,
                rows: 1
            })
        );
    }

    #[test]
    fn thread_random_generation() {
        for (cols, rows) in [(1, 1), (2, 2), (10, 10), (20, 15)] {
            let grid = generate(cols, rows).unwrap();
            assert_eq!((grid.cols(), grid.rows()), (cols, rows));
            assert!(grid.is_open(Dims(0, 0)));
            assert!(grid.is_open(grid.exit()));
        }
        assert!(generate(0, 0).is_err());
    }

    #[test]
    fn same_random_sequence_same_maze() {
        let mut a = Random::seed_from_u64(1234);
        let mut b = Random::seed_from_u64(1234);
        for _ in 0..5 {
            // both generators advance in lockstep over several mazes
            assert_eq!(
                generate_with(13, 9, &mut a).unwrap(),
                generate_with(13, 9, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn entrance_and_exit_are_open() {
        for seed in 0..50 {
            for (cols, rows) in [(2, 2), (3, 7), (10, 10), (20, 13), (2, 20)] {
                let grid = generate_seeded(cols, rows, seed).unwrap();
                assert_eq!(grid.cols(), cols);
                assert_eq!(grid.rows(), rows);
                assert!(grid.is_open(Dims(0, 0)));
                assert!(grid.is_open(Dims(rows as i32 - 1, cols as i32 - 1)));
            }
        }
    }

    #[test]
    fn carved_cells_form_a_tree() {
        for seed in 0..50 {
            let mut grid = Grid::new_walled(15, 12).unwrap();
            let carved = carve(&mut grid, &mut Random::seed_from_u64(seed));

            assert!(grid.is_tree_from(Dims::ZERO), "seed {}:\n{}", seed, grid);
            // every open cell is reachable from the entrance
            assert_eq!(grid.open_count(), carved);
            let reachable = grid.reachable_from(Dims::ZERO);
            assert_eq!(reachable.iter().filter(|&&b| b).count(), carved);
        }
    }

    #[test]
    fn generated_differs_from_carved_only_at_exit() {
        for seed in 0..20 {
            let mut carved = Grid::new_walled(11, 9).unwrap();
            carve(&mut carved, &mut Random::seed_from_u64(seed));
            let generated = generate_seeded(11, 9, seed).unwrap();

            let exit = generated.exit();
            for pos in generated.cells().iter_pos() {
                if pos != exit {
                    assert_eq!(generated.get(pos), carved.get(pos));
                }
            }

            // a reachable exit that only borders one carved cell keeps the tree intact
            if carved.is_open(exit) || carved.open_neighbor_count(exit) == 0 {
                assert!(generated.is_tree_from(Dims::ZERO));
            }
        }
    }

    #[test]
    fn only_open_and_wall_cells() {
        let grid = generate_seeded(12, 12, 7).unwrap();
        assert!(grid.cells().iter().all(|c| *c != CellState::Path));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = generate_seeded(17, 13, 42).unwrap();
        let b = generate_seeded(17, 13, 42).unwrap();
        assert_eq!(a, b);

        let differs = (0..10).any(|seed| generate_seeded(17, 13, seed).unwrap() != a);
        assert!(differs);
    }

    #[test]
    fn degenerate_sizes() {
        let single = generate_seeded(1, 1, 3).unwrap();
        assert_eq!(single.to_string(), " \n");

        // a corridor is carved straight through
        let row = generate_seeded(6, 1, 3).unwrap();
        assert_eq!(row.to_string(), "      \n");

        let col = generate_seeded(1, 4, 3).unwrap();
        assert_eq!(col.open_count(), 4);
    }

    #[test]
    fn two_by_two_is_an_l() {
        for seed in 0..20 {
            let grid = generate_seeded(2, 2, seed).unwrap();
            assert_eq!(grid.open_count(), 3, "{}", grid);
            assert!(grid.is_tree_from(Dims::ZERO));
        }
    }
}
