use std::fmt;

use crate::{
    array::Array2D,
    dims::{Dims, DIRECTIONS},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Wall,
    Open,
    /// Either a cell on a shown path, or a cell currently being visited by the solver.
    Path,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    /// `Path` cells are open too, they are just marked.
    pub fn is_open(self) -> bool {
        !self.is_wall()
    }

    pub fn glyph(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Open => ' ',
            CellState::Path => '*',
        }
    }
}

/// Rectangular maze board, `rows × cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub(crate) cells: Array2D<CellState>,
}

impl Grid {
    /// Grid with every cell set to [`CellState::Wall`].
    ///
    /// Returns `None` if any of the dimensions is zero, doesn't fit into a
    /// coordinate, or the cell count can't be allocated.
    pub fn new_walled(cols: usize, rows: usize) -> Option<Self> {
        if cols == 0 || rows == 0 {
            return None;
        }

        i32::try_from(cols).ok()?;
        i32::try_from(rows).ok()?;
        let count = cols.checked_mul(rows)?;
        if count > isize::MAX as usize / std::mem::size_of::<CellState>() {
            return None;
        }

        Some(Self {
            cells: Array2D::new(CellState::Wall, cols, rows),
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    /// Top left cell, where carving starts.
    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    /// Bottom right cell.
    pub fn exit(&self) -> Dims {
        Dims(self.rows() as i32 - 1, self.cols() as i32 - 1)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Dims) -> Option<CellState> {
        self.cells.get(pos).copied()
    }

    /// Sets the state of a cell, returns `false` if `pos` is outside of the grid.
    pub fn set(&mut self, pos: Dims, state: CellState) -> bool {
        match self.cells.get_mut(pos) {
            Some(cell) => {
                *cell = state;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, pos: Dims) -> bool {
        self.get(pos).is_some_and(CellState::is_open)
    }

    pub fn is_wall(&self, pos: Dims) -> bool {
        self.get(pos).is_some_and(CellState::is_wall)
    }

    pub fn cells(&self) -> &Array2D<CellState> {
        &self.cells
    }

    /// In-bounds 4-directional neighbours, in up, down, left, right order.
    pub fn neighbors(&self, pos: Dims) -> impl Iterator<Item = Dims> + '_ {
        DIRECTIONS
            .into_iter()
            .map(move |dir| pos + dir)
            .filter(move |next| self.is_in_bounds(*next))
    }

    pub fn open_neighbor_count(&self, pos: Dims) -> usize {
        self.neighbors(pos).filter(|n| self.is_open(*n)).count()
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Mask of all cells reachable from `from` through open cells.
    ///
    /// The mask is empty when `from` is a wall or out of bounds.
    pub fn reachable_from(&self, from: Dims) -> Array2D<bool> {
        let mut mask = Array2D::new(false, self.cols(), self.rows());
        if !self.is_open(from) {
            return mask;
        }

        let mut stack = vec![from];
        mask[from] = true;
        while let Some(pos) = stack.pop() {
            for next in self.neighbors(pos) {
                if self.is_open(next) && !mask[next] {
                    mask[next] = true;
                    stack.push(next);
                }
            }
        }

        mask
    }

    /// Counts adjacent pairs of cells that are both set in `mask` and both open.
    pub fn open_edge_count_among(&self, mask: &Array2D<bool>) -> usize {
        let inside = |pos: Dims| mask.get(pos).copied().unwrap_or(false) && self.is_open(pos);

        self.cells
            .iter_pos()
            .filter(|pos| inside(*pos))
            .map(|pos| {
                // only look down and right so every edge is counted once
                [Dims(1, 0), Dims(0, 1)]
                    .into_iter()
                    .filter(|off| inside(pos + *off))
                    .count()
            })
            .sum()
    }

    /// Whether the open cells reachable from `from` form a tree, that is they have
    /// exactly one edge less than cells.
    pub fn is_tree_from(&self, from: Dims) -> bool {
        let mask = self.reachable_from(from);
        let cells = mask.iter().filter(|&&b| b).count();
        if cells == 0 {
            return false;
        }

        self.open_edge_count_among(&mask) == cells - 1
    }

    /// Wall mask, `true` for walls. Marks are ignored, so the mask of a grid
    /// stays the same no matter what the solver did with it.
    pub fn classification(&self) -> Array2D<bool> {
        self.cells.map(|c| c.is_wall())
    }

    /// Copy of the grid with all cells of `path` marked as [`CellState::Path`].
    pub fn with_path(&self, path: &Path) -> Grid {
        let mut grid = self.clone();
        for pos in path.iter() {
            grid.set(*pos, CellState::Path);
        }
        grid
    }

    /// Resets every [`CellState::Path`] mark back to [`CellState::Open`].
    pub fn clear_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == CellState::Path {
                *cell = CellState::Open;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|c| c.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
