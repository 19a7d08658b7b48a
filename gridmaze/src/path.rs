use std::fmt;

use crate::{dims::Dims, grid::Grid};

/// Ordered sequence of cells from a start to an end, each step to a 4-neighbour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Dims>);

impl Path {
    pub fn new(cells: Vec<Dims>) -> Self {
        Path(cells)
    }

    pub fn start(&self) -> Option<Dims> {
        self.0.first().copied()
    }

    pub fn end(&self) -> Option<Dims> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cells(&self) -> &[Dims] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dims> {
        self.0.iter()
    }

    /// Checks that the path goes from `start` to `end` over open cells of `grid`,
    /// never repeats a cell and every step moves to a 4-neighbour.
    pub fn is_valid_on(&self, grid: &Grid, start: Dims, end: Dims) -> bool {
        if self.start() != Some(start) || self.end() != Some(end) {
            return false;
        }

        if !self.0.iter().all(|pos| grid.is_open(*pos)) {
            return false;
        }

        if !self.0.windows(2).all(|w| w[0].is_adjacent(w[1])) {
            return false;
        }

        let mut seen = self.0.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len() == self.0.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", pos)?;
        }
        Ok(())
    }
}
