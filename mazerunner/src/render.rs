use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};
use gridmaze::{CellState, Grid, Path};

/// Text renderer, every cell is two characters wide so the maze looks square.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub colored: bool,
}

impl Renderer {
    pub fn new(colored: bool) -> Self {
        Renderer { colored }
    }

    pub fn cell(&self, state: CellState) -> String {
        if !self.colored {
            return state.glyph().to_string().repeat(2);
        }

        match state {
            CellState::Wall => "██".with(Color::White).to_string(),
            CellState::Open => "  ".to_string(),
            CellState::Path => "██".with(Color::Green).to_string(),
        }
    }

    pub fn grid(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for row in grid.cells().rows() {
            for state in row {
                out.push_str(&self.cell(*state));
            }
            out.push('\n');
        }
        out
    }

    /// Coordinates of the path, one per line.
    pub fn path_list(&self, path: &Path) -> String {
        let mut out = String::from("Solved path:\n");
        for (i, pos) in path.iter().enumerate() {
            // writing into a String can't fail
            let _ = writeln!(out, "{:>4}: {}", i, pos);
        }
        out
    }
}
