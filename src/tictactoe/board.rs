//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }
}

/// A mark placed by one of the two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Human,
    Computer,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Human => Cell::Human,
            Mark::Computer => Cell::Computer,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The 3x3 game board
///
/// Cells are stored row-major, so position `row * 3 + col` holds the cell at
/// `(row, col)`. Only 9 bytes, so `Copy` is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Raw cell array, row-major
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a coordinate
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if `row` or `col` is outside `[0, 2]`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, crate::Error> {
        let idx = Self::index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Place a mark at a coordinate, mutating the board in place
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` if the coordinate is outside the board and
    /// `CellOccupied` if the target cell already holds a mark. The board is
    /// unchanged on either failure.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), crate::Error> {
        let idx = Self::index(row, col)?;
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::CellOccupied { row, col });
        }
        self.cells[idx] = mark.to_cell();
        Ok(())
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get all empty coordinates in row-major order
    ///
    /// Recomputed on every call; the board mutates between calls.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| (i / 3, i % 3))
            .collect()
    }

    /// Check if a mark has three in a line
    pub fn has_won(&self, mark: Mark) -> bool {
        super::lines::has_line(&self.cells, mark)
    }

    /// Get the winning mark, if any
    pub fn winner(&self) -> Option<Mark> {
        if self.has_won(Mark::Human) {
            Some(Mark::Human)
        } else if self.has_won(Mark::Computer) {
            Some(Mark::Computer)
        } else {
            None
        }
    }

    /// Check if the position is a draw (board full, no winner)
    ///
    /// Callers that check for a win after every placement can rely on this
    /// reducing to `is_full`.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    fn index(row: usize, col: usize) -> Result<usize, crate::Error> {
        if row > 2 || col > 2 {
            return Err(crate::Error::InvalidPosition { row, col });
        }
        Ok(row * 3 + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
