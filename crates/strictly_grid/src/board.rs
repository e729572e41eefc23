//! Cells and the square grid that holds them.

use crate::position::{Coordinates, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ownership marker left on a filled cell.
///
/// A mark names the player by seat (index into the game's turn order) and
/// carries the symbol, so win detection never has to look the player up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Mark {
    /// Seat of the owning player in turn order.
    pub seat: usize,
    /// Symbol drawn on the board.
    pub symbol: char,
}

/// Occupancy of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum CellState {
    /// Nobody has played here.
    Empty,
    /// A player's mark is on this cell.
    Filled,
}

/// A single board position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    owner: Option<Mark>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            owner: None,
        }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Position of this cell.
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Occupancy, derived from the owner so the two never disagree.
    pub fn state(&self) -> CellState {
        match self.owner {
            Some(_) => CellState::Filled,
            None => CellState::Empty,
        }
    }

    /// Owner mark, if filled.
    pub fn owner(&self) -> Option<Mark> {
        self.owner
    }

    /// Checks if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// Fills the cell with a mark.
    pub fn set_occupied(&mut self, mark: Mark) {
        self.owner = Some(mark);
    }

    /// Empties the cell.
    pub fn clear(&mut self) {
        self.owner = None;
    }

    fn render(&self) -> String {
        match self.owner {
            Some(mark) => format!("| {} |", mark.symbol),
            None => "|   |".to_string(),
        }
    }
}

/// N×N board. The shape is fixed at construction; only cell contents change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board of the given dimension.
    #[instrument]
    pub fn new(dimension: usize) -> Self {
        let grid = (0..dimension)
            .map(|row| (0..dimension).map(|col| Cell::new(row, col)).collect())
            .collect();
        Self { dimension, grid }
    }

    /// Side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Rows of cells, top to bottom.
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Cell at `(row, col)`.
    ///
    /// Callers validate bounds first; out-of-range indices panic like any
    /// slice index.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row][col]
    }

    /// Cell at a validated position.
    pub fn cell(&self, position: Position) -> &Cell {
        self.get(position.row, position.col)
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> &mut Cell {
        &mut self.grid[position.row][position.col]
    }

    /// Validates coordinates against this board.
    pub fn contains(&self, coordinates: Coordinates) -> Option<Position> {
        Position::within(coordinates, self.dimension)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.is_empty())
            .map(Cell::position)
            .collect()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Checks if every cell is filled.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    /// Text snapshot, one line per row.
    pub fn render(&self) -> String {
        self.grid
            .iter()
            .map(|row| row.iter().map(Cell::render).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
