//! Square board storage.

use super::{BoardSize, Cell, Position};
use serde::Serialize;
use tracing::instrument;

/// Smallest side length on which lines are meaningful.
pub const MIN_SIZE: usize = 2;

/// Error raised by direct board access.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The position is outside the board.
    #[display("Position {} is outside the {}x{} board", position, size, size)]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// The requested side length is too small.
    #[display("Board side must be at least 2, got {}", _0)]
    InvalidSize(usize),
}

impl std::error::Error for BoardError {}

/// Square board of `size * size` cells in row-major order.
///
/// The side length is fixed at construction. The board itself does not
/// enforce game rules; [`Board::set`] overwrites unconditionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is below 2.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::empty(size))
    }

    /// Creates an empty board of one of the supported types.
    #[instrument]
    pub fn with_size(size: BoardSize) -> Self {
        Self::empty(size.side())
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Checks if the position is on this board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.size)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Result<Cell, BoardError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self.cells[pos.index(self.size)])
    }

    /// Sets the cell at the given position, overwriting any mark.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        let index = pos.index(self.size);
        self.cells[index] = cell;
        Ok(())
    }

    /// Checks if a cell is empty. Positions off the board are never empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Ok(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Positions of all empty cells in row-major order.
    #[instrument(skip(self))]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Position::from_index(i, self.size))
            .collect()
    }

    fn out_of_bounds(&self, position: Position) -> BoardError {
        BoardError::OutOfBounds {
            position,
            size: self.size,
        }
    }
}
