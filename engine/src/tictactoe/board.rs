use super::error::GameError;
use super::types::{Cell, Mark, Position};

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty(0); BOARD_SIZE]; BOARD_SIZE];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = Cell::empty_at(Position::new(row, col));
            }
        }
        Self { cells }
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Places `mark` at (`row`, `col`). The board is left untouched on error.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !self.cells[row][col].is_free() {
            return Err(GameError::CellOccupied(pos));
        }
        self.cells[row][col] = Cell::from(mark);
        Ok(())
    }

    /// Restores the original label of a square. Out-of-board coordinates are ignored.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        let pos = Position::new(row, col);
        if pos.is_on_board() {
            self.cells[row][col] = Cell::empty_at(pos);
        }
    }

    pub fn free_cells(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (row, cells_row) in self.cells.iter().enumerate() {
            for (col, cell) in cells_row.iter().enumerate() {
                if cell.is_free() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|cell| !cell.is_free()))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_free())
            .count()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                match symbol {
                    'X' => board.cells[row][col] = Cell::Computer,
                    'O' => board.cells[row][col] = Cell::Human,
                    _ => {}
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
