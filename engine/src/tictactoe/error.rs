use super::types::{Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    OutOfRange(i64),
    NotANumber(String),
    OutOfBounds { row: usize, col: usize },
    CellOccupied(Position),
    InvalidSelection(String),
    GameOver,
    NotYourTurn(Mark),
}

impl GameError {
    /// Errors the player can fix by typing something else.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::GameOver | GameError::NotYourTurn(_))
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::OutOfRange(_) => {
                write!(f, "Invalid move. Please choose a number between 1 and 9.")
            }
            GameError::NotANumber(input) => {
                write!(f, "'{}' is not a number. Please choose a number between 1 and 9.", input)
            }
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is outside the board", row, col)
            }
            GameError::CellOccupied(_) => {
                write!(f, "This square is already occupied. Choose another one.")
            }
            GameError::InvalidSelection(_) => {
                write!(f, "Invalid choice. Please enter 'first' or 'second'.")
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn(mark) => write!(f, "Not {:?}'s turn", mark),
        }
    }
}

impl std::error::Error for GameError {}
