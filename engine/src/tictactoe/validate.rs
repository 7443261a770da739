use std::num::IntErrorKind;

use super::board::Board;
use super::error::GameError;
use super::types::{Mark, Position};

/// Reads the number typed by the human. Range is checked separately so that
/// "0", "12" and integers too large for `i64` report `OutOfRange` rather
/// than `NotANumber`.
pub fn parse_move_index(input: &str) -> Result<i64, GameError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => GameError::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => GameError::OutOfRange(i64::MIN),
        _ => GameError::NotANumber(trimmed.to_string()),
    })
}

pub fn parse_move_input(input: &str) -> Result<Position, GameError> {
    position_for_index(parse_move_index(input)?)
}

fn position_for_index(index: i64) -> Result<Position, GameError> {
    usize::try_from(index)
        .ok()
        .and_then(Position::from_index)
        .ok_or(GameError::OutOfRange(index))
}

/// Checks a raw 1-9 index from the human against the board.
pub fn validate_human_move(board: &Board, index: i64) -> Result<Position, GameError> {
    let pos = position_for_index(index)?;
    match board.cell(pos) {
        Some(cell) if cell.is_free() => Ok(pos),
        _ => Err(GameError::CellOccupied(pos)),
    }
}

/// "first" means the human opens, "second" means the computer does.
pub fn parse_starting_player(input: &str) -> Result<Mark, GameError> {
    let choice = input.trim().to_lowercase();
    match choice.as_str() {
        "first" => Ok(Mark::Human),
        "second" => Ok(Mark::Computer),
        _ => Err(GameError::InvalidSelection(choice)),
    }
}
