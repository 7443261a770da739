use super::board::Board;
use super::bot_controller::{SearchStats, best_move_with_stats};
use super::error::GameError;
use super::types::{GameOutcome, Mark, Position};
use super::validate::validate_human_move;
use super::win_detector::{outcome, winning_triple};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mark: Mark,
    pub position: Position,
}

/// One game between the human and the computer. The board is owned here and
/// only changes through the two move methods.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_turn: Mark,
    history: Vec<MoveRecord>,
    last_search: Option<SearchStats>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Mark) -> Self {
        Self {
            board: Board::new(),
            current_turn: first_player,
            history: Vec::new(),
            last_search: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome(&self.board)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    pub fn last_search(&self) -> Option<SearchStats> {
        self.last_search
    }

    pub fn winning_triple(&self) -> Option<[Position; 3]> {
        self.outcome()
            .winner()
            .and_then(|mark| winning_triple(&self.board, mark))
    }

    pub fn place_human_move(&mut self, index: i64) -> Result<Position, GameError> {
        self.check_turn(Mark::Human)?;
        let pos = validate_human_move(&self.board, index)?;
        self.commit(Mark::Human, pos)?;
        Ok(pos)
    }

    pub fn play_computer_move(&mut self) -> Result<Position, GameError> {
        self.check_turn(Mark::Computer)?;
        let (best, stats) = best_move_with_stats(&mut self.board);
        self.last_search = Some(stats);
        let pos = best.ok_or(GameError::GameOver)?;
        self.commit(Mark::Computer, pos)?;
        Ok(pos)
    }

    fn check_turn(&self, mark: Mark) -> Result<(), GameError> {
        if self.outcome().is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != mark {
            return Err(GameError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn commit(&mut self, mark: Mark, pos: Position) -> Result<(), GameError> {
        self.board.apply_move(pos.row, pos.col, mark)?;
        self.history.push(MoveRecord { mark, position: pos });
        self.current_turn = mark.opponent();
        Ok(())
    }
}
