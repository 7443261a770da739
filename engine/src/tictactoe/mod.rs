mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod validate;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use bot_controller::{
    SearchStats, best_move, best_move_with_stats, choose_computer_move, evaluate_moves, minimax,
};
pub use error::GameError;
pub use game_state::{MoveRecord, TicTacToeGameState};
pub use types::{Cell, GameOutcome, Mark, Position};
pub use validate::{parse_move_index, parse_move_input, parse_starting_player, validate_human_move};
pub use win_detector::{WINNING_TRIPLES, is_draw, is_winner, outcome, winning_triple};
