use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::is_winner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

/// Exhaustive minimax over the remaining game. Scores are from the computer's
/// side: +1 won, -1 lost, 0 drawn. Wins score the same at any depth.
///
/// Trial moves are placed on `board` and undone before returning, so the board
/// is unchanged afterwards.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    search(board, maximizing, &mut SearchStats::default())
}

fn search(board: &mut Board, maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if is_winner(board, Mark::Computer) {
        return 1;
    }
    if is_winner(board, Mark::Human) {
        return -1;
    }

    let moves = board.free_cells();
    if moves.is_empty() {
        return 0;
    }

    let mark = if maximizing { Mark::Computer } else { Mark::Human };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for pos in moves {
        if board.apply_move(pos.row, pos.col, mark).is_err() {
            continue;
        }
        let score = search(board, !maximizing, stats);
        board.undo_move(pos.row, pos.col);

        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// Scores every free cell, row-major, as a computer move answered by a
/// perfect opponent.
pub fn evaluate_moves(board: &mut Board) -> Vec<(Position, i32)> {
    evaluate_moves_with_stats(board, &mut SearchStats::default())
}

fn evaluate_moves_with_stats(board: &mut Board, stats: &mut SearchStats) -> Vec<(Position, i32)> {
    let mut scored = Vec::new();
    for pos in board.free_cells() {
        if board.apply_move(pos.row, pos.col, Mark::Computer).is_err() {
            continue;
        }
        let score = search(board, false, stats);
        board.undo_move(pos.row, pos.col);
        scored.push((pos, score));
    }
    scored
}

pub fn best_move(board: &mut Board) -> Option<Position> {
    best_move_with_stats(board).0
}

/// Highest scoring cell; on equal scores the first one in row-major order wins.
pub fn best_move_with_stats(board: &mut Board) -> (Option<Position>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut best = None;
    let mut best_score = i32::MIN;

    for (pos, score) in evaluate_moves_with_stats(board, &mut stats) {
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    (best, stats)
}

/// Picks and plays the computer's move. The caller checks for a finished game
/// first: on a full board this returns `None` and changes nothing.
pub fn choose_computer_move(board: &mut Board) -> Option<Position> {
    let pos = best_move(board)?;
    board.apply_move(pos.row, pos.col, Mark::Computer).ok()?;
    Some(pos)
}
