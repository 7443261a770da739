use super::board::Board;
use super::types::{GameOutcome, Mark, Position};

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Every line that wins the game: rows, then columns, then diagonals.
pub const WINNING_TRIPLES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

pub fn winning_triple(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    WINNING_TRIPLES.iter().copied().find(|triple| {
        triple
            .iter()
            .all(|&pos| board.cell(pos).and_then(|cell| cell.mark()) == Some(mark))
    })
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_triple(board, mark).is_some()
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_winner(board, Mark::Computer) && !is_winner(board, Mark::Human)
}

/// Classifies the board. A computer line is checked before a human line, so a
/// board where both sides hold a triple reports `ComputerWin`.
pub fn outcome(board: &Board) -> GameOutcome {
    if is_winner(board, Mark::Computer) {
        GameOutcome::ComputerWin
    } else if is_winner(board, Mark::Human) {
        GameOutcome::HumanWin
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_triple_wins_for_both_marks() {
        for mark in [Mark::Human, Mark::Computer] {
            for triple in WINNING_TRIPLES {
                let mut board = Board::new();
                for pos in triple {
                    board.apply_move(pos.row, pos.col, mark).unwrap();
                }
                assert!(is_winner(&board, mark), "{:?} should win on {:?}", mark, triple);
                assert!(!is_winner(&board, mark.opponent()));
                assert_eq!(winning_triple(&board, mark), Some(triple));
            }
        }
    }

    #[test]
    fn test_no_triple_no_winner() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]);
        assert!(!is_winner(&board, Mark::Computer));
        assert!(!is_winner(&board, Mark::Human));
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = Board::from_rows(["XX.", "OO.", "..."]);
        assert!(!is_winner(&board, Mark::Computer));
        assert!(!is_winner(&board, Mark::Human));
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_outcome_reports_winners() {
        let computer = Board::from_rows(["OO.", "XXX", "O.."]);
        assert_eq!(outcome(&computer), GameOutcome::ComputerWin);

        let human = Board::from_rows(["O.X", "OX.", "O.X"]);
        assert_eq!(outcome(&human), GameOutcome::HumanWin);
        assert_eq!(
            winning_triple(&human, Mark::Human),
            Some([p(0, 0), p(1, 0), p(2, 0)])
        );
    }

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        let board = Board::from_rows(["XXX", "OOX", "XOO"]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), GameOutcome::ComputerWin);
    }

    #[test]
    fn test_computer_line_takes_precedence_when_both_win() {
        let board = Board::from_rows(["XXX", "OOO", "..."]);
        assert!(is_winner(&board, Mark::Human));
        assert_eq!(outcome(&board), GameOutcome::ComputerWin);
    }

    /// Visits every board reachable by alternating play and returns how many
    /// unfinished ones were seen.
    fn check_reachable(board: &mut Board, turn: Mark) -> usize {
        let winner = is_winner(board, Mark::Computer) || is_winner(board, Mark::Human);
        if winner {
            assert!(!is_draw(board));
            assert!(outcome(board).is_terminal());
            return 0;
        }
        if board.occupied_count() == 9 {
            assert!(is_draw(board));
            assert_eq!(outcome(board), GameOutcome::Draw);
            return 0;
        }

        assert_eq!(outcome(board), GameOutcome::InProgress);
        assert!(!is_draw(board));

        let mut seen = 1;
        for pos in board.free_cells() {
            board.apply_move(pos.row, pos.col, turn).unwrap();
            seen += check_reachable(board, turn.opponent());
            board.undo_move(pos.row, pos.col);
        }
        seen
    }

    #[test]
    fn test_every_unfinished_reachable_board_is_in_progress() {
        for first in [Mark::Computer, Mark::Human] {
            let mut board = Board::new();
            let seen = check_reachable(&mut board, first);
            // Non-terminal nodes of the full game tree.
            assert_eq!(seen, 294_778);
            assert_eq!(board, Board::new());
        }
    }
}
