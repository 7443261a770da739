use tictactoe_engine::tictactoe::Board;

use crate::config::MarksConfig;

const SEPARATOR: &str = "+-------+-------+-------+";

/// Draws the board with the labels of free squares, one boxed row per line.
pub fn render_board(board: &Board, marks: &MarksConfig) -> String {
    let mut out = String::new();
    for row in board.rows() {
        out.push_str(SEPARATOR);
        out.push('\n');
        for &cell in row {
            out.push_str(&format!("|   {}   ", marks.symbol(cell)));
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}
