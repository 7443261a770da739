use std::io::{self, BufRead, Write};
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{
    GameOutcome, Mark, Position, TicTacToeGameState, parse_move_index, parse_starting_player,
};

use crate::config::MarksConfig;
use crate::prompt::prompt_line;
use crate::render::render_board;

const STARTING_PLAYER_PROMPT: &str =
    "Do you want to play first or second? (enter 'first' or 'second'): ";
const MOVE_PROMPT: &str = "Enter your move (1-9): ";

pub fn end_message(outcome: GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::HumanWin => Some("Congratulations! You won!"),
        GameOutcome::ComputerWin => Some("The computer won. Better luck next time!"),
        GameOutcome::Draw => Some("It's a tie!"),
        GameOutcome::InProgress => None,
    }
}

pub fn choose_starting_player<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Mark> {
    loop {
        let line = prompt_line(input, output, STARTING_PLAYER_PROMPT)?;
        match parse_starting_player(&line) {
            Ok(mark) => return Ok(mark),
            Err(e) => {
                log!("Rejected starting player choice {:?}", line.trim());
                writeln!(output, "{}", e)?;
            }
        }
    }
}

fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &mut TicTacToeGameState,
) -> io::Result<Position> {
    loop {
        let line = prompt_line(input, output, MOVE_PROMPT)?;
        match parse_move_index(&line).and_then(|index| game.place_human_move(index)) {
            Ok(pos) => return Ok(pos),
            Err(e) if e.is_recoverable() => {
                log!("Rejected move {:?}: {}", line.trim(), e);
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(io::Error::other(e)),
        }
    }
}

/// Plays one game to the end. With `first_player` unset the human is asked
/// who opens.
pub fn run_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    first_player: Option<Mark>,
    marks: &MarksConfig,
) -> io::Result<GameOutcome> {
    let first = match first_player {
        Some(mark) => mark,
        None => choose_starting_player(input, output)?,
    };
    log!("New game, {:?} moves first", first);

    let mut game = TicTacToeGameState::new(first);
    loop {
        match game.current_turn() {
            Mark::Human => {
                write!(output, "{}", render_board(game.board(), marks))?;
                let pos = read_human_move(input, output, &mut game)?;
                log!("Human took square {}", pos.index());
            }
            Mark::Computer => {
                let pos = game.play_computer_move().map_err(io::Error::other)?;
                let nodes = game.last_search().map(|stats| stats.nodes).unwrap_or(0);
                log!("Computer took square {} after searching {} positions", pos.index(), nodes);
            }
        }

        let outcome = game.outcome();
        if let Some(message) = end_message(outcome) {
            write!(output, "{}", render_board(game.board(), marks))?;
            writeln!(output, "{}", message)?;
            match game.winning_triple() {
                Some(line) => log!(
                    "Game over: {:?} on squares {:?}",
                    outcome,
                    line.map(|pos| pos.index())
                ),
                None => log!("Game over: {:?} after {} moves", outcome, game.history().len()),
            }
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str, first_player: Option<Mark>) -> (io::Result<GameOutcome>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        let result = run_game(&mut input, &mut output, first_player, &MarksConfig::default());
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_human_first_game_finishes_without_human_win() {
        let (result, output) = play("first\n5\n1\n2\n3\n4\n6\n7\n8\n9\n", None);
        let outcome = result.unwrap();
        assert!(outcome.is_terminal());
        assert_ne!(outcome, GameOutcome::HumanWin);
        assert!(output.starts_with(STARTING_PLAYER_PROMPT));
        assert!(output.ends_with(&format!("{}\n", end_message(outcome).unwrap())));
    }

    #[test]
    fn test_computer_answers_centre_with_first_corner() {
        let (result, output) = play("first\n5\n1\n2\n3\n4\n6\n7\n8\n9\n", None);
        assert!(result.is_ok());
        assert!(output.contains(
            "|   X   |   2   |   3   |\n+-------+-------+-------+\n|   4   |   O   |   6   |"
        ));
    }

    #[test]
    fn test_computer_first_game_reports_bad_input_and_continues() {
        let (result, output) = play("0\nabc\n1\n5\n2\n3\n4\n6\n7\n8\n9\n", Some(Mark::Computer));
        let outcome = result.unwrap();
        assert_ne!(outcome, GameOutcome::HumanWin);
        assert!(!output.contains(STARTING_PLAYER_PROMPT));
        assert!(output.contains("Invalid move. Please choose a number between 1 and 9."));
        assert!(output.contains("'abc' is not a number."));
        assert!(output.contains("This square is already occupied. Choose another one."));
        // The opening square was taken before the human was first asked.
        assert!(output.starts_with(
            "+-------+-------+-------+\n|   X   |   2   |   3   |"
        ));
    }

    #[test]
    fn test_starting_player_is_asked_again_after_bad_choice() {
        let (result, output) = play("third\nSECOND\n5\n2\n3\n4\n6\n7\n8\n9\n", None);
        assert!(result.is_ok());
        assert!(output.contains("Invalid choice. Please enter 'first' or 'second'."));
        assert_eq!(output.matches(STARTING_PLAYER_PROMPT).count(), 2);
    }

    #[test]
    fn test_closed_input_stops_the_game() {
        let (result, _) = play("first\n", None);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_end_messages() {
        assert_eq!(end_message(GameOutcome::Draw), Some("It's a tie!"));
        assert_eq!(
            end_message(GameOutcome::HumanWin),
            Some("Congratulations! You won!")
        );
        assert_eq!(
            end_message(GameOutcome::ComputerWin),
            Some("The computer won. Better luck next time!")
        );
        assert_eq!(end_message(GameOutcome::InProgress), None);
    }
}
