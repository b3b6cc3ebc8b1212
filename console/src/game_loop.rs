use std::io::{self, BufRead, Write};

use common::games::connect::{GameSession, GameStatus, MoveOutcome};
use common::log;

use crate::command::{Command, parse_command};
use crate::render::render_board;

const HELP: &str = "Commands: `row column` to place, `new` to restart, `quit` to exit";

pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    log!(
        "Game started: {}x{} board, {} in a row",
        session.engine().board_size(),
        session.engine().board_size(),
        session.engine().win_length()
    );
    write!(output, "{}", render_board(session.engine()))?;
    write_prompt(session, output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Err(message) => writeln!(output, "{}", message)?,
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::New) => {
                session.restart().map_err(io::Error::other)?;
                log!("Game restarted");
                write!(output, "{}", render_board(session.engine()))?;
            }
            Ok(Command::Place { row, column }) => {
                play_move(session, row, column, output)?;
            }
        }
        write_prompt(session, output)?;
    }

    Ok(())
}

fn play_move<W: Write>(
    session: &mut GameSession,
    row: i64,
    column: i64,
    output: &mut W,
) -> io::Result<()> {
    match session.play(row, column) {
        Err(e) => writeln!(output, "{}", e),
        Ok(MoveOutcome::Rejected) => writeln!(output, "Move rejected: ({}, {})", row, column),
        Ok(MoveOutcome::Placed { status, .. }) => {
            write!(output, "{}", render_board(session.engine()))?;
            match status {
                GameStatus::Won(symbol) => {
                    let lines = session.engine().get_win_conditions().len();
                    log!("{} won, completing {} line(s)", symbol, lines);
                    writeln!(output, "{} wins!", symbol)
                }
                GameStatus::Draw => {
                    log!("Game ended in a draw");
                    writeln!(output, "Draw!")
                }
                GameStatus::InProgress => Ok(()),
            }
        }
    }
}

fn write_prompt<W: Write>(session: &GameSession, output: &mut W) -> io::Result<()> {
    if session.status().is_over() {
        writeln!(output, "Game over. Type `new` to play again or `quit` to exit.")
    } else {
        writeln!(output, "{} to move:", session.current_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::connect::{FirstPlayer, Position, Symbol};
    use common::logger;
    use std::io::Cursor;

    fn run_script(session: &mut GameSession, script: &str) -> String {
        logger::init_logger(Some("Test".to_string()));
        let mut output = Vec::new();
        run_game(session, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_win_is_announced_and_board_frozen() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        let output = run_script(&mut session, "0 0\n1 0\n0 1\n1 1\n0 2\n2 2\n");

        assert!(output.contains("x wins!"));
        assert!(output.contains("Move rejected: (2, 2)"));
        assert_eq!(session.status(), GameStatus::Won(Symbol::X));
        assert_eq!(session.engine().get_symbol(Position::new(2, 2)), None);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        let output = run_script(&mut session, "1 1\n1 1\n");

        assert!(output.contains("Move rejected: (1, 1)"));
        assert_eq!(session.current_symbol(), Symbol::O);
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        let output = run_script(&mut session, "5 5\nfoo\n");

        assert!(output.contains("Coordinate (5, 5) is outside the board"));
        assert!(output.contains("Invalid row 'foo'"));
        assert_eq!(session.engine().occupied_count(), 0);
    }

    #[test]
    fn test_draw_then_new_game() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        let output = run_script(
            &mut session,
            "0 0\n2 2\n1 1\n2 0\n2 1\n0 1\n1 0\n1 2\n0 2\nnew\n",
        );

        assert!(output.contains("Draw!"));
        assert_eq!(session.engine().occupied_count(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = GameSession::new(3, 3, FirstPlayer::O).unwrap();
        run_script(&mut session, "quit\n0 0\n");
        assert_eq!(session.engine().occupied_count(), 0);
    }
}
