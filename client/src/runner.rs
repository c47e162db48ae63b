use std::io::{self, BufRead, Write};

use common::games::tictactoe::{GameError, GameSession, IllegalMove};
use common::log;

use crate::command::{Command, parse_command};
use crate::game_ui::{
    HELP_TEXT, difficulty_message, outcome_message, render_board, stats_message,
};

pub struct RunnerOptions {
    pub show_hints: bool,
}

/// Reads commands line by line until `q` or end of input.
pub fn run_game_loop<R, W>(
    session: &mut GameSession,
    options: &RunnerOptions,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", difficulty_message(session.difficulty(), session.next_difficulty()))?;
    print_board(session, options, output)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Place(index) => play_cell(session, options, index, output)?,
            Command::NewGame => match session.new_game() {
                Ok(opening) => {
                    writeln!(output, "New game. {}", difficulty_message(session.difficulty(), session.next_difficulty()))?;
                    if let Some(index) = opening {
                        writeln!(output, "Computer opened on {}.", index + 1)?;
                    }
                    print_board(session, options, output)?;
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::SetDifficulty(difficulty) => {
                session.set_difficulty(difficulty);
                writeln!(output, "{}", difficulty_message(session.difficulty(), session.next_difficulty()))?;
            }
            Command::ToggleComputerFirst => {
                session.set_computer_first(!session.computer_first());
                let first = if session.computer_first() { "Computer" } else { "You" };
                writeln!(output, "{} will move first from the next game.", first)?;
            }
            Command::ShowStats => writeln!(output, "{}", stats_message(&session.stats()))?,
            Command::ClearStats => {
                session.clear_stats();
                writeln!(output, "Tallies cleared.")?;
            }
            Command::Help => writeln!(output, "{}", HELP_TEXT)?,
            Command::Quit => break,
        }
    }

    log!("Leaving after {} games", session.stats().games_played());
    writeln!(output, "{}", stats_message(&session.stats()))?;
    Ok(())
}

fn play_cell<W: Write>(
    session: &mut GameSession,
    options: &RunnerOptions,
    index: usize,
    output: &mut W,
) -> io::Result<()> {
    if session.is_game_over() {
        writeln!(output, "The game is over, press n for a new one.")?;
        return Ok(());
    }

    match session.play(index) {
        Ok(turn) => {
            if let Some(computer_move) = turn.computer_move {
                writeln!(output, "Computer played {}.", computer_move + 1)?;
            }
            print_board(session, options, output)?;
            if turn.outcome.is_terminal() {
                writeln!(output, "{}", stats_message(&session.stats()))?;
                writeln!(output, "Press n for a new game.")?;
            }
        }
        Err(GameError::IllegalMove(IllegalMove::Occupied { index, .. })) => {
            writeln!(output, "Cell {} is already taken.", index + 1)?
        }
        Err(e) => writeln!(output, "{}", e)?,
    }
    Ok(())
}

fn print_board<W: Write>(
    session: &GameSession,
    options: &RunnerOptions,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", render_board(session.board(), options.show_hints))?;
    writeln!(output, "{}", outcome_message(session.outcome()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SessionRng;
    use common::games::tictactoe::{Difficulty, Mark, Outcome, SessionSettings};
    use std::io::Cursor;

    fn create_session(difficulty: Difficulty, computer_first: bool) -> GameSession {
        GameSession::new(
            SessionSettings {
                difficulty,
                computer_first,
            },
            SessionRng::new(2024),
        )
        .unwrap()
    }

    fn run(session: &mut GameSession, script: &str) -> String {
        let options = RunnerOptions { show_hints: true };
        let mut output = Vec::new();
        run_game_loop(session, &options, Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_place_then_quit() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "5\nq\n");

        assert!(output.contains("Computer played 1."));
        assert_eq!(session.board().get(4), Some(Mark::Human));
        assert_eq!(session.board().get(0), Some(Mark::Computer));
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "5\n5\nq\n");

        assert!(output.contains("Cell 5 is already taken."));
        assert_eq!(session.board().occupied_count(), 2);
    }

    #[test]
    fn test_invalid_input_is_reported_and_loop_continues() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "hello\n0\n5\n");

        assert!(output.contains("Unknown command 'hello'"));
        assert!(output.contains("Cell must be between 1 and 9"));
        assert_eq!(session.board().occupied_count(), 2);
    }

    #[test]
    fn test_full_game_against_hard_reports_result() {
        let mut session = create_session(Difficulty::Hard, false);
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(2);

        let output = run(&mut session, &script);

        assert!(session.is_game_over());
        assert_ne!(session.outcome(), Outcome::HumanWin);
        assert!(output.contains("Press n for a new game."));
        assert!(output.contains("The game is over, press n for a new one."));
        assert_eq!(session.stats().games_played(), 1);
    }

    #[test]
    fn test_new_game_with_computer_first() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "f\nn\nq\n");

        assert!(output.contains("Computer will move first from the next game."));
        assert!(output.contains("Computer opened on 1."));
        assert_eq!(session.board().occupied_count(), 1);
    }

    #[test]
    fn test_difficulty_change_is_announced() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "e\nn\n");

        assert!(output.contains("Level: hard (easy from the next game)"));
        assert_eq!(session.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_stats_commands() {
        let mut session = create_session(Difficulty::Hard, false);

        let output = run(&mut session, "s\nc\n?\n");

        assert!(output.contains("Wins: 0  Draws: 0  Losses: 0"));
        assert!(output.contains("Tallies cleared."));
        assert!(output.contains("Commands:"));
    }
}
