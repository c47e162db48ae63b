use common::games::tictactoe::{BOARD_SIZE, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    NewGame,
    SetDifficulty(Difficulty),
    ToggleComputerFirst,
    ShowStats,
    ClearStats,
    Help,
    Quit,
}

/// Cells are typed 1-9 to match the numbers drawn on the board.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let input = line.trim().to_ascii_lowercase();

    if let Ok(cell) = input.parse::<usize>() {
        if (1..=BOARD_SIZE).contains(&cell) {
            return Ok(Command::Place(cell - 1));
        }
        return Err(format!("Cell must be between 1 and {}", BOARD_SIZE));
    }

    match input.as_str() {
        "n" | "new" => Ok(Command::NewGame),
        "e" | "easy" => Ok(Command::SetDifficulty(Difficulty::Easy)),
        "m" | "medium" => Ok(Command::SetDifficulty(Difficulty::Medium)),
        "h" | "hard" => Ok(Command::SetDifficulty(Difficulty::Hard)),
        "f" | "first" => Ok(Command::ToggleComputerFirst),
        "s" | "stats" => Ok(Command::ShowStats),
        "c" | "clear" => Ok(Command::ClearStats),
        "?" | "help" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err("Enter a cell number or ? for help".to_string()),
        other => Err(format!("Unknown command '{}', type ? for help", other)),
    }
}
