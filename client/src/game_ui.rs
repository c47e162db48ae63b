use common::games::tictactoe::{BOARD_WIDTH, Board, Difficulty, Mark, Outcome, Stats};

pub const HELP_TEXT: &str = "\
Commands:
  1-9        place your mark (X) on that cell
  n          start a new game
  e / m / h  easy, medium or hard from the next game
  f          toggle who moves first from the next game
  s          show win / draw / loss tallies
  c          clear tallies
  ?          show this help
  q          quit";

/// Draws the grid. Empty cells show their 1-based number when `show_hints`
/// is set; cells of a completed line are wrapped in brackets.
pub fn render_board(board: &Board, show_hints: bool) -> String {
    let winning_cells = board.winning_line().map(|line| line.cells);
    let mut rows = Vec::with_capacity(BOARD_WIDTH);

    for row in 0..BOARD_WIDTH {
        let cells: Vec<String> = (0..BOARD_WIDTH)
            .map(|col| {
                let index = row * BOARD_WIDTH + col;
                let symbol = match board.cells()[index] {
                    Mark::Empty if show_hints => (index + 1).to_string(),
                    mark => mark.symbol().to_string(),
                };
                if winning_cells.is_some_and(|cells| cells.contains(&index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "Your turn.",
        Outcome::Draw => "It's a tie!",
        Outcome::HumanWin => "You won!",
        Outcome::ComputerWin => "The computer won.",
    }
}

pub fn stats_message(stats: &Stats) -> String {
    format!(
        "Wins: {}  Draws: {}  Losses: {}",
        stats.wins, stats.draws, stats.losses
    )
}

pub fn difficulty_message(current: Difficulty, next: Difficulty) -> String {
    if current == next {
        format!("Level: {}", current)
    } else {
        format!("Level: {} ({} from the next game)", current, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_with_hints() {
        let rendered = render_board(&Board::new(), true);

        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_marks_without_hints() {
        let board: Board = "X.. .O. ...".parse().unwrap();

        let rendered = render_board(&board, false);

        assert_eq!(
            rendered,
            " X | . | . \n---+---+---\n . | O | . \n---+---+---\n . | . | . "
        );
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let board: Board = "XXX OO. ...".parse().unwrap();

        let rendered = render_board(&board, true);

        assert!(rendered.starts_with("[X]|[X]|[X]"));
    }

    #[test]
    fn test_stats_message() {
        let stats = Stats {
            wins: 2,
            draws: 5,
            losses: 1,
        };

        assert_eq!(stats_message(&stats), "Wins: 2  Draws: 5  Losses: 1");
    }

    #[test]
    fn test_difficulty_message_mentions_pending_change() {
        assert_eq!(difficulty_message(Difficulty::Hard, Difficulty::Hard), "Level: hard");
        assert_eq!(
            difficulty_message(Difficulty::Hard, Difficulty::Easy),
            "Level: hard (easy from the next game)"
        );
    }
}
