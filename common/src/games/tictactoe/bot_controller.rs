use crate::games::SessionRng;
use super::board::Board;
use super::error::InvalidState;
use super::types::{Difficulty, Mark};
use super::win_detector::check_win_at;

const WIN_SCORE: i32 = 1;
const DRAW_SCORE: i32 = 0;
const LOSS_SCORE: i32 = -1;

/// One way of choosing the computer's next cell.
pub trait MoveStrategy {
    fn select_move(&self, board: &Board, rng: &mut SessionRng) -> Result<usize, InvalidState>;
}

/// Uniform choice among the empty cells.
pub struct RandomStrategy;

/// Win if possible, else block, else random.
pub struct HeuristicStrategy;

/// Full game-tree search; never loses.
pub struct MinimaxStrategy;

impl MoveStrategy for RandomStrategy {
    fn select_move(&self, board: &Board, rng: &mut SessionRng) -> Result<usize, InvalidState> {
        let available_moves = playable_moves(board)?;
        calculate_random_move(&available_moves, rng)
    }
}

impl MoveStrategy for HeuristicStrategy {
    fn select_move(&self, board: &Board, rng: &mut SessionRng) -> Result<usize, InvalidState> {
        let available_moves = playable_moves(board)?;
        let mut scratch = *board;

        if let Some(index) = find_winning_move(&mut scratch, Mark::Computer, &available_moves) {
            return Ok(index);
        }

        if let Some(index) = find_winning_move(&mut scratch, Mark::Human, &available_moves) {
            return Ok(index);
        }

        calculate_random_move(&available_moves, rng)
    }
}

impl MoveStrategy for MinimaxStrategy {
    fn select_move(&self, board: &Board, _rng: &mut SessionRng) -> Result<usize, InvalidState> {
        calculate_minimax_move(board)
    }
}

impl Difficulty {
    pub fn strategy(&self) -> &'static dyn MoveStrategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium => &HeuristicStrategy,
            Difficulty::Hard => &MinimaxStrategy,
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Result<usize, InvalidState> {
    difficulty.strategy().select_move(board, rng)
}

/// Empty cells of a board that is still being played.
fn playable_moves(board: &Board) -> Result<Vec<usize>, InvalidState> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(InvalidState::BoardFull);
    }

    let outcome = board.evaluate();
    if outcome.is_terminal() {
        return Err(InvalidState::GameOver(outcome));
    }

    Ok(available_moves)
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Result<usize, InvalidState> {
    rng.choose(available_moves).ok_or(InvalidState::BoardFull)
}

/// Lowest index at which `mark` completes a line.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &index in moves {
        board.set_cell(index, mark);
        let winner = check_win_at(board.cells(), index);
        board.set_cell(index, Mark::Empty);

        if winner == Some(mark) {
            return Some(index);
        }
    }
    None
}

/// Picks the computer move with the best minimax value, lowest index on ties.
/// Scores are +1 / 0 / -1 from the computer's side with no depth discount.
pub fn calculate_minimax_move(board: &Board) -> Result<usize, InvalidState> {
    let available_moves = playable_moves(board)?;
    let mut scratch = *board;

    let mut best_move = available_moves[0];
    let mut best_score = LOSS_SCORE - 1;

    for index in available_moves {
        scratch.set_cell(index, Mark::Computer);
        let score = minimax(&mut scratch, index, false, best_score, WIN_SCORE);
        scratch.set_cell(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = index;
        }
        if best_score == WIN_SCORE {
            break;
        }
    }

    Ok(best_move)
}

/// Value of `board` just after a mark landed on `last_index`. Alpha-beta
/// bounds only cut branches that cannot change the value seen by the caller.
fn minimax(
    board: &mut Board,
    last_index: usize,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win_at(board.cells(), last_index) {
        return if winner == Mark::Computer {
            WIN_SCORE
        } else {
            LOSS_SCORE
        };
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = LOSS_SCORE;
        for index in moves {
            board.set_cell(index, Mark::Computer);
            let eval = minimax(board, index, false, alpha, beta);
            board.set_cell(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = WIN_SCORE;
        for index in moves {
            board.set_cell(index, Mark::Human);
            let eval = minimax(board, index, true, alpha, beta);
            board.set_cell(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::games::tictactoe::types::Outcome;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn rng() -> SessionRng {
        SessionRng::new(12345)
    }

    #[test]
    fn test_easy_returns_available_cell() {
        let board = board("XO. .X. ..O");
        let available = board.available_moves();
        let mut rng = rng();

        for _ in 0..200 {
            let index = calculate_move(Difficulty::Easy, &board, &mut rng).unwrap();
            assert!(available.contains(&index));
        }
    }

    #[test]
    fn test_easy_reaches_every_available_cell() {
        let board = board("X.. ... ..O");
        let mut rng = rng();
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            seen.insert(calculate_move(Difficulty::Easy, &board, &mut rng).unwrap());
        }

        let expected: HashSet<usize> = board.available_moves().into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_easy_is_reproducible_for_a_seed() {
        let board = Board::new();
        let mut first = SessionRng::new(99);
        let mut second = SessionRng::new(99);

        for _ in 0..20 {
            assert_eq!(
                calculate_move(Difficulty::Easy, &board, &mut first),
                calculate_move(Difficulty::Easy, &board, &mut second)
            );
        }
    }

    #[test]
    fn test_medium_completes_own_line() {
        let board = board("OO. X.. ..X");

        assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_medium_blocks_human_line() {
        let board = board("XX. .O. ...");

        assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_medium_prefers_win_over_block() {
        let board = board("OO. XX. ..X");

        assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_medium_takes_lowest_winning_index() {
        // Computer can finish the top row at 2, the middle column at 7 or the diagonal at 8.
        let board = board("OO. XOX X..");

        assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_medium_blocks_lowest_threat() {
        // Human threatens 2 (top row) and 6 (left column).
        let board = board("XX. XO. ..O");

        assert_eq!(calculate_move(Difficulty::Medium, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_medium_falls_back_to_available_cell() {
        let board = board("X.. ... ...");
        let available = board.available_moves();
        let mut rng = rng();

        for _ in 0..100 {
            let index = calculate_move(Difficulty::Medium, &board, &mut rng).unwrap();
            assert!(available.contains(&index));
        }
    }

    #[test]
    fn test_hard_takes_immediate_win() {
        let board = board("OO. XX. X..");

        assert_eq!(calculate_move(Difficulty::Hard, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_hard_blocks_threat() {
        let board = board("XX. .O. ...");

        assert_eq!(calculate_move(Difficulty::Hard, &board, &mut rng()), Ok(2));
    }

    #[test]
    fn test_hard_answers_center_with_a_corner() {
        let board = board("... .X. ...");

        assert_eq!(calculate_move(Difficulty::Hard, &board, &mut rng()), Ok(0));
    }

    #[test]
    fn test_hard_on_empty_board_takes_lowest_index() {
        assert_eq!(calculate_minimax_move(&Board::new()), Ok(0));
    }

    #[test]
    fn test_hard_does_not_modify_board() {
        let board = board("X.. .O. ..X");
        let before = board;

        calculate_move(Difficulty::Hard, &board, &mut rng()).unwrap();

        assert_eq!(board, before);
    }

    #[test]
    fn test_every_strategy_rejects_finished_board() {
        let won = board("XXX OO. ...");
        let drawn = board("XOX XOO OXX");

        for difficulty in Difficulty::ALL {
            assert_eq!(
                calculate_move(difficulty, &won, &mut rng()),
                Err(InvalidState::GameOver(Outcome::HumanWin))
            );
            assert_eq!(
                calculate_move(difficulty, &drawn, &mut rng()),
                Err(InvalidState::BoardFull)
            );
        }
    }

    fn assert_hard_never_loses(board: &Board, human_to_move: bool) {
        match board.evaluate() {
            Outcome::HumanWin => panic!("computer lost on board:\n{}", board),
            Outcome::InProgress => {}
            _ => return,
        }

        if human_to_move {
            for index in board.available_moves() {
                let mut next = *board;
                next.place(Mark::Human, index).unwrap();
                assert_hard_never_loses(&next, false);
            }
        } else {
            let index = calculate_minimax_move(board).unwrap();
            let mut next = *board;
            next.place(Mark::Computer, index).unwrap();
            assert_hard_never_loses(&next, true);
        }
    }

    #[test]
    fn test_hard_never_loses_when_human_starts() {
        assert_hard_never_loses(&Board::new(), true);
    }

    #[test]
    fn test_hard_never_loses_when_computer_starts() {
        assert_hard_never_loses(&Board::new(), false);
    }
}
