//! Entry points for a presentation layer: build a board, apply moves, read the
//! outcome and ask for the computer's reply.

use crate::games::SessionRng;
use crate::games::tictactoe::{Board, Difficulty, IllegalMove, InvalidState, Mark, Outcome, calculate_move};

pub fn new_game() -> Board {
    Board::new()
}

pub fn apply_move(board: &mut Board, mark: Mark, index: usize) -> Result<(), IllegalMove> {
    board.place(mark, index)
}

pub fn evaluate(board: &Board) -> Outcome {
    board.evaluate()
}

/// Uses a freshly seeded random source; pass your own through
/// `computer_move_with_rng` to make Easy and Medium reproducible.
pub fn computer_move(board: &Board, difficulty: Difficulty) -> Result<usize, InvalidState> {
    computer_move_with_rng(board, difficulty, &mut SessionRng::from_random())
}

pub fn computer_move_with_rng(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, InvalidState> {
    calculate_move(difficulty, board, rng)
}
