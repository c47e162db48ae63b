mod board;
mod bot_controller;
mod error;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    HeuristicStrategy, MinimaxStrategy, MoveStrategy, RandomStrategy, calculate_minimax_move,
    calculate_move,
};
pub use error::{GameError, IllegalMove, InvalidState, ParseBoardError};
pub use session::{GameSession, SessionSettings, Stats, TurnResult};
pub use types::{BOARD_SIZE, BOARD_WIDTH, Difficulty, Mark, Outcome, Position, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line};
