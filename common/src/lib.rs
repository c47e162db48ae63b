pub mod config;
pub mod engine;
pub mod games;
pub mod logger;

pub use engine::{apply_move, computer_move, computer_move_with_rng, evaluate, new_game};
pub use games::SessionRng;
pub use games::tictactoe::{
    Board, Difficulty, GameError, GameSession, IllegalMove, InvalidState, Mark, Outcome,
    SessionSettings, Stats, TurnResult,
};
