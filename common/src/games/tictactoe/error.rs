use std::fmt;

use super::types::{BOARD_SIZE, Mark, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfRange { index: usize },
    Occupied { index: usize, mark: Mark },
    EmptyMark { index: usize },
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfRange { index } => write!(
                f,
                "Cell {} is out of range, expected 0..{}",
                index, BOARD_SIZE
            ),
            IllegalMove::Occupied { index, mark } => {
                write!(f, "Cell {} is already marked {}", index, mark)
            }
            IllegalMove::EmptyMark { index } => {
                write!(f, "Cannot place an empty mark on cell {}", index)
            }
        }
    }
}

impl std::error::Error for IllegalMove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    BoardFull,
    GameOver(Outcome),
}

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidState::BoardFull => write!(f, "No cells left to play"),
            InvalidState::GameOver(outcome) => write!(f, "Game is already over: {}", outcome),
        }
    }
}

impl std::error::Error for InvalidState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove(IllegalMove),
    InvalidState(InvalidState),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove(e) => write!(f, "Illegal move: {}", e),
            GameError::InvalidState(e) => write!(f, "Invalid state: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove(e) => Some(e),
            GameError::InvalidState(e) => Some(e),
        }
    }
}

impl From<IllegalMove> for GameError {
    fn from(e: IllegalMove) -> Self {
        GameError::IllegalMove(e)
    }
}

impl From<InvalidState> for GameError {
    fn from(e: InvalidState) -> Self {
        GameError::InvalidState(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    WrongCellCount { found: usize },
    UnknownSymbol { symbol: char },
    IllegalPlacement(IllegalMove),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::WrongCellCount { found } => {
                write!(f, "Expected {} cells, found {}", BOARD_SIZE, found)
            }
            ParseBoardError::UnknownSymbol { symbol } => {
                write!(f, "Unknown cell symbol '{}'", symbol)
            }
            ParseBoardError::IllegalPlacement(e) => write!(f, "Illegal placement: {}", e),
        }
    }
}

impl std::error::Error for ParseBoardError {}

impl From<IllegalMove> for ParseBoardError {
    fn from(e: IllegalMove) -> Self {
        ParseBoardError::IllegalPlacement(e)
    }
}
