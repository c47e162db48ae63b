use std::fmt;
use std::str::FromStr;

use super::error::{IllegalMove, ParseBoardError};
use super::types::{BOARD_SIZE, BOARD_WIDTH, Mark, Outcome, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// The 3×3 grid. Cells go from empty to a player's mark exactly once; the only
/// ways to change a board are `place` and `reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_SIZE],
        }
    }

    /// Replays placements in order, stopping at the first illegal one.
    pub fn from_placements<I>(placements: I) -> Result<Self, IllegalMove>
    where
        I: IntoIterator<Item = (Mark, usize)>,
    {
        let mut board = Self::new();
        for (mark, index) in placements {
            board.place(mark, index)?;
        }
        Ok(board)
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }

    pub fn place(&mut self, mark: Mark, index: usize) -> Result<(), IllegalMove> {
        if index >= BOARD_SIZE {
            return Err(IllegalMove::OutOfRange { index });
        }
        if mark == Mark::Empty {
            return Err(IllegalMove::EmptyMark { index });
        }
        let current = self.cells[index];
        if current != Mark::Empty {
            return Err(IllegalMove::Occupied { index, mark: current });
        }

        self.cells[index] = mark;
        Ok(())
    }

    /// Search-only write without the placement checks. Only used on scratch
    /// copies, where every write is undone with `Mark::Empty`.
    pub(crate) fn set_cell(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn evaluate(&self) -> Outcome {
        if let Some(outcome) = check_win(&self.cells).and_then(Outcome::win_for) {
            return outcome;
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = cells.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Accepts the compact nine-symbol form (`XO.`, with `-` or `_` also empty).
/// Whitespace and `|` separators are ignored, so `Display` output parses back.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != BOARD_SIZE {
            return Err(ParseBoardError::WrongCellCount {
                found: symbols.len(),
            });
        }

        let mut board = Board::new();
        for (index, symbol) in symbols.into_iter().enumerate() {
            match Mark::from_symbol(symbol) {
                Some(Mark::Empty) => {}
                Some(mark) => board.place(mark, index)?,
                None => return Err(ParseBoardError::UnknownSymbol { symbol }),
            }
        }
        Ok(board)
    }
}
