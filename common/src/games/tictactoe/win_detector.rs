use super::types::{BOARD_SIZE, Mark, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Mark; BOARD_SIZE]) -> Option<Mark> {
    check_win_with_line(cells).map(|line| line.mark)
}

pub fn check_win_with_line(cells: &[Mark; BOARD_SIZE]) -> Option<WinningLine> {
    LINES
        .iter()
        .find(|line| is_complete(cells, line))
        .map(|line| WinningLine::new(cells[line[0]], *line))
}

/// Only looks at the lines through `index`; enough after a single placement.
pub fn check_win_at(cells: &[Mark; BOARD_SIZE], index: usize) -> Option<Mark> {
    let mark = cells[index];
    if mark == Mark::Empty {
        return None;
    }

    LINES
        .iter()
        .filter(|line| line.contains(&index))
        .any(|line| is_complete(cells, line))
        .then_some(mark)
}

fn is_complete(cells: &[Mark; BOARD_SIZE], line: &[usize; 3]) -> bool {
    let mark = cells[line[0]];
    mark != Mark::Empty && line.iter().all(|&i| cells[i] == mark)
}
