use crate::board::{BOARD_SIZE, MAX_MOVES};
use crate::game_state::Mark;

const MAIN_DIAGONAL: [usize; BOARD_SIZE] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; BOARD_SIZE] = [2, 4, 6];

pub fn check_win(board: &[Mark; MAX_MOVES]) -> Option<Mark> {
    for i in 0..BOARD_SIZE {
        if let Some(winner) = scan_line(board, row(i)) {
            return Some(winner);
        }
        if let Some(winner) = scan_line(board, column(i)) {
            return Some(winner);
        }
    }

    // Each diagonal is a single line for the whole board, checked once.
    if let Some(winner) = scan_line(board, MAIN_DIAGONAL) {
        return Some(winner);
    }
    scan_line(board, ANTI_DIAGONAL)
}

fn row(index: usize) -> [usize; BOARD_SIZE] {
    let start = index * BOARD_SIZE;
    [start, start + 1, start + 2]
}

fn column(index: usize) -> [usize; BOARD_SIZE] {
    [index, index + BOARD_SIZE, index + 2 * BOARD_SIZE]
}

fn scan_line(board: &[Mark; MAX_MOVES], cells: [usize; BOARD_SIZE]) -> Option<Mark> {
    let mut tallies = [0usize; 2];
    for index in cells {
        let slot = match board[index] {
            // An empty cell means this line cannot hold three in a row.
            Mark::Empty => return None,
            Mark::X => 0,
            Mark::O => 1,
        };
        tallies[slot] += 1;
        if tallies[slot] == BOARD_SIZE {
            return Some(board[index]);
        }
    }
    None
}
