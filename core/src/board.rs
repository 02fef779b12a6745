use crate::game_state::Mark;

pub const BOARD_SIZE: usize = 3;
pub const MAX_MOVES: usize = BOARD_SIZE * BOARD_SIZE;

pub fn cell(index: usize) -> (usize, usize) {
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

pub fn cell_index(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

pub fn get_available_moves(board: &[Mark; MAX_MOVES]) -> Vec<usize> {
    let mut moves = Vec::with_capacity(MAX_MOVES);
    for (index, &mark) in board.iter().enumerate() {
        if mark == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

pub fn is_valid_move(board: &[Mark; MAX_MOVES], index: usize) -> bool {
    index < MAX_MOVES && board[index] == Mark::Empty
}
