mod board;
mod evaluator;
mod game_state;
pub mod logger;
mod session_rng;
mod win_detector;

pub use board::{BOARD_SIZE, MAX_MOVES, cell, cell_index, get_available_moves, is_valid_move};
pub use evaluator::{MAX_DEPTH, Outcome, best_move, evaluate};
pub use game_state::{GameStatus, Mark, TicTacToe};
pub use session_rng::SessionRng;
pub use win_detector::check_win;
