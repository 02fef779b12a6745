use crate::board::{MAX_MOVES, cell, cell_index, get_available_moves};
use crate::win_detector::check_win;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Stalemate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToe {
    pub board: [Mark; MAX_MOVES],
    pub glyphs: [char; 2],
    pub current: Mark,
}

impl TicTacToe {
    pub fn new(glyphs: [char; 2]) -> Self {
        Self {
            board: [Mark::Empty; MAX_MOVES],
            glyphs,
            // O as the sentinel last mover makes next_player() yield X
            // for the opening move.
            current: Mark::O,
        }
    }

    pub fn play_at(&mut self, row: usize, col: usize, mark: Mark) {
        self.board[cell_index(row, col)] = mark;
    }

    pub fn played_at(&self, row: usize, col: usize) -> Mark {
        self.board[cell_index(row, col)]
    }

    /// The mark that moves next. `current` is only ever X or O by
    /// construction; the X fallback keeps the flip total without panicking.
    pub fn next_player(&self) -> Mark {
        self.current.opponent().unwrap_or(Mark::X)
    }

    pub fn glyph(&self, mark: Mark) -> Option<char> {
        match mark {
            Mark::X => Some(self.glyphs[0]),
            Mark::O => Some(self.glyphs[1]),
            Mark::Empty => None,
        }
    }

    pub fn remaining(&self) -> Vec<usize> {
        get_available_moves(&self.board)
    }

    pub fn play(&mut self, index: usize) {
        self.current = self.next_player();
        let (row, col) = cell(index);
        self.play_at(row, col, self.current);
    }

    pub fn expand(&self) -> Vec<TicTacToe> {
        self.remaining()
            .into_iter()
            .map(|index| {
                let mut successor = self.clone();
                successor.play(index);
                successor
            })
            .collect()
    }

    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_win(&self.board) {
            return GameStatus::Won(winner);
        }

        let remaining = self.remaining();
        if remaining.is_empty() {
            return GameStatus::Stalemate;
        }

        if remaining.len() == 1 {
            // One cell left: the final move is forced, so the stalemate can
            // be declared before it is played.
            let mut last = self.clone();
            last.play(remaining[0]);
            if check_win(&last.board).is_none() {
                return GameStatus::Stalemate;
            }
        }

        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::win_detector::test_support::board_from;

    fn new_game() -> TicTacToe {
        TicTacToe::new(['X', 'O'])
    }

    #[test]
    fn test_new_game_is_empty_with_x_to_move() {
        let game = new_game();

        assert!(game.board.iter().all(|&mark| mark == Mark::Empty));
        assert_eq!(game.next_player(), Mark::X);
        assert_eq!(game.remaining().len(), MAX_MOVES);
    }

    #[test]
    fn test_opponent_flips_between_players() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_next_player_defaults_to_x_without_a_last_mover() {
        let mut game = new_game();
        game.current = Mark::Empty;

        assert_eq!(game.next_player(), Mark::X);
    }

    #[test]
    fn test_play_alternates_marks() {
        let mut game = new_game();

        game.play(4);
        assert_eq!(game.current, Mark::X);
        assert_eq!(game.played_at(1, 1), Mark::X);

        game.play(0);
        assert_eq!(game.current, Mark::O);
        assert_eq!(game.played_at(0, 0), Mark::O);
    }

    #[test]
    fn test_remaining_is_ascending() {
        let mut game = new_game();
        game.play(8);
        game.play(2);
        game.play(5);

        assert_eq!(game.remaining(), vec![0, 1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_expand_yields_one_successor_per_empty_cell() {
        let mut game = new_game();
        game.play(0);
        game.play(4);

        let successors = game.expand();
        assert_eq!(successors.len(), 7);

        for successor in &successors {
            assert_eq!(successor.current, game.next_player());

            let changed = game
                .board
                .iter()
                .zip(successor.board.iter())
                .filter(|(before, after)| before != after)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_expand_does_not_mutate_parent() {
        let game = new_game();
        let snapshot = game.clone();

        let _ = game.expand();

        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_status_reports_win() {
        let game = TicTacToe {
            board: board_from("XXX OO. ..."),
            glyphs: ['X', 'O'],
            current: Mark::X,
        };

        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_status_full_board_without_winner_is_stalemate() {
        let game = TicTacToe {
            board: board_from("XOX XOO OXX"),
            glyphs: ['X', 'O'],
            current: Mark::X,
        };

        assert!(game.remaining().is_empty());
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn test_status_declares_stalemate_one_move_early() {
        // Cell 8 is the only move left and X filling it wins nothing.
        let game = TicTacToe {
            board: board_from("XOX XOO OX."),
            glyphs: ['X', 'O'],
            current: Mark::O,
        };

        assert_eq!(game.remaining(), vec![8]);
        assert_eq!(game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn test_status_in_progress_when_last_cell_wins() {
        // X completes the main diagonal at cell 8, so no early stalemate.
        let game = TicTacToe {
            board: board_from("XOO OXX XO."),
            glyphs: ['X', 'O'],
            current: Mark::O,
        };

        assert_eq!(game.remaining(), vec![8]);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
