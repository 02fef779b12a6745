use clap::Parser;
use tictactoe_core::{
    BOARD_SIZE, GameStatus, SessionRng, TicTacToe, best_move, is_valid_move, log, logger,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Play as X; you move first.
    #[arg(short = 'x')]
    play_x: bool,

    /// Play as O; the computer moves first.
    #[arg(short = 'o')]
    play_o: bool,

    /// Seed for the session random source, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("session seed: {}", rng.seed());

    let mut game = TicTacToe::new(['X', 'O']);

    // With no side chosen on the command line, flip for it.
    if !args.play_x && (args.play_o || rng.random_range(0..2) == 0) {
        println!("You are playing O. Enter a # and hit return to move.");
        game = best_move(&game, &mut rng).await;
    } else {
        println!("You are playing X. Enter a # and hit return to move.");
    }
    print!("{}", render(&game));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Ok(index) = line.trim().parse::<usize>() else {
            continue;
        };
        if !is_valid_move(&game.board, index) {
            continue;
        }

        game.play(index);
        print!("{}", render(&game));
        if report_game_over(&game) {
            break;
        }

        game = best_move(&game, &mut rng).await;
        print!("{}", render(&game));
        if report_game_over(&game) {
            break;
        }
    }

    Ok(())
}

fn report_game_over(game: &TicTacToe) -> bool {
    match game.status() {
        GameStatus::Won(winner) => {
            if let Some(glyph) = game.glyph(winner) {
                println!("{glyph} wins!");
            }
            true
        }
        GameStatus::Stalemate => {
            println!("Stalemate!");
            true
        }
        GameStatus::InProgress => false,
    }
}

/// Renders the grid with glyphs for played cells and the cell number for
/// empty ones, so the player can see what to type.
fn render(game: &TicTacToe) -> String {
    let mut out = String::from("\n");
    for row in 0..BOARD_SIZE {
        out.push(' ');
        for col in 0..BOARD_SIZE {
            match game.glyph(game.played_at(row, col)) {
                Some(glyph) => out.push(glyph),
                None => out.push_str(&(row * BOARD_SIZE + col).to_string()),
            }
            if col < BOARD_SIZE - 1 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row < BOARD_SIZE - 1 {
            out.push_str("---+---+---\n");
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let game = TicTacToe::new(['X', 'O']);

        let expected = "\n 0 | 1 | 2\n---+---+---\n 3 | 4 | 5\n---+---+---\n 6 | 7 | 8\n\n";
        assert_eq!(render(&game), expected);
    }

    #[test]
    fn test_render_shows_glyphs_for_played_cells() {
        let mut game = TicTacToe::new(['X', 'O']);
        game.play(4);
        game.play(0);

        let expected = "\n O | 1 | 2\n---+---+---\n 3 | X | 5\n---+---+---\n 6 | 7 | 8\n\n";
        assert_eq!(render(&game), expected);
    }

    #[test]
    fn test_game_over_reporting() {
        let mut game = TicTacToe::new(['X', 'O']);
        assert!(!report_game_over(&game));

        for index in [0, 3, 1, 4, 2] {
            game.play(index);
        }
        assert!(report_game_over(&game));
    }
}
