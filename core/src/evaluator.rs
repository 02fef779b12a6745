use futures_util::future::BoxFuture;
use tokio::sync::mpsc;

use crate::board::MAX_MOVES;
use crate::game_state::{Mark, TicTacToe};
use crate::session_rng::SessionRng;
use crate::win_detector::check_win;

/// Plies searched below the node the evaluation starts from. A game can run
/// to 9 plies, so openings are scored on a truncated horizon.
pub const MAX_DEPTH: usize = 5;

#[derive(Clone, Debug)]
pub struct Outcome {
    pub game: TicTacToe,
    pub score: i32,
}

/// Picks the computer's reply to `game`. Ties between equally-scored moves
/// are broken uniformly at random, so play varies between sessions with
/// different seeds.
pub async fn best_move(game: &TicTacToe, rng: &mut SessionRng) -> TicTacToe {
    let root_rng = SessionRng::new(rng.random());
    let outcome = evaluate(game.clone(), game.next_player(), 0, root_rng).await;
    outcome.game
}

/// Depth-bounded negamax over the full move tree, one task per successor.
///
/// `perspective` is the player the returned score is good for: always the
/// player about to move from `game`, never the one whose mark was placed
/// last. Passing it explicitly keeps the sign handling in one place.
pub fn evaluate(
    game: TicTacToe,
    perspective: Mark,
    depth: usize,
    mut rng: SessionRng,
) -> BoxFuture<'static, Outcome> {
    Box::pin(async move {
        debug_assert_eq!(perspective, game.next_player());

        if let Some(winner) = check_win(&game.board) {
            // Someone just completed a line; a shallow terminal outranks a
            // deep one. The mover into this state is perspective's opponent,
            // so in practice this is always a loss for `perspective`.
            let magnitude = (MAX_MOVES as i32 + 1) - depth as i32;
            let score = if winner == perspective {
                magnitude
            } else {
                -magnitude
            };
            return Outcome { game, score };
        }

        if depth == MAX_DEPTH {
            return Outcome { game, score: 0 };
        }

        // Fan out one task per legal move. Capacity covers the maximum
        // branching factor, so no sender ever blocks.
        let (tx, mut rx) = mpsc::channel::<Outcome>(MAX_MOVES);
        for successor in game.expand() {
            let tx = tx.clone();
            let successor_rng = SessionRng::new(rng.random());
            let successor_perspective = successor.next_player();
            tokio::spawn(async move {
                let result = evaluate(
                    successor.clone(),
                    successor_perspective,
                    depth + 1,
                    successor_rng,
                )
                .await;
                let _ = tx
                    .send(Outcome {
                        game: successor,
                        score: result.score,
                    })
                    .await;
            });
        }
        drop(tx);

        // The channel closes once every dispatched task has reported, so
        // this drains exactly one result per task, in arrival order.
        let mut best: Vec<Outcome> = Vec::with_capacity(MAX_MOVES);
        while let Some(mut outcome) = rx.recv().await {
            outcome.score = -outcome.score;
            match best.first().map(|top| top.score) {
                None => best.push(outcome),
                Some(top_score) if outcome.score == top_score => best.push(outcome),
                Some(top_score) if outcome.score > top_score => {
                    best.clear();
                    best.push(outcome);
                }
                Some(_) => {}
            }
        }

        if best.is_empty() {
            // No moves remained; the node reports itself with a neutral score.
            return Outcome { game, score: 0 };
        }

        let choice = rng.random_range(0..best.len());
        best.swap_remove(choice)
    })
}
