//! Move search for `dilate-othello`: a static evaluator, plain negamax,
//! fail-soft alpha-beta, and root move selection.

pub mod eval;
pub mod search;

mod random;

pub use eval::{evaluate, evaluate_for, Heuristics};
pub use random::random_move;
pub use search::{negamax, negamax_alpha_beta, score_moves, ScoredMove, SearchConfig, INF};

use dilate_othello::{Game, Position};

/// Find the best move for the side to move, searching `depth` plies with
/// plain disc-count evaluation.
///
/// # Panics
/// If the side to move has no legal move.
pub fn best_move(game: &Game, depth: u32) -> Position {
    search::best_move(game, &SearchConfig::with_depth(depth))
}
