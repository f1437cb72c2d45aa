//! Depth-limited negamax search, with and without alpha-beta pruning.

use crate::eval::{evaluate, Heuristics};
use arrayvec::ArrayVec;
use dilate_othello::{Game, Position, NUM_SPACES};
use tracing::debug;

/// A score no evaluation can reach. Safe to negate.
pub const INF: i32 = i32::MAX;

/// How deep and with which weights [`best_move`] searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Zero searches like one.
    pub depth: u32,
    pub heuristics: Heuristics,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            heuristics: Heuristics::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// A root move and its value to the side making it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub position: Position,
    pub value: i32,
}

/// Value of `game` to the side to move, searching every line `depth` plies deep.
///
/// A side with no legal move is a leaf: it is evaluated, not passed.
pub fn negamax(game: &Game, depth: u32, heuristics: &Heuristics) -> i32 {
    let moves = game.valid_moves_bitboard();
    if depth == 0 || moves.is_empty() {
        return evaluate(game, heuristics);
    }

    moves.squares().fold(-INF, |best, cell| {
        let value = -negamax(&game.play_unchecked(cell), depth - 1, heuristics);
        best.max(value)
    })
}

/// Fail-soft alpha-beta over the window `[alpha, beta]`.
///
/// A node stops examining moves once `alpha >= beta`. With the full window
/// `[-INF, INF]` the result equals [`negamax`] at the same depth.
pub fn negamax_alpha_beta(
    game: &Game,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    heuristics: &Heuristics,
) -> i32 {
    let moves = game.valid_moves_bitboard();
    if depth == 0 || moves.is_empty() {
        return evaluate(game, heuristics);
    }

    let mut best = -INF;
    for cell in moves.squares() {
        let value = -negamax_alpha_beta(&game.play_unchecked(cell), -beta, -alpha, depth - 1, heuristics);
        best = best.max(value);
        alpha = alpha.max(value);

        // Fail high: the opponent already has a better line elsewhere.
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Every root move with its value, in row-major move order.
pub fn score_moves(game: &Game, depth: u32, heuristics: &Heuristics) -> Vec<ScoredMove> {
    root_scores(game, depth, heuristics).into_iter().collect()
}

/// Pick the move with the highest value; ties go to the earliest move in
/// row-major order.
///
/// # Panics
/// If the side to move has no legal move. Check [`Game::has_valid_move`] first.
pub fn best_move(game: &Game, config: &SearchConfig) -> Position {
    assert!(
        game.has_valid_move(),
        "best_move called without a legal move for {}",
        game.active_color()
    );

    let scores = root_scores(game, config.depth, &config.heuristics);
    let mut best = scores[0];
    for &candidate in &scores[1..] {
        if candidate.value > best.value {
            best = candidate;
        }
    }

    debug!(
        color = %game.active_color(),
        depth = config.depth,
        position = %best.position,
        value = best.value,
        "chose move"
    );
    best.position
}

fn root_scores(game: &Game, depth: u32, heuristics: &Heuristics) -> ArrayVec<ScoredMove, NUM_SPACES> {
    let child_depth = depth.saturating_sub(1);

    game.valid_moves_bitboard()
        .squares()
        .zip(game.valid_moves())
        .map(|(cell, position)| {
            let child = game.play_unchecked(cell);
            let value = -negamax_alpha_beta(&child, -INF, INF, child_depth, heuristics);
            debug!(%position, value, "scored root move");
            ScoredMove { position, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[&str]) -> Game {
        let mut game = Game::new();
        for square in moves {
            game.place_piece(square.parse().unwrap()).unwrap();
        }
        game
    }

    #[test]
    fn opening_moves_are_symmetric() {
        let game = Game::new();
        let heuristics = Heuristics::default();
        for (depth, expected) in [(1, 3), (2, 0), (3, 3), (4, -2)] {
            let scores = score_moves(&game, depth, &heuristics);
            assert_eq!(scores.len(), 4);
            assert!(scores.iter().all(|s| s.value == expected), "depth {}", depth);
            assert_eq!(negamax(&game, depth, &heuristics), expected);
        }
    }

    #[test]
    fn ties_go_to_the_first_move() {
        let game = Game::new();
        for depth in 0..4 {
            assert_eq!(best_move(&game, &SearchConfig::with_depth(depth)), Position::new(2, 3));
        }
    }

    #[test]
    fn depth_zero_searches_like_one() {
        let game = play(&["D3", "C3"]);
        let heuristics = Heuristics::default();
        assert_eq!(score_moves(&game, 0, &heuristics), score_moves(&game, 1, &heuristics));
    }

    #[test]
    fn scores_after_two_moves() {
        let game = play(&["D3", "C3"]);
        let values: Vec<_> = score_moves(&game, 2, &Heuristics::default())
            .iter()
            .map(|s| (s.position.to_string(), s.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("B3".to_string(), 0),
                ("C4".to_string(), -2),
                ("F5".to_string(), 0),
                ("E6".to_string(), 0),
            ]
        );
        assert_eq!(best_move(&game, &SearchConfig::with_depth(3)), Position::new(2, 1));
    }

    #[test]
    fn corner_bonus_changes_choice() {
        let game = play(&["D3", "C3", "B3", "B2", "B1"]);
        let plain = SearchConfig::with_depth(1);
        let cornered = SearchConfig {
            depth: 1,
            heuristics: Heuristics::with_corner_bonus(10),
        };
        assert_eq!(best_move(&game, &plain), Position::new(2, 4));
        assert_eq!(best_move(&game, &cornered), Position::new(0, 0));
    }

    #[test]
    fn alpha_beta_with_narrow_window_bounds_value() {
        let game = play(&["D3", "C3"]);
        let heuristics = Heuristics::default();
        let exact = negamax(&game, 3, &heuristics);
        let high = negamax_alpha_beta(&game, -INF, exact - 1, 3, &heuristics);
        assert!(high >= exact - 1);
        let low = negamax_alpha_beta(&game, exact + 1, INF, 3, &heuristics);
        assert!(low <= exact + 1);
    }

    #[test]
    #[should_panic]
    fn best_move_requires_a_legal_move() {
        let mut game = Game::new();
        game.skip_turn();
        game.skip_turn();
        best_move(&game, &SearchConfig::default());
    }
}
