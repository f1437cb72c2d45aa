//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation and captures against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::game::Game;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Game::new(), depth)
}

/// Count leaves `depth` plies below `game`. A forced pass uses up a ply and a
/// finished game is a leaf.
pub fn leaves_below(game: Game, depth: u64) -> u64 {
    if depth == 0 || game.is_game_over() {
        return 1;
    }

    let moves = game.valid_moves_bitboard();
    if moves.is_empty() {
        let mut passed = game;
        passed.skip_turn();
        if passed.is_game_over() {
            return 1;
        }
        return leaves_below(passed, depth - 1);
    }

    moves
        .squares()
        .map(|mv| leaves_below(game.play_unchecked(mv), depth - 1))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}
