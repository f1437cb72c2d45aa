//! A baseline player that picks uniformly among the legal moves.

use dilate_othello::{Game, Position};
use rand::seq::IteratorRandom;
use rand::Rng;

/// A uniformly random legal move, or `None` if the side to move must pass.
pub fn random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<Position> {
    game.valid_moves().choose(rng)
}
