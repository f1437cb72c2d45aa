//! Static position evaluation.

use dilate_othello::{BitMask, Color, Game, GameBoard};

/// Weights for the static evaluator.
///
/// Passed explicitly into every search call, so several configurations can
/// be searched side by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Heuristics {
    /// Extra value per corner held, on top of the plain disc count.
    pub corner_bonus: i32,
}

impl Heuristics {
    pub const fn with_corner_bonus(corner_bonus: i32) -> Self {
        Self { corner_bonus }
    }
}

/// Score `game` from the point of view of the side to move.
///
/// A finished game is scored by disc difference alone; the corner bonus only
/// applies while the game is still going.
pub fn evaluate(game: &Game, heuristics: &Heuristics) -> i32 {
    if game.is_game_over() {
        return game.disc_difference(game.active_color());
    }

    evaluate_for(game.board(), game.active_color(), heuristics)
}

/// Score `board` from the point of view of `color`.
/// Swapping `color` negates the result.
pub fn evaluate_for(board: &GameBoard, color: Color, heuristics: &Heuristics) -> i32 {
    let mine = board.pieces(color);
    let theirs = board.pieces(!color);

    let discs = mine.count() as i32 - theirs.count() as i32;
    let corners = (mine & BitMask::CORNERS).count() as i32 - (theirs & BitMask::CORNERS).count() as i32;

    discs + heuristics.corner_bonus * corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use dilate_othello::Position;

    fn corner_board() -> GameBoard {
        // Black holds H1, white holds F1 and G1.
        let mut board = GameBoard::empty();
        board.set(Color::White, Position::new(0, 5)).unwrap();
        board.set(Color::White, Position::new(0, 6)).unwrap();
        board.set(Color::Black, Position::new(0, 7)).unwrap();
        board
    }

    #[test]
    fn default_is_disc_difference() {
        let heuristics = Heuristics::default();
        assert_eq!(heuristics.corner_bonus, 0);
        assert_eq!(evaluate(&Game::new(), &heuristics), 0);
        assert_eq!(evaluate_for(&corner_board(), Color::Black, &heuristics), -1);
        assert_eq!(evaluate_for(&corner_board(), Color::White, &heuristics), 1);
    }

    #[test]
    fn corner_bonus_weights_corners() {
        let heuristics = Heuristics::with_corner_bonus(10);
        assert_eq!(evaluate_for(&corner_board(), Color::Black, &heuristics), 9);
        assert_eq!(evaluate_for(&corner_board(), Color::White, &heuristics), -9);

        let game = Game::from_parts(corner_board(), Color::White);
        assert_eq!(evaluate(&game, &heuristics), -9);
    }

    #[test]
    fn finished_game_ignores_corner_bonus() {
        let mut game = Game::from_parts(corner_board(), Color::White);
        game.skip_turn();
        game.skip_turn();
        assert!(game.is_game_over());
        assert_eq!(evaluate(&game, &Heuristics::with_corner_bonus(10)), 1);
    }
}
