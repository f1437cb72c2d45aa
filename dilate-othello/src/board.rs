//! The occupancy ledger: which color, if any, owns each cell.
//!
//! [`GameBoard`] knows nothing about legality or captures; that lives in
//! [`Game`](crate::Game). It only guarantees that no cell is owned by both colors.

use crate::bitmask::BitMask;
use crate::error::Result;
use crate::game::Color;
use crate::position::Position;
use crate::utils;
use std::fmt::{self, Display, Formatter};

/// Starting pieces for Black: D5 and E4.
pub const BLACK_START: BitMask = BitMask::from_bits(0x0000_0008_1000_0000);

/// Starting pieces for White: D4 and E5.
pub const WHITE_START: BitMask = BitMask::from_bits(0x0000_0010_0800_0000);

/// A pair of disjoint masks, one per color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GameBoard {
    black: BitMask,
    white: BitMask,
}

impl Default for GameBoard {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl GameBoard {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            black: BitMask::EMPTY,
            white: BitMask::EMPTY,
        }
    }

    /// The standard Othello starting position.
    pub const fn starting() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// Get the color occupying `position`, if any.
    pub fn at(&self, position: Position) -> Result<Option<Color>> {
        let cell = BitMask::from_position(position)?;
        if self.white.test_any(cell) {
            Ok(Some(Color::White))
        } else if self.black.test_any(cell) {
            Ok(Some(Color::Black))
        } else {
            Ok(None)
        }
    }

    /// Give `position` to `color`, taking it from the other color if needed.
    pub fn set(&mut self, color: Color, position: Position) -> Result<()> {
        self.set_mask(color, BitMask::from_position(position)?);
        Ok(())
    }

    /// Give every cell in `mask` to `color`, taking them from the other color.
    #[inline]
    pub fn set_mask(&mut self, color: Color, mask: BitMask) {
        let (mine, theirs) = match color {
            Color::Black => (&mut self.black, &mut self.white),
            Color::White => (&mut self.white, &mut self.black),
        };
        mine.set_mask(mask);
        theirs.clear_mask(mask);
    }

    /// Remove any piece at `position`.
    pub fn clear(&mut self, position: Position) -> Result<()> {
        let cell = BitMask::from_position(position)?;
        self.black.clear_mask(cell);
        self.white.clear_mask(cell);
        Ok(())
    }

    /// The cells owned by `color`.
    #[inline]
    pub fn pieces(&self, color: Color) -> BitMask {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// The number of cells owned by `color`.
    #[inline]
    pub fn color_count(&self, color: Color) -> u32 {
        self.pieces(color).count()
    }

    /// Get a mask indicating where the occupied cells are.
    #[inline]
    pub fn occupied(&self) -> BitMask {
        self.black | self.white
    }

    /// Get a mask indicating where the empty cells are.
    #[inline]
    pub fn vacant(&self) -> BitMask {
        !self.occupied()
    }
}

impl Display for GameBoard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let cells = self
            .black
            .cells()
            .zip(self.white.cells())
            .map(|cell| match cell {
                (true, _) => 'B',
                (_, true) => 'W',
                _ => '.',
            });
        utils::format_grid(cells, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OthelloError;

    #[test]
    fn starting_position() {
        let board = GameBoard::starting();
        assert_eq!(board.at(Position::new(3, 3)), Ok(Some(Color::White)));
        assert_eq!(board.at(Position::new(4, 4)), Ok(Some(Color::White)));
        assert_eq!(board.at(Position::new(3, 4)), Ok(Some(Color::Black)));
        assert_eq!(board.at(Position::new(4, 3)), Ok(Some(Color::Black)));
        assert_eq!(board.at(Position::new(0, 0)), Ok(None));
        assert_eq!(board.color_count(Color::Black), 2);
        assert_eq!(board.color_count(Color::White), 2);
        assert_eq!(board.vacant().count(), 60);
        assert_eq!(board, GameBoard::default());
    }

    #[test]
    fn set_takes_cell_from_other_color() {
        let mut board = GameBoard::starting();
        board.set(Color::Black, Position::new(3, 3)).unwrap();
        assert_eq!(board.at(Position::new(3, 3)), Ok(Some(Color::Black)));
        assert_eq!(board.color_count(Color::Black), 3);
        assert_eq!(board.color_count(Color::White), 1);
        assert!((board.pieces(Color::Black) & board.pieces(Color::White)).is_empty());
    }

    #[test]
    fn set_mask_keeps_colors_disjoint() {
        let mut board = GameBoard::starting();
        board.set_mask(Color::White, BitMask::FULL);
        assert_eq!(board.color_count(Color::White), 64);
        assert_eq!(board.color_count(Color::Black), 0);

        board.set_mask(Color::Black, BitMask::CORNERS);
        assert_eq!(board.color_count(Color::Black), 4);
        assert_eq!(board.color_count(Color::White), 60);
        assert!(board.vacant().is_empty());
    }

    #[test]
    fn clear_vacates_cell() {
        let mut board = GameBoard::starting();
        board.clear(Position::new(4, 4)).unwrap();
        assert_eq!(board.at(Position::new(4, 4)), Ok(None));
        assert_eq!(board.occupied().count(), 3);
    }

    #[test]
    fn out_of_range_is_surfaced() {
        let mut board = GameBoard::empty();
        let err = OthelloError::OutOfRange { row: 3, col: 9 };
        assert_eq!(board.at(Position::new(3, 9)), Err(err));
        assert_eq!(board.set(Color::Black, Position::new(3, 9)), Err(err));
        assert_eq!(board.clear(Position::new(3, 9)), Err(err));
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn display_starting_grid() {
        let text = GameBoard::starting().to_string();
        assert!(text.contains(" 4 . . . W B . . . "));
        assert!(text.contains(" 5 . . . B W . . . "));
    }
}
