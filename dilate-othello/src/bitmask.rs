//! Whole-board bit sets with edge-safe directional shifts.
//!
//! A [`BitMask`] wraps a [`u64`]. By convention the MSB is the upper-left of the
//! board and bits proceed in row-major order, so cell `(row, col)` is bit
//! `row * 8 + col` counted from the MSB.
//!
//! Shifts never wrap: a bit pushed past an edge is discarded, never carried
//! onto the opposite edge or into the neighbouring row.

use crate::direction::Direction;
use crate::error::{OthelloError, Result};
use crate::position::Position;
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per cell of an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct BitMask(u64);

const TOP_LEFT: u64 = 1 << 63;
const TOP_EDGE: u64 = 0xFF00_0000_0000_0000;
const BOTTOM_EDGE: u64 = 0x0000_0000_0000_00FF;
const LEFT_EDGE: u64 = 0x8080_8080_8080_8080;
const RIGHT_EDGE: u64 = 0x0101_0101_0101_0101;
const CORNERS: u64 = 0x8100_0000_0000_0081;

impl BitMask {
    /// No cells set.
    pub const EMPTY: BitMask = BitMask(0);

    /// Every cell set.
    pub const FULL: BitMask = BitMask(u64::MAX);

    /// The four corner cells.
    pub const CORNERS: BitMask = BitMask(CORNERS);

    /// Every cell on the outer ring.
    pub const ALL_EDGES: BitMask = BitMask(TOP_EDGE | BOTTOM_EDGE | LEFT_EDGE | RIGHT_EDGE);

    /// Wrap raw bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// A mask with only `position` set.
    #[inline]
    pub fn from_position(position: Position) -> Result<Self> {
        let position = position.validate()?;
        Ok(Self(TOP_LEFT >> position.to_index()))
    }

    /// A mask with every listed position set.
    pub fn from_positions<I: IntoIterator<Item = Position>>(positions: I) -> Result<Self> {
        positions
            .into_iter()
            .try_fold(Self::EMPTY, |mask, p| Ok(mask | Self::from_position(p)?))
    }

    /// Set a single cell.
    #[inline]
    pub fn set(&mut self, position: Position) -> Result<()> {
        *self |= Self::from_position(position)?;
        Ok(())
    }

    /// Clear a single cell.
    #[inline]
    pub fn clear(&mut self, position: Position) -> Result<()> {
        *self &= !Self::from_position(position)?;
        Ok(())
    }

    /// Return whether a single cell is set.
    #[inline]
    pub fn test(self, position: Position) -> Result<bool> {
        Ok(self.test_any(Self::from_position(position)?))
    }

    /// Set every cell in `other`.
    #[inline]
    pub fn set_mask(&mut self, other: BitMask) {
        *self |= other;
    }

    /// Clear every cell in `other`.
    #[inline]
    pub fn clear_mask(&mut self, other: BitMask) {
        *self &= !other;
    }

    /// Return true if any cell of `other` is set here.
    #[inline]
    pub fn test_any(self, other: BitMask) -> bool {
        !(self & other).is_empty()
    }

    /// Return true if every cell of `other` is set here.
    #[inline]
    pub fn test_all(self, other: BitMask) -> bool {
        self & other == other
    }

    /// Count the number of set cells.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return true if no cell is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Shift every cell `n` steps in `direction`, dropping cells that leave the board.
    ///
    /// Vertical shifts move whole rows. Horizontal shifts clear the `n` columns
    /// vacated on the trailing side, which is where the bits of the adjacent row
    /// would otherwise wrap in. Diagonals are one vertical shift then one
    /// horizontal shift.
    pub fn shift(self, direction: Direction, n: u32) -> Self {
        let (row_delta, col_delta) = direction.delta();
        let row_bits = n.saturating_mul(EDGE_LENGTH as u32);

        let mut bits = match row_delta {
            -1 => self.0.checked_shl(row_bits).unwrap_or(0),
            1 => self.0.checked_shr(row_bits).unwrap_or(0),
            _ => self.0,
        };

        bits = match col_delta {
            1 => bits.checked_shr(n).unwrap_or(0) & !column_wall(LEFT_EDGE, n, u64::wrapping_shr),
            -1 => bits.checked_shl(n).unwrap_or(0) & !column_wall(RIGHT_EDGE, n, u64::wrapping_shl),
            _ => bits,
        };

        Self(bits)
    }

    /// Flood `n` steps in `direction`: `self | shift(self)`, repeated `n` times.
    pub fn dilate(self, direction: Direction, n: u32) -> Self {
        (0..n).fold(self, |mask, _| mask | mask.shift(direction, 1))
    }

    /// Return true if any set cell lies on the edge `direction` points toward.
    /// Diagonal directions test both of their edges.
    #[inline]
    pub fn on_edge(self, direction: Direction) -> bool {
        self.test_any(Self::edge(direction))
    }

    /// Return true if any set cell lies on the outer ring.
    #[inline]
    pub fn on_any_edge(self) -> bool {
        self.test_any(Self::ALL_EDGES)
    }

    /// The edge cells that `direction` points toward.
    pub fn edge(direction: Direction) -> Self {
        let (row_delta, col_delta) = direction.delta();
        let vertical = match row_delta {
            -1 => TOP_EDGE,
            1 => BOTTOM_EDGE,
            _ => 0,
        };
        let horizontal = match col_delta {
            -1 => LEFT_EDGE,
            1 => RIGHT_EDGE,
            _ => 0,
        };
        Self(vertical | horizontal)
    }

    /// Cells orthogonally adjacent to `position`.
    pub fn neighbors_cardinal(position: Position) -> Result<Self> {
        let cell = Self::from_position(position)?;
        Ok([Direction::Right, Direction::Up, Direction::Left, Direction::Down]
            .iter()
            .fold(Self::EMPTY, |mask, &dir| mask | cell.shift(dir, 1)))
    }

    /// Cells diagonally adjacent to `position`.
    pub fn neighbors_diagonal(position: Position) -> Result<Self> {
        let cell = Self::from_position(position)?;
        Ok([
            Direction::UpRight,
            Direction::UpLeft,
            Direction::DownLeft,
            Direction::DownRight,
        ]
        .iter()
        .fold(Self::EMPTY, |mask, &dir| mask | cell.shift(dir, 1)))
    }

    /// All eight cells surrounding `position`.
    pub fn neighbors(position: Position) -> Result<Self> {
        Ok(Self::neighbors_cardinal(position)? | Self::neighbors_diagonal(position)?)
    }

    /// The first set cell in row-major order, if any.
    #[inline]
    pub fn first_position(self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::from_index(self.0.leading_zeros() as u8))
        }
    }

    /// The cell selected by a one-hot mask; `None` unless exactly one bit is set.
    #[inline]
    pub fn to_position(self) -> Option<Position> {
        match self.count() {
            1 => self.first_position(),
            _ => None,
        }
    }

    /// Iterate over the set cells as one-hot masks, in row-major order.
    #[inline]
    pub fn squares(self) -> Squares {
        Squares(self)
    }

    /// Iterate over the set cells as positions, in row-major order.
    #[inline]
    pub fn positions(self) -> impl ExactSizeIterator<Item = Position> {
        self.squares().map(|square| Position::from_index(square.0.leading_zeros() as u8))
    }

    /// Iterate over every cell's bit in row-major order.
    #[inline]
    pub fn cells(self) -> Bits {
        Bits {
            remaining: NUM_SPACES,
            bitmask: self,
        }
    }

    /// Serialize as 64 `'0'`/`'1'` characters in row-major order.
    pub fn to_bit_string(self) -> String {
        self.cells().map(|bit| if bit { '1' } else { '0' }).collect()
    }
}

// Mask of the `n` columns starting at `edge` and stepping inward with `step`.
#[inline]
fn column_wall(edge: u64, n: u32, step: fn(u64, u32) -> u64) -> u64 {
    (0..n.min(EDGE_LENGTH as u32)).fold(0, |wall, i| wall | step(edge, i))
}

/// Parse the form produced by [`BitMask::to_bit_string`].
impl std::str::FromStr for BitMask {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        if s.chars().count() != NUM_SPACES {
            return Err(OthelloError::Format {
                reason: "expected exactly 64 characters",
            });
        }

        s.chars().try_fold(Self::EMPTY, |mask, c| match c {
            '0' => Ok(Self(mask.0 << 1)),
            '1' => Ok(Self((mask.0 << 1) | 1)),
            _ => Err(OthelloError::Format {
                reason: "expected only '0' and '1'",
            }),
        })
    }
}

impl Display for BitMask {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(self.cells().map(|bit| if bit { '#' } else { '.' }), f)
    }
}

/// Iterator over the set cells of a [`BitMask`] as one-hot masks.
#[derive(Clone, Copy, Debug)]
pub struct Squares(BitMask);

impl Iterator for Squares {
    type Item = BitMask;

    fn next(&mut self) -> Option<BitMask> {
        if self.0.is_empty() {
            return None;
        }

        let next_square = BitMask(TOP_LEFT >> self.0 .0.leading_zeros());
        self.0 ^= next_square;
        Some(next_square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Squares {}

/// Iterator for the bits in a [`BitMask`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitmask: BitMask,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit = self.bitmask.0 & (1u64 << (self.remaining - 1)) != 0;
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}
