//! Code for working with [`Position`]s on the Othello board.

use crate::error::{OthelloError, Result};
use crate::EDGE_LENGTH;
use std::fmt::{self, Display, Formatter, Write};

/// A (row, column) cell on the board. Row 0 is the top, column 0 the left.
///
/// Fields are public and unchecked: a `Position` may name a cell off the board.
/// Every board query or mutator validates its position and reports
/// [`OthelloError::OutOfRange`] rather than clamping.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Build a position without checking that it lies on the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position, failing if it lies off the board.
    #[inline]
    pub fn checked(row: u8, col: u8) -> Result<Self> {
        Self::new(row, col).validate()
    }

    /// Return true if both coordinates are in `0..8`.
    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < EDGE_LENGTH && (self.col as usize) < EDGE_LENGTH
    }

    /// Return `self` if it is on the board, or an `OutOfRange` error.
    #[inline]
    pub fn validate(self) -> Result<Self> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(OthelloError::OutOfRange {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Convert from a row-major index counted from the top-left (0..64).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::new(index / EDGE_LENGTH as u8, index % EDGE_LENGTH as u8)
    }

    /// Convert into a row-major index counted from the top-left.
    /// Only meaningful for positions on the board.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.row * EDGE_LENGTH as u8 + self.col
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// Convert this [`Position`] into string notation ("D3").
/// Off-board positions render as their raw coordinates.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        f.write_char((b'A' + self.col) as char)?;
        f.write_char((b'1' + self.row) as char)
    }
}

/// Build a [`Position`] from 1-indexed string notation ("D3", "h8").
impl std::str::FromStr for Position {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let col_char = chars.next().ok_or(OthelloError::Notation)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_char).ok_or(OthelloError::Notation)? as u8;
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or(OthelloError::Notation)? as u8;

        if !(1..=8).contains(&row) || chars.next().is_some() {
            return Err(OthelloError::Notation);
        }

        Ok(Self::new(row - 1, col))
    }
}
