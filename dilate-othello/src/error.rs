//! The error type shared by every fallible board operation.

use crate::game::Color;
use crate::position::Position;
use derive_more::{Display, Error};

/// Everything that can go wrong when querying or mutating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum OthelloError {
    /// A row or column outside `0..8` was passed to a board query or mutator.
    #[display(fmt = "position ({}, {}) is off the board", row, col)]
    OutOfRange { row: u8, col: u8 },

    /// A serialized bitmask string could not be parsed.
    #[display(fmt = "malformed bitmask string: {}", reason)]
    Format { reason: &'static str },

    /// The active player cannot legally place a piece here.
    #[display(fmt = "{} is not a legal move for {}", position, color)]
    InvalidMove { position: Position, color: Color },

    /// A placement mask did not select exactly one cell.
    #[display(fmt = "placement mask selects {} cells instead of one", count)]
    NotOneCell { count: u32 },

    /// A square could not be parsed from algebraic notation ("D3").
    #[display(fmt = "invalid square notation")]
    Notation,
}

pub type Result<T> = std::result::Result<T, OthelloError>;
