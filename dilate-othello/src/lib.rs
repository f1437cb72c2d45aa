//! `dilate-othello` is an Othello rules engine built on 64-bit board masks.
//!
//! The crate is layered leaf-first:
//!
//!  - [`BitMask`] is a set of cells with edge-safe directional shifts and floods.
//!  - [`GameBoard`] pairs one mask per [`Color`] and keeps them disjoint.
//!  - [`Game`] adds the side to move and the pass streak, and implements legal
//!    move generation and captures on top of the board.
//!
//! Every query or mutator that takes a [`Position`] validates it and reports
//! [`OthelloError::OutOfRange`] for cells off the board.

pub mod test_utils;

mod bitmask;
mod board;
mod direction;
mod error;
mod game;
mod position;
mod utils;

pub use bitmask::*;
pub use board::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use position::*;

/// The number of cells on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on an Othello board.
pub const NUM_SPACES: usize = 64;
