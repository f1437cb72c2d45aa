//! Implements game-level Othello logic: legal moves, captures, turns and passes.

use crate::bitmask::BitMask;
use crate::board::GameBoard;
use crate::direction::Direction;
use crate::error::{OthelloError, Result};
use crate::position::Position;
use derive_more::Display;
use std::fmt;
use tracing::trace;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Color {
    /// Gets the other color.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opposite()
    }
}

/// The complete state of an Othello game.
///
/// A game is over once both sides have passed in a row. From then on no
/// placement is legal and passing changes nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: GameBoard,
    active_color: Color,
    consecutive_passes: u8,
}

impl Default for Game {
    /// Gets the standard starting position with black to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game in the standard starting position.
    pub const fn new() -> Self {
        Self::from_parts(GameBoard::starting(), Color::Black)
    }

    /// A game from an arbitrary board, with `active_color` to move and no passes recorded.
    pub const fn from_parts(board: GameBoard, active_color: Color) -> Self {
        Self {
            board,
            active_color,
            consecutive_passes: 0,
        }
    }

    /// Return to the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[inline]
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Get a mask of the legal moves for the active color.
    ///
    /// For each direction, opponent pieces adjacent to one of ours are flooded
    /// along that direction; every vacant cell the flood reaches just past an
    /// opponent run is a legal landing cell. Empty once the game is over.
    pub fn valid_moves_bitboard(&self) -> BitMask {
        if self.is_game_over() {
            return BitMask::EMPTY;
        }

        let mine = self.board.pieces(self.active_color);
        let theirs = self.board.pieces(!self.active_color);
        let vacant = self.board.vacant();

        Direction::ALL.iter().fold(BitMask::EMPTY, |moves, &dir| {
            let mut moves = moves;
            let mut candidates = theirs & mine.shift(dir, 1);
            while !candidates.is_empty() {
                let shifted = candidates.shift(dir, 1);
                moves |= vacant & shifted;
                candidates = theirs & shifted;
            }
            moves
        })
    }

    /// The legal moves for the active color, in row-major order.
    #[inline]
    pub fn valid_moves(&self) -> impl ExactSizeIterator<Item = Position> {
        self.valid_moves_bitboard().positions()
    }

    #[inline]
    pub fn has_valid_move(&self) -> bool {
        !self.valid_moves_bitboard().is_empty()
    }

    /// Return whether the active color may place at `position`.
    /// Off-board positions are never valid.
    pub fn is_valid_move(&self, position: Position) -> bool {
        match BitMask::from_position(position) {
            Ok(cell) => self.valid_moves_bitboard().test_any(cell),
            Err(_) => false,
        }
    }

    /// Place a piece for the active color, capture, and pass the turn.
    pub fn place_piece(&mut self, position: Position) -> Result<()> {
        self.place_piece_mask(BitMask::from_position(position)?)
    }

    /// Like [`Game::place_piece`], with the cell given as a one-hot mask.
    pub fn place_piece_mask(&mut self, cell: BitMask) -> Result<()> {
        if cell.count() != 1 {
            return Err(OthelloError::NotOneCell {
                count: cell.count(),
            });
        }

        if !self.valid_moves_bitboard().test_any(cell) {
            return Err(OthelloError::InvalidMove {
                position: cell.first_position().unwrap_or_default(),
                color: self.active_color,
            });
        }

        self.apply(cell);
        Ok(())
    }

    /// The game after the active color places at `position`; `self` is untouched.
    pub fn successor(&self, position: Position) -> Result<Self> {
        let mut next = *self;
        next.place_piece(position)?;
        Ok(next)
    }

    /// Place a piece without checking legality.
    /// `cell` must be a one-hot mask taken from [`Game::valid_moves_bitboard`];
    /// anything else leaves the game in an inconsistent state.
    #[inline]
    pub fn play_unchecked(mut self, cell: BitMask) -> Self {
        self.apply(cell);
        self
    }

    /// Record a pass for the active color. Does nothing once the game is over.
    pub fn skip_turn(&mut self) {
        if self.is_game_over() {
            return;
        }

        self.consecutive_passes += 1;
        self.active_color = !self.active_color;
        trace!(
            to_move = %self.active_color,
            passes = self.consecutive_passes,
            "turn skipped"
        );
    }

    /// Discs owned by `color` minus discs owned by its opponent.
    #[inline]
    pub fn disc_difference(&self, color: Color) -> i32 {
        self.board.color_count(color) as i32 - self.board.color_count(!color) as i32
    }

    /// The color with more discs once the game is over; `None` while in
    /// progress or on a draw.
    pub fn winner(&self) -> Option<Color> {
        if !self.is_game_over() {
            return None;
        }

        match self.disc_difference(Color::Black) {
            d if d > 0 => Some(Color::Black),
            d if d < 0 => Some(Color::White),
            _ => None,
        }
    }

    fn apply(&mut self, cell: BitMask) {
        let color = self.active_color;
        let flips = Direction::ALL
            .iter()
            .fold(BitMask::EMPTY, |flips, &dir| flips | self.captures(cell, dir));

        self.board.set_mask(color, flips | cell);
        self.active_color = !color;
        self.consecutive_passes = if flips.is_empty() {
            (self.consecutive_passes + 1).min(2)
        } else {
            0
        };

        trace!(
            %color,
            at = ?cell.first_position(),
            flipped = flips.count(),
            "piece placed"
        );
    }

    /// Opponent pieces captured in `dir` by placing at `start`.
    ///
    /// Floods from `start` one cell at a time. The run stops when it reaches
    /// one of our pieces (commit), a vacant cell (nothing captured), or the
    /// board edge in `dir` (nothing captured). A run that ends on our piece
    /// at the edge still commits.
    fn captures(&self, start: BitMask, dir: Direction) -> BitMask {
        let mine = self.board.pieces(self.active_color);
        let vacant = self.board.vacant();
        let mut run = start;

        loop {
            let crossed = run & !start;
            let capped = mine.test_any(crossed);
            let on_empty = vacant.test_any(crossed);
            let on_edge = run.on_edge(dir);

            if capped {
                trace!(direction = %dir, count = crossed.count() - 1, "run capped");
                return crossed & !mine;
            }
            if on_empty || on_edge {
                return BitMask::EMPTY;
            }

            run = run.dilate(dir, 1);
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        if self.is_game_over() {
            f.write_str("(Game over)\n")
        } else {
            writeln!(f, "{} to move", self.active_color)?;
            if self.consecutive_passes > 0 {
                f.write_str("(Last move was a pass)\n")?;
            }
            Ok(())
        }
    }
}
