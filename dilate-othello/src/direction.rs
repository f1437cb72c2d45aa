//! The eight compass directions a [`BitMask`](crate::BitMask) can be shifted in.

use derive_more::Display;

/// A compass direction on the board, as seen with row 0 at the top.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Every direction, counter-clockwise starting from [`Direction::Right`].
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    // (row delta, column delta), indexed by discriminant.
    const DELTAS: [(i8, i8); 8] = [
        (0, 1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
        (0, -1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// One step in this direction as a (row delta, column delta) pair.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        Self::DELTAS[self as usize]
    }

    /// Vertical component: -1 up, 0 none, 1 down.
    #[inline]
    pub fn row_delta(self) -> i8 {
        self.delta().0
    }

    /// Horizontal component: -1 left, 0 none, 1 right.
    #[inline]
    pub fn col_delta(self) -> i8 {
        self.delta().1
    }

    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }
}

impl std::ops::Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
            assert_eq!(-(-dir), dir);
        }
    }

    #[test]
    fn all_matches_discriminants() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(*dir as usize, i);
        }
    }

    #[test]
    fn compass_deltas() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::DownLeft.delta(), (1, -1));
        assert_eq!(Direction::UpRight.row_delta(), -1);
        assert_eq!(Direction::UpRight.col_delta(), 1);
    }
}
