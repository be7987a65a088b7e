//! Square type for the 0x88 board.
//!
//! A square is an index into a 128-cell grid of 8 ranks by 16 files, where
//! files 8-15 of every rank lie off the board. An index is on the board iff
//! `index & 0x88 == 0`, which also catches rank overflow and wrap-around
//! when stepping by a signed offset.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Mask of the bits that must be clear for an on-board index.
pub(crate) const OFF_BOARD_MASK: u8 = 0x88;

/// An on-board square of the 0x88 grid (a1 = 0x00, h1 = 0x07, a8 = 0x70).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0x00);
    pub const B1: Square = Square(0x01);
    pub const C1: Square = Square(0x02);
    pub const D1: Square = Square(0x03);
    pub const E1: Square = Square(0x04);
    pub const F1: Square = Square(0x05);
    pub const G1: Square = Square(0x06);
    pub const H1: Square = Square(0x07);
    pub const A8: Square = Square(0x70);
    pub const B8: Square = Square(0x71);
    pub const C8: Square = Square(0x72);
    pub const D8: Square = Square(0x73);
    pub const E8: Square = Square(0x74);
    pub const F8: Square = Square(0x75);
    pub const G8: Square = Square(0x76);
    pub const H8: Square = Square(0x77);

    /// Create a square from rank and file (both 0-7)
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 16 + file))
        } else {
            None
        }
    }

    /// Create a square from a raw 0x88 index, rejecting off-board indices
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 128 && index & OFF_BOARD_MASK == 0 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Wrap a raw index that the caller guarantees is on the board
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(index & OFF_BOARD_MASK == 0);
        Square(index)
    }

    /// Raw 0x88 index (0-119)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 7
    }

    /// Step by a signed 0x88 offset, returning `None` when leaving the board
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0.wrapping_add(delta as u8);
        if target & OFF_BOARD_MASK == 0 {
            Some(Square(target))
        } else {
            None
        }
    }

    /// Iterate over all 64 on-board squares in increasing index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..128)
            .filter(|idx| idx & OFF_BOARD_MASK == 0)
            .map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(SquareError::OffBoard { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Square::new(rank, file).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_layout() {
        assert_eq!(Square::new(0, 0), Some(Square::A1));
        assert_eq!(Square::new(7, 7), Some(Square::H8));
        assert_eq!(Square::E1.index(), 0x04);
        assert_eq!(Square::A8.rank(), 7);
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn test_offset_detects_edges() {
        assert_eq!(Square::H1.offset(1), None);
        assert_eq!(Square::A1.offset(-1), None);
        assert_eq!(Square::A1.offset(-16), None);
        assert_eq!(Square::H8.offset(16), None);
        assert_eq!(Square::H8.offset(17), None);
        assert_eq!(Square::A1.offset(33), "b3".parse().ok());
        assert_eq!(Square::G1.offset(-14), None);
    }

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_from_index_rejects_off_board() {
        assert!(Square::from_index(0x08).is_none());
        assert!(Square::from_index(0x78).is_none());
        assert!(Square::try_from(0x80u8).is_err());
        assert_eq!(Square::all().count(), 64);
    }
}
