//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

const SQUARE_MASK: u32 = 0x7F;
const PROMOTION_MASK: u32 = 0xF;

const TO_SHIFT: u32 = 7;
const PROMOTION_SHIFT: u32 = 14;

const FLAG_CAPTURE: u32 = 1 << 18;
const FLAG_DOUBLE_PAWN: u32 = 1 << 19;
const FLAG_EN_PASSANT: u32 = 1 << 20;
const FLAG_CASTLING: u32 = 1 << 21;

/// Boolean move attributes packed alongside the squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveFlags {
    pub capture: bool,
    pub double_pawn_push: bool,
    pub en_passant: bool,
    pub castling: bool,
}

impl MoveFlags {
    const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.capture {
            bits |= FLAG_CAPTURE;
        }
        if self.double_pawn_push {
            bits |= FLAG_DOUBLE_PAWN;
        }
        if self.en_passant {
            bits |= FLAG_EN_PASSANT;
        }
        if self.castling {
            bits |= FLAG_CASTLING;
        }
        bits
    }
}

/// Compact 22-bit move representation.
///
/// Encoding:
/// - bits 0-6:   from square (0x88 index)
/// - bits 7-13:  to square (0x88 index)
/// - bits 14-17: promotion piece (0 = none, otherwise piece index + 1)
/// - bit 18:     capture (also set for en passant)
/// - bit 19:     double pawn push
/// - bit 20:     en passant
/// - bit 21:     castling
///
/// Decoding performs no validation: only values built through the
/// constructors below are meaningful.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// Create a move from all of its fields
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>, flags: MoveFlags) -> Self {
        let promo = match promotion {
            Some(piece) => piece.index() as u32 + 1,
            None => 0,
        };
        Move(
            from.index() as u32
                | (to.index() as u32) << TO_SHIFT
                | promo << PROMOTION_SHIFT
                | flags.bits(),
        )
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveFlags {
            capture: false,
            double_pawn_push: false,
            en_passant: false,
            castling: false,
        })
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveFlags {
            capture: true,
            double_pawn_push: false,
            en_passant: false,
            castling: false,
        })
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveFlags {
            capture: false,
            double_pawn_push: true,
            en_passant: false,
            castling: false,
        })
    }

    /// Create an en passant capture
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveFlags {
            capture: true,
            double_pawn_push: false,
            en_passant: true,
            castling: false,
        })
    }

    /// Create a castling move, given as the king's from and to squares
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move::new(from, to, None, MoveFlags {
            capture: false,
            double_pawn_push: false,
            en_passant: false,
            castling: true,
        })
    }

    /// Create a promotion move, optionally capturing on the target square
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        Move::new(from, to, Some(piece), MoveFlags {
            capture,
            double_pawn_push: false,
            en_passant: false,
            castling: false,
        })
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & SQUARE_MASK) as u8)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> TO_SHIFT) & SQUARE_MASK) as u8)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match (self.0 >> PROMOTION_SHIFT) & PROMOTION_MASK {
            0 => None,
            code => Some(Piece::ALL[code as usize - 1]),
        }
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.0 & FLAG_CAPTURE != 0
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.0 & FLAG_DOUBLE_PAWN != 0
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    /// Returns true if this move is castling
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        self.0 & FLAG_CASTLING != 0
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        (self.0 >> PROMOTION_SHIFT) & PROMOTION_MASK != 0
    }

    /// All four boolean flags
    #[inline]
    #[must_use]
    pub const fn flags(self) -> MoveFlags {
        MoveFlags {
            capture: self.is_capture(),
            double_pawn_push: self.is_double_pawn_push(),
            en_passant: self.is_en_passant(),
            castling: self.is_castling(),
        }
    }

    /// Get the raw packed value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Create from a raw packed value previously returned by `as_u32`
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Move(value)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_double_pawn_push() {
            write!(f, " double")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_field_layout_matches_bit_widths() {
        let mv = Move::promotion(sq("b7"), sq("a8"), Piece::Knight, true);
        let raw = mv.as_u32();
        assert_eq!(raw & 0x7F, u32::from(sq("b7").index()));
        assert_eq!((raw >> 7) & 0x7F, u32::from(sq("a8").index()));
        assert_eq!((raw >> 14) & 0xF, 2);
        assert_eq!((raw >> 18) & 1, 1);
        assert_eq!(raw >> 19, 0);
    }

    #[test]
    fn test_flags_decode_independently() {
        let ep = Move::en_passant(sq("e5"), sq("d6"));
        assert!(ep.is_capture() && ep.is_en_passant());
        assert!(!ep.is_castling() && !ep.is_double_pawn_push());

        let double = Move::double_pawn_push(sq("e2"), sq("e4"));
        assert!(double.is_double_pawn_push() && !double.is_capture());

        let castle = Move::castle(Square::E1, Square::G1);
        assert_eq!(
            castle.flags(),
            MoveFlags {
                castling: true,
                ..MoveFlags::default()
            }
        );
        assert_eq!(castle.promotion_piece(), None);
    }

    #[test]
    fn test_promotion_piece_decodes_every_choice() {
        for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
            let mv = Move::promotion(sq("g7"), sq("g8"), piece, false);
            assert_eq!(mv.promotion_piece(), Some(piece));
            assert!(mv.is_promotion());
            assert!(!mv.is_capture());
        }
    }

    #[test]
    fn test_display_coordinate_text() {
        assert_eq!(Move::quiet(sq("g1"), sq("f3")).to_string(), "g1f3");
        assert_eq!(
            Move::promotion(sq("e7"), sq("e8"), Piece::Queen, false).to_string(),
            "e7e8q"
        );
        assert_eq!(Move::from_u32(Move::capture(sq("d4"), sq("e5")).as_u32()).to_string(), "d4e5");
    }

    #[test]
    fn test_move_list_basics() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        let mv = Move::quiet(sq("a2"), sq("a3"));
        list.push(mv);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], mv);
        assert!(list.contains(mv));
        assert_eq!(list.get(1), None);
        assert_eq!(list.into_iter().count(), 1);
    }
}
