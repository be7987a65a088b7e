//! Fixed offset tables for the 0x88 board.
//!
//! Offsets are signed steps in 0x88 index units: one rank is 16, one file 1.

use super::super::{
    Piece, ALL_CASTLING_RIGHTS as ALL, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K,
    CASTLE_WHITE_Q,
};

/// Pieces that jump a fixed set of offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Leaper {
    Knight,
    King,
}

impl Leaper {
    pub(crate) const ALL: [Leaper; 2] = [Leaper::Knight, Leaper::King];

    #[inline]
    pub(crate) const fn piece(self) -> Piece {
        match self {
            Leaper::Knight => Piece::Knight,
            Leaper::King => Piece::King,
        }
    }

    #[inline]
    pub(crate) const fn offsets(self) -> &'static [i8; 8] {
        &LEAPER_OFFSETS[self as usize]
    }
}

/// Ray families; the queen belongs to both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    pub(crate) const ALL: [Slider; 2] = [Slider::Bishop, Slider::Rook];

    #[inline]
    pub(crate) const fn offsets(self) -> &'static [i8; 4] {
        &SLIDER_OFFSETS[self as usize]
    }

    /// Whether `piece` moves along this family's rays
    #[inline]
    pub(crate) const fn moves_like(self, piece: Piece) -> bool {
        match self {
            Slider::Bishop => piece.attacks_diagonally(),
            Slider::Rook => piece.attacks_straight(),
        }
    }
}

const LEAPER_OFFSETS: [[i8; 8]; 2] = [
    [33, 31, 18, 14, -33, -31, -18, -14],
    [16, -16, 1, -1, 15, 17, -15, -17],
];

const SLIDER_OFFSETS: [[i8; 4]; 2] = [[15, 17, -15, -17], [16, -16, 1, -1]];

/// Where a pawn of the indexed color must stand to attack a square,
/// relative to that square (White attacks upward, so its pawns sit below).
pub(crate) const PAWN_ATTACKER_OFFSETS: [[i8; 2]; 2] = [[-15, -17], [15, 17]];

/// Capture steps for a pawn of the indexed color.
pub(crate) const PAWN_CAPTURE_OFFSETS: [[i8; 2]; 2] = [[15, 17], [-17, -15]];

const OFF: u8 = 0;

/// Rights that survive a move touching the indexed square (as source or target).
#[rustfmt::skip]
pub(crate) const CASTLING_RIGHTS_MASK: [u8; 128] = [
    ALL & !CASTLE_WHITE_Q, ALL, ALL, ALL, ALL & !(CASTLE_WHITE_K | CASTLE_WHITE_Q), ALL, ALL, ALL & !CASTLE_WHITE_K,
    OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL, ALL, ALL, ALL, ALL, ALL, ALL, ALL, OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
    ALL & !CASTLE_BLACK_Q, ALL, ALL, ALL, ALL & !(CASTLE_BLACK_K | CASTLE_BLACK_Q), ALL, ALL, ALL & !CASTLE_BLACK_K,
    OFF, OFF, OFF, OFF, OFF, OFF, OFF, OFF,
];
