//! Zobrist hashing for chess positions.
//!
//! Keys are drawn from a fixed-seed 32-bit xorshift generator so that a
//! position hashes to the same value in every run.

use once_cell::sync::Lazy;
use rand::RngCore;

use crate::board::{Color, Piece, Square};

const XORSHIFT_SEED: u32 = 1_804_289_383;

/// Number of distinct piece codes (6 piece types for each color)
pub(crate) const PIECE_CODES: usize = 12;

/// Marsaglia xorshift32 (13, 17, 5).
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Generator with the given non-zero seed
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        XorShift32 { state: seed }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        XorShift32::new(XORSHIFT_SEED)
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Two successive 32-bit outputs, high word first.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub(crate) struct ZobristKeys {
    // piece_keys[piece_code][square_index], piece_code = color * 6 + piece
    pub(crate) piece_keys: [[u64; 128]; PIECE_CODES],
    // en_passant_keys[square_index]
    pub(crate) en_passant_keys: [u64; 128],
    // castling_keys[rights_mask], one per 4-bit mask value
    pub(crate) castling_keys: [u64; 16],
    // folded in while White is to move
    pub(crate) side_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = XorShift32::default();
        let mut piece_keys = [[0; 128]; PIECE_CODES];
        let mut en_passant_keys = [0; 128];
        let mut castling_keys = [0; 16];

        for piece in &mut piece_keys {
            for key in piece.iter_mut() {
                *key = rng.next_u64();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.next_u64();
        }

        for key in &mut castling_keys {
            *key = rng.next_u64();
        }

        let side_key = rng.next_u64();

        ZobristKeys {
            piece_keys,
            en_passant_keys,
            castling_keys,
            side_key,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece_code(color, piece)][sq.as_usize()]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.as_usize()]
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn piece_code(color: Color, piece: Piece) -> usize {
    color.index() * 6 + piece.index()
}
