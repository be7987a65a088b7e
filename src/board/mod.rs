//! Chess board representation and game logic.
//!
//! The position lives in a 0x88 grid: 128 cells of which the 64 with
//! `index & 0x88 == 0` are real squares. Supports full chess rules
//! including castling, en passant and promotions.
//!
//! # Example
//! ```
//! use x88_chess::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! assert_eq!(board.perft(2), 400);
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, PositionError, SquareError};
pub use fen::STARTING_FEN;
pub use state::{Board, Cell, UnmakeInfo};
pub use types::{CastlingRights, Color, Move, MoveFlags, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
    OFF_BOARD_MASK, PROMOTION_PIECES,
};
