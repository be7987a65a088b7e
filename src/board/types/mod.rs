//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - 0x88 board square
//! - `Move` and `MoveList` - packed move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveFlags, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use castling::{
    ALL_CASTLING_RIGHTS, CASTLE_BLACK_K, CASTLE_BLACK_Q, CASTLE_WHITE_K, CASTLE_WHITE_Q,
};
pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use square::OFF_BOARD_MASK;
