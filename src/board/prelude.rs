//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use x88_chess::board::prelude::*;
//!
//! let board = Board::from_fen(STARTING_FEN);
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveList, MoveParseError, Piece,
    Square, SquareError, STARTING_FEN,
};
