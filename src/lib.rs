pub mod board;
pub mod cli;
pub mod perft;
pub mod zobrist;

pub use board::{Board, Color, Move, Piece, Square};
pub use perft::{DivideEntry, PerftReport};
