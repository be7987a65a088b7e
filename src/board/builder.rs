//! Fluent builder for constructing chess positions.
//!
//! This is the instruction-sequence form of position setup: the FEN parser
//! feeds one of these, and callers can also describe a position piece by
//! piece.
//!
//! # Example
//! ```
//! use x88_chess::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, Piece::King)
//!     .piece(Square::E8, Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), Square::E8);
//! ```

use super::error::PositionError;
use super::state::Cell;
use super::{Board, CastlingRights, Color, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        for (file, &piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for (rank, color) in [(0, Color::White), (7, Color::Black)] {
                if let Some(sq) = Square::new(rank, file) {
                    builder.pieces.push((sq, color, piece));
                }
            }
            for (rank, color) in [(1, Color::White), (6, Color::Black)] {
                if let Some(sq) = Square::new(rank, file) {
                    builder.pieces.push((sq, color, Piece::Pawn));
                }
            }
        }

        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the full-move number.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the board.
    ///
    /// Places every piece (recording king locations as they are placed),
    /// applies the scalar state and computes the hash from scratch. The
    /// side not to move must not be in check.
    pub fn build(self) -> Result<Board, PositionError> {
        let mut board = Board::empty();
        let mut king_counts = [0usize; 2];

        for (square, color, piece) in self.pieces {
            let rank = square.rank();
            if piece == Piece::Pawn && (rank == 0 || rank == 7) {
                return Err(PositionError::PawnOnBackRank { square });
            }
            if piece == Piece::King {
                king_counts[color.index()] += 1;
                board.king_squares[color.index()] = square;
            }
            board.cells[square.as_usize()] = Cell::Piece(color, piece);
        }

        for color in Color::BOTH {
            let found = king_counts[color.index()];
            if found != 1 {
                return Err(PositionError::KingCount { color, found });
            }
        }

        if let Some(square) = self.en_passant_target {
            // Target lies behind the pawn that just double-stepped
            let expected_rank = match self.side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if square.rank() != expected_rank {
                return Err(PositionError::EnPassantRank { square });
            }
        }

        let waiting = self.side_to_move.opponent();
        if board.is_square_attacked(board.king_squares[waiting.index()], self.side_to_move) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }

        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.fullmove_number = self.fullmove_number;
        board.hash = board.compute_hash();

        Ok(board)
    }
}
