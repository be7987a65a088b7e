//! Error types for chess board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string must have 4 to 6 whitespace-separated fields
    WrongFieldCount { found: usize },
    /// Placement must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Empty-square run outside 1-8
    InvalidEmptyRun { char: char },
    /// A rank does not describe exactly 8 files
    WrongRankLength { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Half-move clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Full-move number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// Well-formed text describing an impossible position
    Position(PositionError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 4 to 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidEmptyRun { char } => {
                write!(f, "Invalid empty-square count '{char}' in FEN")
            }
            FenError::WrongRankLength { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling field '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid half-move clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid full-move number '{found}'")
            }
            FenError::Position(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Position(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PositionError> for FenError {
    fn from(e: PositionError) -> Self {
        FenError::Position(e)
    }
}

/// Error type for positions that cannot be set up on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Each side needs exactly one king
    KingCount { color: Color, found: usize },
    /// Pawns cannot stand on the first or last rank
    PawnOnBackRank { square: Square },
    /// En passant target must lie on rank 3 (Black to move) or rank 6 (White to move)
    EnPassantRank { square: Square },
    /// The side not to move has its king attacked
    OpponentInCheck { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            PositionError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            PositionError::EnPassantRank { square } => {
                write!(f, "En passant square {square} is on the wrong rank")
            }
            PositionError::OpponentInCheck { color } => {
                write!(f, "{color} king can be captured by the side to move")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// No generated move matches the request
    NoSuchMove { notation: String },
    /// Move would leave the mover's king attacked
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::NoSuchMove { notation } => {
                write!(f, "No such move '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Raw index lies in the off-board half of the 0x88 grid
    OffBoard { index: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OffBoard { index } => {
                write!(f, "Index {index:#04x} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fen_error_field_count() {
        let err = FenError::WrongFieldCount { found: 2 };
        assert!(err.to_string().contains('2'));
        assert!(err.to_string().contains("4 to 6"));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_fen_error_wraps_position_error() {
        let err: FenError = PositionError::KingCount {
            color: Color::Black,
            found: 0,
        }
        .into();
        assert!(err.to_string().contains("Black"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_position_error_names_square() {
        let err = PositionError::PawnOnBackRank { square: Square::A8 };
        assert!(err.to_string().contains("a8"));
    }

    #[test]
    fn test_move_error_messages() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
        let err = MoveParseError::IllegalMove {
            notation: "e1e2".to_string(),
        };
        assert!(err.to_string().contains("e1e2"));
        let err = MoveParseError::NoSuchMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_messages() {
        let err = SquareError::OffBoard { index: 0x08 };
        assert!(err.to_string().contains("0x08"));
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidPiece { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
