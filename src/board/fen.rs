use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, BoardBuilder, CastlingRights, Color, Move, Piece, Square};

/// The standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const MAX_FEN_FIELDS: usize = 6;
const MIN_FEN_FIELDS: usize = 4;

fn parse_placement(mut builder: BoardBuilder, placement: &str) -> Result<BoardBuilder, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        // FEN lists rank 8 first
        let rank = 7 - row as u8;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidEmptyRun { char: c });
                }
                file += run as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file as u8).ok_or(FenError::WrongRankLength {
                    rank: usize::from(rank) + 1,
                    files: file + 1,
                })?;
                builder = builder.piece(sq, color, piece);
                file += 1;
            }
        }
        if file != 8 {
            return Err(FenError::WrongRankLength {
                rank: usize::from(rank) + 1,
                files: file,
            });
        }
    }

    Ok(builder)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let invalid = || FenError::InvalidCastling {
        found: field.to_string(),
    };
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    if field.is_empty() {
        return Err(invalid());
    }
    for c in field.chars() {
        let (color, kingside) = match c {
            'K' => (Color::White, true),
            'Q' => (Color::White, false),
            'k' => (Color::Black, true),
            'q' => (Color::Black, false),
            _ => return Err(invalid()),
        };
        if rights.has(color, kingside) {
            return Err(invalid());
        }
        rights.set(color, kingside);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq: Square = field.parse().map_err(|_| invalid())?;
    if sq.rank() != 2 && sq.rank() != 5 {
        return Err(invalid());
    }
    Ok(Some(sq))
}

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Accepts 4 to 6 fields; a missing half-move clock defaults to 0 and a
    /// missing full-move number to 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if !(MIN_FEN_FIELDS..=MAX_FEN_FIELDS).contains(&parts.len()) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let mut builder = parse_placement(BoardBuilder::new(), parts[0])?;

        builder = match parts[1] {
            "w" => builder.side_to_move(Color::White),
            "b" => builder.side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        builder = builder.castling(parse_castling(parts[2])?);

        if let Some(target) = parse_en_passant(parts[3])? {
            builder = builder.en_passant(target);
        }

        if let Some(&field) = parts.get(4) {
            let clock = field
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock {
                    found: field.to_string(),
                })?;
            builder = builder.halfmove_clock(clock);
        }

        if let Some(&field) = parts.get(5) {
            let number = match field.parse::<u32>() {
                Ok(n) if n >= 1 => n,
                _ => {
                    return Err(FenError::InvalidFullmoveNumber {
                        found: field.to_string(),
                    })
                }
            };
            builder = builder.fullmove_number(number);
        }

        let board = builder.build()?;

        #[cfg(feature = "logging")]
        log::debug!("loaded position {fen} (hash {:016x})", board.hash);

        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Replace the current position with the one described by `fen`.
    ///
    /// On error the board is left as it was.
    pub fn load_position(&mut self, fen: &str) -> Result<(), FenError> {
        *self = Board::try_from_fen(fen)?;
        Ok(())
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let piece = Square::new(rank, file).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = piece {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching move if it is generated here and does not leave
    /// the mover's king attacked. The position is unchanged afterwards.
    ///
    /// # Example
    /// ```
    /// use x88_chess::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        self.find_legal_move(from, to, promotion, text)
    }

    /// Parse a coordinate move and make it on the board in one call.
    ///
    /// # Example
    /// ```
    /// use x88_chess::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// assert_eq!(board.ply(), 2);
    /// ```
    pub fn make_move_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        if !self.make_move(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: text.to_string(),
            });
        }
        Ok(mv)
    }

    /// Build and play the move from `from` to `to`.
    ///
    /// A pawn reaching the last rank promotes to `promotion`, or to a queen
    /// when none is given. On error the position is unchanged.
    pub fn attempt_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Move, MoveParseError> {
        let notation = match promotion {
            Some(piece) => format!("{from}{to}{}", piece.to_char()),
            None => format!("{from}{to}"),
        };

        let promotes = matches!(self.piece_at(from), Some((_, Piece::Pawn)))
            && to.rank() == self.side_to_move.pawn_promotion_rank();
        let promotion = if promotes {
            Some(promotion.unwrap_or(Piece::Queen))
        } else {
            promotion
        };

        let mv = self.find_legal_move(from, to, promotion, &notation)?;
        if !self.make_move(mv) {
            return Err(MoveParseError::IllegalMove { notation });
        }
        Ok(mv)
    }

    fn find_legal_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
        notation: &str,
    ) -> Result<Move, MoveParseError> {
        let candidate = self
            .generate_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
            .ok_or_else(|| MoveParseError::NoSuchMove {
                notation: notation.to_string(),
            })?;

        if !self.make_move(candidate) {
            return Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            });
        }
        self.take_back();
        Ok(candidate)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
