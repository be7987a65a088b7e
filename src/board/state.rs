use crate::zobrist::ZOBRIST;

use super::{CastlingRights, Color, Move, Piece, Square, OFF_BOARD_MASK};

/// Contents of one cell of the 0x88 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Piece(Color, Piece),
    OffBoard,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Option<(Color, Piece)> {
        match self {
            Cell::Piece(color, piece) => Some((color, piece)),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn is(self, color: Color, piece: Piece) -> bool {
        self == Cell::Piece(color, piece)
    }
}

/// Backup record pushed by `make_move` and consumed by `take_back`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) captured_piece: Option<(Color, Piece)>,
    pub(crate) previous_side: Color,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_hash: u64,
}

impl UnmakeInfo {
    /// The move this record undoes
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece removed by the move, if it was a capture
    #[must_use]
    pub fn captured_piece(&self) -> Option<(Color, Piece)> {
        self.captured_piece
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Cell; 128],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64, // Zobrist hash
    pub(crate) king_squares: [Square; 2],
    pub(crate) history: Vec<UnmakeInfo>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        super::BoardBuilder::starting_position()
            .build()
            .expect("starting position is well-formed")
    }

    /// A board with no pieces and neutral state.
    pub(crate) fn empty() -> Self {
        let mut cells = [Cell::Empty; 128];
        for (idx, cell) in cells.iter_mut().enumerate() {
            if idx as u8 & OFF_BOARD_MASK != 0 {
                *cell = Cell::OffBoard;
            }
        }
        Board {
            cells,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            king_squares: [Square::A1; 2],
            history: Vec::new(),
        }
    }

    /// Clear every on-board cell and return scalar state to its baseline.
    pub fn reset(&mut self) {
        for sq in Square::all() {
            self.cells[sq.as_usize()] = Cell::Empty;
        }
        self.side_to_move = Color::White;
        self.castling_rights = CastlingRights::none();
        self.en_passant_target = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
        self.hash = 0;
        self.king_squares = [Square::A1; 2];
        self.history.clear();
    }

    /// Hash of the current position computed from scratch.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for sq in Square::all() {
            if let Cell::Piece(color, piece) = self.cells[sq.as_usize()] {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }

        if self.side_to_move == Color::White {
            hash ^= ZOBRIST.side_key;
        }

        if let Some(ep_square) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep_square);
        }

        hash ^= ZOBRIST.castling_keys[self.castling_rights.as_usize()];

        hash
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.as_usize()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.as_usize()].piece()
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.as_usize()].is_empty()
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Cached location of the king of `color`
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Number of moves that can currently be taken back
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Backup record of the most recent move, if any
    pub fn last_move(&self) -> Option<&UnmakeInfo> {
        self.history.last()
    }

    /// Fifty-move rule: 100 half-moves without a pawn move or capture
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Positions compare by board and scalar state; move history is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.side_to_move == other.side_to_move
            && self.castling_rights == other.castling_rights
            && self.en_passant_target == other.en_passant_target
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.hash == other.hash
            && self.king_squares == other.king_squares
    }
}

impl Eq for Board {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_board_cells_are_sentinels() {
        let board = Board::new();
        for idx in 0..128usize {
            let off = idx as u8 & OFF_BOARD_MASK != 0;
            assert_eq!(board.cells[idx] == Cell::OffBoard, off, "cell {idx:#04x}");
        }
    }

    #[test]
    fn test_reset_clears_pieces_but_keeps_sentinels() {
        let mut board = Board::new();
        board.reset();
        assert!(Square::all().all(|sq| board.is_empty(sq)));
        assert_eq!(board.cells[0x08], Cell::OffBoard);
        assert_eq!(board.castling_rights(), CastlingRights::none());
        assert_eq!(board.hash(), 0);
        assert_eq!(board.ply(), 0);
    }

    #[test]
    fn test_new_board_hash_matches_recompute() {
        let board = Board::new();
        assert_eq!(board.hash(), board.compute_hash());
        assert_eq!(board.king_square(Color::White), Square::E1);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }
}
