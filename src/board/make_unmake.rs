use crate::zobrist::ZOBRIST;

use super::attack_tables::CASTLING_RIGHTS_MASK;
use super::movegen::castling_rook_squares;
use super::state::{Cell, UnmakeInfo};
use super::{Board, Color, Move, Piece, Square};

/// Square of the pawn removed by an en passant capture: beside the
/// capturing pawn, on the file it moves to.
#[inline]
fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::from_index_unchecked((from.rank() << 4) | to.file())
}

/// Square passed over by a double pawn push.
#[inline]
fn passed_square(from: Square, to: Square) -> Square {
    Square::from_index_unchecked((from.index() + to.index()) / 2)
}

impl Board {
    #[inline]
    fn put_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.as_usize()] = Cell::Piece(color, piece);
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    #[inline]
    fn lift_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.as_usize()] = Cell::Empty;
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// Play `mv` for the side to move.
    ///
    /// Returns `false` and leaves the position untouched if the move would
    /// leave the mover's own king attacked. `mv` must come from
    /// `generate_moves` on this position; anything else is a contract
    /// violation.
    #[must_use]
    pub fn make_move(&mut self, mv: Move) -> bool {
        let us = self.side_to_move;
        let them = us.opponent();
        let from = mv.from();
        let to = mv.to();

        let Cell::Piece(_, moving) = self.cell(from) else {
            panic!("make_move: no piece on {from} for {mv}");
        };

        let captured_square = if mv.is_en_passant() {
            en_passant_victim(from, to)
        } else {
            to
        };
        let captured_piece = self.cell(captured_square).piece();

        self.history.push(UnmakeInfo {
            mv,
            captured_piece,
            previous_side: us,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_hash: self.hash,
        });

        if let Some((color, piece)) = captured_piece {
            self.lift_piece(captured_square, color, piece);
        }

        self.lift_piece(from, us, moving);
        self.put_piece(to, us, mv.promotion_piece().unwrap_or(moving));

        if mv.is_castling() {
            let (rook_from, rook_to) =
                castling_rook_squares(to).expect("castling move lands on c- or g-file");
            self.lift_piece(rook_from, us, Piece::Rook);
            self.put_piece(rook_to, us, Piece::Rook);
        }

        if moving == Piece::King {
            self.king_squares[us.index()] = to;
        }

        if moving == Piece::Pawn || captured_piece.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if let Some(old) = self.en_passant_target.take() {
            self.hash ^= ZOBRIST.en_passant(old);
        }
        if mv.is_double_pawn_push() {
            let target = passed_square(from, to);
            self.en_passant_target = Some(target);
            self.hash ^= ZOBRIST.en_passant(target);
        }

        self.hash ^= ZOBRIST.castling_keys[self.castling_rights.as_usize()];
        self.castling_rights
            .retain(CASTLING_RIGHTS_MASK[from.as_usize()] & CASTLING_RIGHTS_MASK[to.as_usize()]);
        self.hash ^= ZOBRIST.castling_keys[self.castling_rights.as_usize()];

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;
        self.hash ^= ZOBRIST.side_key;

        if self.is_square_attacked(self.king_squares[us.index()], them) {
            self.take_back();
            return false;
        }

        true
    }

    /// Undo the most recent successful `make_move`.
    ///
    /// # Panics
    /// Panics if there is no move to take back.
    pub fn take_back(&mut self) {
        let info = self
            .history
            .pop()
            .expect("take_back called with no move to undo");
        let mv = info.mv;
        let us = info.previous_side;
        let from = mv.from();
        let to = mv.to();

        let Cell::Piece(_, placed) = self.cell(to) else {
            panic!("take_back: no piece on {to} for {mv}");
        };
        let moved = if mv.is_promotion() { Piece::Pawn } else { placed };

        self.cells[to.as_usize()] = Cell::Empty;
        self.cells[from.as_usize()] = Cell::Piece(us, moved);

        if let Some((color, piece)) = info.captured_piece {
            let captured_square = if mv.is_en_passant() {
                en_passant_victim(from, to)
            } else {
                to
            };
            self.cells[captured_square.as_usize()] = Cell::Piece(color, piece);
        }

        if mv.is_castling() {
            if let Some((rook_from, rook_to)) = castling_rook_squares(to) {
                self.cells[rook_to.as_usize()] = Cell::Empty;
                self.cells[rook_from.as_usize()] = Cell::Piece(us, Piece::Rook);
            }
        }

        if moved == Piece::King {
            self.king_squares[us.index()] = from;
        }

        self.side_to_move = info.previous_side;
        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
    }
}
