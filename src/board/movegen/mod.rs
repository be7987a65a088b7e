mod kings;
mod leapers;
mod pawns;
mod sliders;

pub(crate) use kings::castling_rook_squares;

use super::attack_tables::{Leaper, Slider};
use super::state::Cell;
use super::{Board, MoveList, Piece, Square};

impl Board {
    /// Pseudo-legal moves for the side to move.
    ///
    /// Squares are visited in increasing 0x88 order. Castling is fully
    /// checked here; every other move may still leave the mover's king in
    /// check and is rejected by `make_move`.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move;

        for from in Square::all() {
            let Cell::Piece(color, piece) = self.cell(from) else {
                continue;
            };
            if color != us {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_leaper_moves(from, Leaper::Knight, &mut moves),
                Piece::Bishop => self.generate_slider_moves(from, Slider::Bishop, &mut moves),
                Piece::Rook => self.generate_slider_moves(from, Slider::Rook, &mut moves),
                Piece::Queen => {
                    for slider in Slider::ALL {
                        self.generate_slider_moves(from, slider, &mut moves);
                    }
                }
                Piece::King => {
                    self.generate_castling_moves(from, &mut moves);
                    self.generate_leaper_moves(from, Leaper::King, &mut moves);
                }
            }
        }

        moves
    }

    /// Moves that do not leave the mover's king attacked.
    pub fn legal_moves(&mut self) -> MoveList {
        let mut legal = MoveList::new();
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                legal.push(mv);
                self.take_back();
            }
        }
        legal
    }

    fn has_legal_move(&mut self) -> bool {
        for mv in self.generate_moves() {
            if self.make_move(mv) {
                self.take_back();
                return true;
            }
        }
        false
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_move()
    }
}
