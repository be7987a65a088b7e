use super::super::attack_tables::Slider;
use super::super::state::Cell;
use super::super::{Board, Move, MoveList, Square};

impl Board {
    /// Walk each ray of `slider` until the board edge or the first piece.
    pub(super) fn generate_slider_moves(&self, from: Square, slider: Slider, moves: &mut MoveList) {
        let us = self.side_to_move;
        for &delta in slider.offsets() {
            let mut next = from.offset(delta);
            while let Some(to) = next {
                match self.cell(to) {
                    Cell::Empty => {
                        moves.push(Move::quiet(from, to));
                        next = to.offset(delta);
                    }
                    Cell::Piece(color, _) => {
                        if color != us {
                            moves.push(Move::capture(from, to));
                        }
                        break;
                    }
                    Cell::OffBoard => break,
                }
            }
        }
    }
}
