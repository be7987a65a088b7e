use super::super::attack_tables::PAWN_CAPTURE_OFFSETS;
use super::super::state::Cell;
use super::super::{Board, Move, MoveList, Square, PROMOTION_PIECES};

/// Emit one move per promotion choice, queen first.
fn push_promotions(moves: &mut MoveList, from: Square, to: Square, capture: bool) {
    for piece in PROMOTION_PIECES {
        moves.push(Move::promotion(from, to, piece, capture));
    }
}

impl Board {
    pub(super) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let us = self.side_to_move;
        let promotion_rank = us.pawn_promotion_rank();

        if let Some(to) = from.offset(us.pawn_push()) {
            if self.is_empty(to) {
                if to.rank() == promotion_rank {
                    push_promotions(moves, from, to, false);
                } else {
                    moves.push(Move::quiet(from, to));
                    if from.rank() == us.pawn_start_rank() {
                        if let Some(double) = to.offset(us.pawn_push()) {
                            if self.is_empty(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        for &delta in &PAWN_CAPTURE_OFFSETS[us.index()] {
            let Some(to) = from.offset(delta) else {
                continue;
            };
            match self.cell(to) {
                Cell::Piece(color, _) if color != us => {
                    if to.rank() == promotion_rank {
                        push_promotions(moves, from, to, true);
                    } else {
                        moves.push(Move::capture(from, to));
                    }
                }
                Cell::Empty if self.en_passant_target == Some(to) => {
                    moves.push(Move::en_passant(from, to));
                }
                _ => {}
            }
        }
    }
}
