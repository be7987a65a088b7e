use super::super::attack_tables::Leaper;
use super::super::state::Cell;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Quiet move onto an empty square, capture onto an enemy piece,
    /// nothing onto a friendly piece.
    #[inline]
    pub(super) fn step_move(&self, from: Square, to: Square, us: Color) -> Option<Move> {
        match self.cell(to) {
            Cell::Empty => Some(Move::quiet(from, to)),
            Cell::Piece(color, _) if color != us => Some(Move::capture(from, to)),
            _ => None,
        }
    }

    pub(super) fn generate_leaper_moves(&self, from: Square, leaper: Leaper, moves: &mut MoveList) {
        let us = self.side_to_move;
        for &delta in leaper.offsets() {
            if let Some(to) = from.offset(delta) {
                if let Some(mv) = self.step_move(from, to, us) {
                    moves.push(mv);
                }
            }
        }
    }
}
