//! Attack detection on the 0x88 board.
//!
//! Attacks are found by looking outward from the target square: pawn
//! attacker squares first, then leaper offsets, then slider rays walked
//! until the first occupied square.

mod tables;

pub(crate) use tables::{
    Leaper, Slider, CASTLING_RIGHTS_MASK, PAWN_ATTACKER_OFFSETS, PAWN_CAPTURE_OFFSETS,
};

use super::state::Cell;
use super::{Board, Color, Piece, Square};

impl Board {
    /// Returns true if any piece of `attacker_color` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker_color: Color) -> bool {
        for &delta in &PAWN_ATTACKER_OFFSETS[attacker_color.index()] {
            if let Some(from) = square.offset(delta) {
                if self.cell(from).is(attacker_color, Piece::Pawn) {
                    return true;
                }
            }
        }

        for leaper in Leaper::ALL {
            for &delta in leaper.offsets() {
                if let Some(from) = square.offset(delta) {
                    if self.cell(from).is(attacker_color, leaper.piece()) {
                        return true;
                    }
                }
            }
        }

        for slider in Slider::ALL {
            for &delta in slider.offsets() {
                let mut next = square.offset(delta);
                while let Some(sq) = next {
                    match self.cell(sq) {
                        Cell::Empty => next = sq.offset(delta),
                        Cell::Piece(color, piece) => {
                            if color == attacker_color && slider.moves_like(piece) {
                                return true;
                            }
                            break;
                        }
                        Cell::OffBoard => break,
                    }
                }
            }
        }

        false
    }

    /// Returns true if the king of `color` is attacked by the other side.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_point_forward() {
        let board = Board::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        // White pawn on e2 covers d3 and f3
        assert!(board.is_square_attacked(sq("d3"), Color::White));
        assert!(board.is_square_attacked(sq("f3"), Color::White));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        // Black pawn on d4 covers c3 and e3, not d3 or c5
        assert!(board.is_square_attacked(sq("c3"), Color::Black));
        assert!(board.is_square_attacked(sq("e3"), Color::Black));
        assert!(!board.is_square_attacked(sq("c5"), Color::Black));
    }

    #[test]
    fn test_knight_attacks_do_not_wrap() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1");
        assert!(board.is_square_attacked(sq("b3"), Color::White));
        assert!(board.is_square_attacked(sq("c2"), Color::White));
        assert!(!board.is_square_attacked(sq("h2"), Color::White));
        assert!(!board.is_square_attacked(sq("g3"), Color::White));
    }

    #[test]
    fn test_slider_rays_stop_at_blockers() {
        let board = Board::from_fen("4k3/8/8/8/R2p4/8/8/4K3 w - - 0 1");
        assert!(board.is_square_attacked(sq("c4"), Color::White));
        assert!(board.is_square_attacked(sq("d4"), Color::White));
        assert!(!board.is_square_attacked(sq("e4"), Color::White));
        assert!(board.is_square_attacked(sq("a8"), Color::White));
    }

    #[test]
    fn test_queen_attacks_on_both_ray_families() {
        let board = Board::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1");
        assert!(board.is_square_attacked(sq("h8"), Color::White));
        assert!(board.is_square_attacked(sq("d8"), Color::White));
        assert!(board.is_square_attacked(sq("a1"), Color::White));
        assert!(!board.is_square_attacked(sq("e6"), Color::White));
    }

    #[test]
    fn test_bishop_does_not_attack_orthogonally() {
        let board = Board::from_fen("4k3/8/8/8/3B4/8/8/4K3 w - - 0 1");
        assert!(!board.is_square_attacked(sq("d8"), Color::White));
        assert!(board.is_square_attacked(sq("g7"), Color::White));
    }

    #[test]
    fn test_king_adjacency_and_check() {
        let board = Board::from_fen("4k3/4r3/8/8/8/8/8/4K3 w - - 0 1");
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
        assert!(board.is_square_attacked(sq("d7"), Color::Black));
    }
}
