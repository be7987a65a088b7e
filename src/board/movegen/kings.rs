use super::super::{Board, Move, MoveList, Piece, Square};

/// Squares involved in one castling move for one color.
struct CastlePath {
    kingside: bool,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    /// Must be empty between king and rook
    clear: &'static [Square],
    /// King's start, transit and destination; none may be attacked
    safe: [Square; 3],
}

const CASTLE_PATHS: [[CastlePath; 2]; 2] = [
    [
        CastlePath {
            kingside: true,
            king_to: Square::G1,
            rook_from: Square::H1,
            rook_to: Square::F1,
            clear: &[Square::F1, Square::G1],
            safe: [Square::E1, Square::F1, Square::G1],
        },
        CastlePath {
            kingside: false,
            king_to: Square::C1,
            rook_from: Square::A1,
            rook_to: Square::D1,
            clear: &[Square::B1, Square::C1, Square::D1],
            safe: [Square::E1, Square::D1, Square::C1],
        },
    ],
    [
        CastlePath {
            kingside: true,
            king_to: Square::G8,
            rook_from: Square::H8,
            rook_to: Square::F8,
            clear: &[Square::F8, Square::G8],
            safe: [Square::E8, Square::F8, Square::G8],
        },
        CastlePath {
            kingside: false,
            king_to: Square::C8,
            rook_from: Square::A8,
            rook_to: Square::D8,
            clear: &[Square::B8, Square::C8, Square::D8],
            safe: [Square::E8, Square::D8, Square::C8],
        },
    ],
];

/// Rook source and destination for a castling move landing the king on `king_to`.
pub(crate) fn castling_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    CASTLE_PATHS
        .iter()
        .flatten()
        .find(|path| path.king_to == king_to)
        .map(|path| (path.rook_from, path.rook_to))
}

impl Board {
    /// Castling moves for the king standing on `from`.
    ///
    /// The king must stand on its home square. Rights, the rook, empty
    /// squares between them and attacks on the king's path are all checked
    /// here.
    pub(super) fn generate_castling_moves(&self, from: Square, moves: &mut MoveList) {
        let us = self.side_to_move;
        if from.rank() != us.back_rank() || from.file() != 4 {
            return;
        }
        let them = us.opponent();

        for path in &CASTLE_PATHS[us.index()] {
            if !self.castling_rights.has(us, path.kingside) {
                continue;
            }
            if !path.clear.iter().all(|&sq| self.is_empty(sq)) {
                continue;
            }
            if !self.cell(path.rook_from).is(us, Piece::Rook) {
                continue;
            }
            if path.safe.iter().any(|&sq| self.is_square_attacked(sq, them)) {
                continue;
            }
            moves.push(Move::castle(from, path.king_to));
        }
    }
}
