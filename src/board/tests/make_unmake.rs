//! Make/take-back tests.

use crate::board::{Board, CastlingRights, Color, Move, Piece, Square};
use rand::prelude::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn find_move(board: &Board, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    for m in board.generate_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion_piece() == promotion {
            return *m;
        }
    }
    panic!("Expected move {from}{to} not found");
}

fn play(board: &mut Board, from: &str, to: &str) -> Move {
    let mv = find_move(board, sq(from), sq(to), None);
    assert!(board.make_move(mv), "{mv} should be legal");
    mv
}

#[test]
fn test_quiet_move_round_trip() {
    let mut board = Board::new();
    let before = board.clone();
    play(&mut board, "g1", "f3");
    assert_eq!(board.piece_at(sq("f3")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.hash(), board.compute_hash());
    board.take_back();
    assert_eq!(board, before);
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    assert_eq!(board.en_passant_target(), Some(sq("e3")));
    assert_eq!(board.hash(), board.compute_hash());
    play(&mut board, "g8", "f6");
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.fullmove_number(), 2);
    assert_eq!(board.hash(), board.compute_hash());
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let before = board.clone();
    let mv = find_move(&board, sq("e5"), sq("f6"), None);
    assert!(mv.is_en_passant());
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.last_move().unwrap().captured_piece(), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.hash(), board.compute_hash());
    board.take_back();
    assert_eq!(board, before);
    assert_eq!(board.piece_at(sq("f5")), Some((Color::Black, Piece::Pawn)));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let before = board.clone();
    let mv = find_move(&board, sq("a7"), sq("a8"), Some(Piece::Queen));
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    assert_eq!(board.hash(), board.compute_hash());
    board.take_back();
    assert_eq!(board, before);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_black_capture_promotion_restores_black_pawn() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/6p1/4K2R b K - 0 1");
    let before = board.clone();
    let mv = find_move(&board, sq("g2"), sq("h1"), Some(Piece::Knight));
    assert!(mv.is_capture());
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(sq("h1")), Some((Color::Black, Piece::Knight)));
    // capturing the rook on its home square removes the right
    assert_eq!(board.castling_rights(), CastlingRights::none());
    assert_eq!(board.hash(), board.compute_hash());
    board.take_back();
    assert_eq!(board, before);
    assert_eq!(board.piece_at(sq("g2")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("h1")), Some((Color::White, Piece::Rook)));
}

#[test]
fn test_castling_moves_rook_and_restores() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = board.clone();

    let mv = find_move(&board, Square::E1, Square::G1, None);
    assert!(mv.is_castling());
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(Square::F1), Some((Color::White, Piece::Rook)));
    assert_eq!(board.piece_at(Square::H1), None);
    assert_eq!(board.king_square(Color::White), Square::G1);
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(!board.castling_rights().has(Color::White, false));
    assert!(board.castling_rights().has(Color::Black, true));
    assert_eq!(board.hash(), board.compute_hash());
    board.take_back();
    assert_eq!(board, before);

    board.load_position("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let before = board.clone();
    let mv = find_move(&board, Square::E8, Square::C8, None);
    assert!(board.make_move(mv));
    assert_eq!(board.piece_at(Square::D8), Some((Color::Black, Piece::Rook)));
    assert_eq!(board.piece_at(Square::A8), None);
    assert_eq!(board.king_square(Color::Black), Square::C8);
    board.take_back();
    assert_eq!(board, before);
}

#[test]
fn test_rook_move_drops_one_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut board, "a1", "a2");
    let rights = board.castling_rights();
    assert!(rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert_eq!(rights.as_u8(), 13);
    assert_eq!(board.hash(), board.compute_hash());
}

#[test]
fn test_illegal_move_is_rolled_back() {
    let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    let before = board.clone();
    let mv = find_move(&board, sq("e2"), sq("c3"), None);
    assert!(!board.make_move(mv));
    assert_eq!(board, before);
    assert_eq!(board.ply(), 0);
}

#[test]
fn test_king_walk_into_check_is_rejected() {
    // rook on d2 covers the d-file and the second rank
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1");
    for target in ["d1", "e2", "f2"] {
        let step = find_move(&board, Square::E1, sq(target), None);
        assert!(!board.make_move(step), "e1{target}");
        assert_eq!(board.king_square(Color::White), Square::E1);
    }
    let capture = find_move(&board, Square::E1, sq("d2"), None);
    assert!(capture.is_capture());
    assert!(board.make_move(capture));
    assert_eq!(board.king_square(Color::White), sq("d2"));
    board.take_back();
    assert_eq!(board.king_square(Color::White), Square::E1);
    assert_eq!(board.legal_moves().len(), 2);
}

#[test]
fn test_halfmove_clock_resets_on_capture_and_pawn_move() {
    let mut board = Board::from_fen("4k3/8/8/3p4/8/2N5/4P3/4K3 w - - 7 20");
    play(&mut board, "c3", "b5");
    assert_eq!(board.halfmove_clock(), 8);
    play(&mut board, "d5", "d4");
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 21);
    play(&mut board, "b5", "d4");
    assert_eq!(board.halfmove_clock(), 0);
    board.take_back();
    board.take_back();
    board.take_back();
    assert_eq!(board.halfmove_clock(), 7);
    assert_eq!(board.fullmove_number(), 20);
}

#[test]
#[should_panic(expected = "no move to undo")]
fn test_take_back_on_empty_history_panics() {
    let mut board = Board::new();
    board.take_back();
}

#[test]
fn test_random_playouts_restore_start() {
    let mut rng = StdRng::seed_from_u64(0x88);
    for _ in 0..20 {
        let mut board = Board::new();
        let start = board.clone();
        let mut played = 0;
        for _ in 0..60 {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            assert!(board.make_move(mv));
            assert_eq!(board.hash(), board.compute_hash(), "after {mv}");
            played += 1;
        }
        for _ in 0..played {
            board.take_back();
        }
        assert_eq!(board, start);
    }
}
