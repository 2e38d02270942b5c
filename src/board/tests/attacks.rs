//! Attack detection tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, PieceKind};

#[test]
fn test_white_pawn_attacks_forward_diagonals() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e4"), Color::White, PieceKind::Pawn)
        .build();
    assert!(board.is_square_attacked(sq("d5"), Color::White));
    assert!(board.is_square_attacked(sq("f5"), Color::White));
    assert!(!board.is_square_attacked(sq("e5"), Color::White));
    assert!(!board.is_square_attacked(sq("d3"), Color::White));
    assert!(!board.is_square_attacked(sq("d5"), Color::Black));
}

#[test]
fn test_black_pawn_attacks_forward_diagonals() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e5"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(board.is_square_attacked(sq("d4"), Color::Black));
    assert!(board.is_square_attacked(sq("f4"), Color::Black));
    assert!(!board.is_square_attacked(sq("d6"), Color::Black));
}

#[test]
fn test_knight_attacks_jump_over_pieces() {
    let board = Board::new();
    assert!(board.is_square_attacked(sq("f3"), Color::White));
    assert!(board.is_square_attacked(sq("c6"), Color::Black));
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
}

#[test]
fn test_rook_attack_is_blocked() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a5"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(board.is_square_attacked(sq("a4"), Color::White));
    assert!(board.is_square_attacked(sq("a5"), Color::White));
    assert!(!board.is_square_attacked(sq("a6"), Color::White));
    assert!(board.is_square_attacked(sq("h1"), Color::White));
    assert!(!board.is_square_attacked(sq("b2"), Color::White));
}

#[test]
fn test_own_non_slider_blocks_ray() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a3"), Color::White, PieceKind::Knight)
        .build();
    assert!(!board.is_square_attacked(sq("a6"), Color::White));
}

#[test]
fn test_queen_attacks_both_ways() {
    let board = BoardBuilder::new()
        .piece(sq("d4"), Color::Black, PieceKind::Queen)
        .build();
    assert!(board.is_square_attacked(sq("h8"), Color::Black));
    assert!(board.is_square_attacked(sq("d1"), Color::Black));
    assert!(board.is_square_attacked(sq("a1"), Color::Black));
    assert!(!board.is_square_attacked(sq("e6"), Color::Black));
}

#[test]
fn test_bishop_does_not_attack_straight() {
    let board = BoardBuilder::new()
        .piece(sq("c1"), Color::White, PieceKind::Bishop)
        .build();
    assert!(board.is_square_attacked(sq("h6"), Color::White));
    assert!(!board.is_square_attacked(sq("c5"), Color::White));
}

#[test]
fn test_king_attacks_adjacent_only() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .build();
    assert!(board.is_square_attacked(sq("e5"), Color::White));
    assert!(board.is_square_attacked(sq("d3"), Color::White));
    assert!(!board.is_square_attacked(sq("e6"), Color::White));
    assert!(!board.is_square_attacked(sq("e4"), Color::White));
}

#[test]
fn test_attack_detection_is_side_effect_free() {
    let board = Board::new();
    let before = board.pieces().to_vec();
    for square in crate::board::Square::all() {
        let _ = board.is_square_attacked(square, Color::White);
        let _ = board.is_square_attacked(square, Color::Black);
    }
    assert_eq!(board.pieces(), before.as_slice());
}

#[test]
fn test_start_position_attacked_ranks() {
    let board = Board::new();
    // White controls its third rank, Black its sixth; the middle is free.
    for file in 0..8u8 {
        assert!(board.is_square_attacked(crate::board::Square(file, 5), Color::White));
        assert!(board.is_square_attacked(crate::board::Square(file, 2), Color::Black));
        assert!(!board.is_square_attacked(crate::board::Square(file, 4), Color::White));
        assert!(!board.is_square_attacked(crate::board::Square(file, 3), Color::Black));
    }
}
