//! Copy isolation tests.

use super::{play, sq};
use crate::board::{Board, Color};

#[test]
fn test_copy_gives_fresh_ids_and_equal_values() {
    let board = Board::new();
    let copy = board.copy();
    assert_eq!(copy.pieces().len(), board.pieces().len());

    for (original, clone) in board.pieces().iter().zip(copy.pieces()) {
        assert_ne!(original.id(), clone.id());
        assert!(original.same_value(clone));
    }
    for clone in copy.pieces() {
        assert!(board.piece(clone.id()).is_none());
    }
}

#[test]
fn test_mutating_copy_leaves_original_alone() {
    let board = Board::new();
    let before = board.pieces().to_vec();

    let mut copy = board.copy();
    play(&mut copy, "e2e4");
    play(&mut copy, "d7d5");
    play(&mut copy, "e4d5");

    assert_eq!(board.pieces(), before.as_slice());
    assert!(board.history().is_empty());
    assert!(board.captured().is_empty());
    assert_eq!(copy.captured().len(), 1);
}

#[test]
fn test_mutating_original_leaves_copy_alone() {
    let mut board = Board::new();
    let copy = board.copy();
    let snapshot = copy.pieces().to_vec();

    play(&mut board, "g1f3");
    assert_eq!(copy.pieces(), snapshot.as_slice());
    assert!(copy.piece_at(sq("f3")).is_none());
}

#[test]
fn test_copy_carries_capture_pile_and_flags() {
    let mut board = Board::new();
    play(&mut board, "e2e4");
    play(&mut board, "d7d5");
    play(&mut board, "e4d5");

    let copy = board.copy();
    assert_eq!(copy.captured().len(), 1);
    assert!(copy.captured()[0].same_value(&board.captured()[0]));
    assert_ne!(copy.captured()[0].id(), board.captured()[0].id());
    assert!(copy.piece_at(sq("d5")).unwrap().has_moved());
    assert!(copy.history().is_empty());
    assert!(copy.last_move().is_none());
}

#[test]
fn test_copy_agrees_on_legal_moves_and_status() {
    let mut board = Board::new();
    play(&mut board, "e2e4");
    play(&mut board, "e7e5");
    let copy = board.copy();

    for color in Color::BOTH {
        let mut ours: Vec<String> = board
            .all_legal_moves(color)
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut theirs: Vec<String> = copy
            .all_legal_moves(color)
            .iter()
            .map(ToString::to_string)
            .collect();
        ours.sort();
        theirs.sort();
        assert_eq!(ours, theirs);
        assert_eq!(board.check_status(color), copy.check_status(color));
    }
    assert_eq!(board.to_placement(), copy.to_placement());
}

#[test]
fn test_copy_of_copy_is_independent() {
    let board = Board::new();
    let first = board.copy();
    let second = first.copy();
    for ((a, b), c) in board.pieces().iter().zip(first.pieces()).zip(second.pieces()) {
        assert_ne!(a.id(), c.id());
        assert_ne!(b.id(), c.id());
        assert!(a.same_value(c));
    }
}
