//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Movement patterns and blocking resolution
//! - `attacks.rs` - Attack detection
//! - `legality.rs` - Self-check filtering
//! - `castling.rs` - Castling eligibility, execution and undo
//! - `make_unmake.rs` - Make/undo move correctness
//! - `status.rs` - Check, checkmate and stalemate
//! - `copy.rs` - Copy isolation
//! - `perft.rs` - Node counts for whole-tree move generation
//! - `proptest.rs` - Property-based tests

mod attacks;
mod copy;

use crate::board::{Board, Move, Square};

/// Parse an algebraic square, e.g. `sq("e2")`.
fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Play `notation` as a legal move, panicking if it is not one.
fn play(board: &mut Board, notation: &str) -> Move {
    let mv = board
        .parse_move(notation)
        .unwrap_or_else(|e| panic!("{notation}: {e}"));
    board.make_move(mv).expect("legal move applies");
    *board.last_move().expect("move recorded")
}

/// Destinations of `moves`, sorted.
fn destinations(moves: &[Move]) -> Vec<Square> {
    let mut squares: Vec<Square> = moves.iter().map(Move::destination).collect();
    squares.sort();
    squares
}
