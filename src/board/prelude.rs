//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status().get(Color::White), Some(CheckStatus::default()));
//! ```

pub use super::{
    Board, BoardBuilder, BoardStatus, CastlingSide, CheckStatus, Color, Move, MoveError,
    MoveParseError, Piece, PieceKind, PlacementError, Square, SquareError,
};
