//! Chess board representation and rules.
//!
//! Pieces are plain values carrying a unique id, so a copied board never
//! shares state with its original. Move legality is decided by playing each
//! candidate on a throwaway copy. Castling and promotion are supported;
//! en passant is not.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let mut board = Board::new();
//! let knight = board.piece_at(Square(6, 7)).unwrap();
//! let moves = board.legal_moves(knight);
//! assert_eq!(moves.len(), 2);
//!
//! board.make_move(moves[0]).unwrap();
//! assert!(board.status().get(Color::Black).is_some());
//! board.undo_move();
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod geometry;
mod make_unmake;
mod movegen;
mod notation;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, MoveParseError, PlacementError, SquareError};
pub use movegen::MoveGroup;
pub use state::Board;
pub use status::{BoardStatus, CheckStatus};
pub use types::{Capture, CastlingSide, Color, Move, Piece, PieceId, PieceKind, Square};

pub(crate) use types::PROMOTION_KINDS;
