//! Core chess types.
//!
//! - `Piece`, `PieceKind`, `PieceId` and `Color` - pieces and their identity
//! - `Square` - (file, rank) board coordinate
//! - `Move`, `CastlingSide`, `Capture` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Capture, CastlingSide, Move};
pub use piece::{Color, Piece, PieceId, PieceKind, PROMOTION_KINDS};
pub use square::Square;
