pub mod board;

pub use board::{Board, CheckStatus, Color, Move, Piece, PieceKind, Square};
