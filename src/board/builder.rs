//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than from the standard
//! setup.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(4, 7), Color::White, PieceKind::King)
//!     .piece(Square(4, 0), Color::Black, PieceKind::King)
//!     .moved_piece(Square(0, 1), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces().len(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind, bool)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        BoardBuilder {
            pieces: board
                .pieces()
                .iter()
                .map(|p| (p.square, p.color, p.kind, p.has_moved))
                .collect(),
        }
    }

    /// Place an unmoved piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, color, kind, false)
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, color, kind, true)
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, ..)| *sq != square);
        self
    }

    /// Build the board. Every piece gets a fresh identity.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        board.pieces = self
            .pieces
            .into_iter()
            .map(|(square, color, kind, has_moved)| {
                Piece::new(kind, color, square).with_moved(has_moved)
            })
            .collect();
        board
    }

    fn place(mut self, square: Square, color: Color, kind: PieceKind, has_moved: bool) -> Self {
        self.pieces.retain(|(sq, ..)| *sq != square);
        self.pieces.push((square, color, kind, has_moved));
        self
    }
}
