use std::fmt;

use super::{Color, Move, Piece, PieceId, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The position: active pieces, the capture pile and the move history.
///
/// At most one active piece stands on any square. `Board` is deliberately
/// not `Clone`; use [`Board::copy`], which hands every piece a fresh id.
#[derive(Debug)]
pub struct Board {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) captured: Vec<Piece>,
    pub(crate) history: Vec<Move>,
}

impl Board {
    /// A board with the standard 32-piece starting setup.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: Vec::with_capacity(32),
            captured: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Put every piece back on its starting square and forget the history.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.captured.clear();
        self.history.clear();

        for color in Color::BOTH {
            let home = color.home_rank();
            for (file, kind) in BACK_RANK.iter().enumerate() {
                self.pieces
                    .push(Piece::new(*kind, color, Square(file as u8, home)));
            }
            for file in 0..8 {
                self.pieces.push(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square(file, color.pawn_start_rank()),
                ));
            }
        }
    }

    /// Deep copy with fresh piece identities and an empty history.
    #[must_use]
    pub fn copy(&self) -> Board {
        Board {
            pieces: self.pieces.iter().map(Piece::duplicate).collect(),
            captured: self.captured.iter().map(Piece::duplicate).collect(),
            history: Vec::new(),
        }
    }

    /// Active pieces.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Pieces taken so far, oldest first.
    #[must_use]
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Moves made and not yet undone, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Active piece with the given id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    #[inline]
    pub(crate) fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub(crate) fn index_of(&self, id: PieceId) -> Option<usize> {
        self.pieces.iter().position(|p| p.id == id)
    }

    pub(crate) fn index_at(&self, square: Square) -> Option<usize> {
        self.pieces.iter().position(|p| p.square == square)
    }

    #[must_use]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.kind == PieceKind::King && p.color == color)
    }

    /// Sum of active piece values for `color`.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces_of(color).map(|p| p.kind.value()).sum()
    }

    /// Material of `color` minus that of its opponent.
    #[must_use]
    pub fn material_balance(&self, color: Color) -> i32 {
        self.material(color) - self.material(color.opponent())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in 0..8u8 {
            write!(f, "{} |", 8 - rank)?;
            for file in 0..8u8 {
                let ch = self
                    .piece_at(Square(file, rank))
                    .map_or('.', |p| p.kind.to_fen_char(p.color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
