//! Coordinate-notation move parsing (`e2e4`, `e7e8q`, `e1g1`).

use super::{Board, Move, MoveParseError, PieceKind, Square};

impl Board {
    /// Resolve a coordinate-notation string against the legal moves of the
    /// piece on its origin square.
    ///
    /// A promotion without a suffix letter resolves to a queen. Castling is
    /// written as the king's two-square move.
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_char(c) {
                Some(kind) if !matches!(kind, PieceKind::Pawn | PieceKind::King) => Some(kind),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let piece = self.piece_at(from).ok_or_else(|| MoveParseError::NoPiece {
            notation: notation.to_string(),
        })?;

        let candidates: Vec<Move> = self
            .legal_moves(piece)
            .into_iter()
            .filter(|m| m.destination == to)
            .collect();
        let wanted = promotion.or_else(|| {
            candidates
                .iter()
                .any(|m| m.promotion.is_some())
                .then_some(PieceKind::Queen)
        });

        candidates
            .into_iter()
            .find(|m| m.promotion == wanted)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}
