use super::geometry::{knight_hops, DIAGONAL, ORTHOGONAL};
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// True if `by` could capture on `square` next turn, whoever is to move.
    ///
    /// Works straight off the piece layout and never generates moves, so it
    /// is safe to call from the legality filter and from castling checks.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Attacking pawns sit one step behind the square in their own advance direction.
        let behind = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(df, behind) {
                if self.holds(from, by, |kind| kind == PieceKind::Pawn) {
                    return true;
                }
            }
        }

        for &from in knight_hops(square) {
            if self.holds(from, by, |kind| kind == PieceKind::Knight) {
                return true;
            }
        }

        self.ray_attacked(square, by, &ORTHOGONAL, PieceKind::attacks_straight)
            || self.ray_attacked(square, by, &DIAGONAL, PieceKind::attacks_diagonally)
    }

    /// True if `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king(color)
            .is_some_and(|king| self.is_square_attacked(king.square, color.opponent()))
    }

    fn ray_attacked(
        &self,
        square: Square,
        by: Color,
        steps: &[(i8, i8)],
        slides: fn(PieceKind) -> bool,
    ) -> bool {
        steps.iter().any(|&(df, dr)| {
            let mut current = square;
            while let Some(next) = current.offset(df, dr) {
                if let Some(blocker) = self.piece_at(next) {
                    return blocker.color == by
                        && (slides(blocker.kind)
                            || (blocker.kind == PieceKind::King && next.is_adjacent(square)));
                }
                current = next;
            }
            false
        })
    }

    fn holds(&self, square: Square, color: Color, kind: impl Fn(PieceKind) -> bool) -> bool {
        self.piece_at(square)
            .is_some_and(|p: &Piece| p.color == color && kind(p.kind))
    }
}
