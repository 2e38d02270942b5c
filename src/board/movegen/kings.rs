use super::super::geometry::king_neighbours;
use super::super::{Board, CastlingSide, Move, Piece, PieceKind, Square};
use super::MoveGroup;

impl Board {
    /// One-step moves plus any castling moves available right now.
    pub(crate) fn king_pattern(&self, king: &Piece) -> Vec<MoveGroup> {
        let mut groups: Vec<MoveGroup> = king_neighbours(king.square)
            .iter()
            .map(|&to| vec![Move::new(king, to)])
            .collect();

        for side in CastlingSide::BOTH {
            if self.can_castle(king, side) {
                if let Some(mv) = Move::castle(king, side) {
                    groups.push(vec![mv]);
                }
            }
        }

        groups
    }

    /// The unmoved rook `king` would castle with on `side`, if there is one.
    pub(crate) fn castling_rook(&self, king: &Piece, side: CastlingSide) -> Option<&Piece> {
        let corner = Square(side.rook_file(), king.square.rank());
        self.piece_at(corner).filter(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
        })
    }

    /// King and rook unmoved on the home rank, nothing between them, and
    /// none of the squares the king stands on, crosses or lands on attacked.
    pub(crate) fn can_castle(&self, king: &Piece, side: CastlingSide) -> bool {
        if king.has_moved || king.square.rank() != king.color.home_rank() {
            return false;
        }
        let Some(rook) = self.castling_rook(king, side) else {
            return false;
        };

        let (lo, hi) = if rook.square.file() < king.square.file() {
            (rook.square.file(), king.square.file())
        } else {
            (king.square.file(), rook.square.file())
        };
        let rank = king.square.rank();
        if ((lo + 1)..hi).any(|file| !self.is_empty(Square(file, rank))) {
            return false;
        }

        let enemy = king.color.opponent();
        (0..=2).all(|step| {
            king.square
                .offset(step * side.direction(), 0)
                .is_some_and(|sq| !self.is_square_attacked(sq, enemy))
        })
    }
}
