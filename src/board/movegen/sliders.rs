use super::super::geometry::{ray, DIAGONAL, ORTHOGONAL};
use super::super::{Board, Move, Piece};
use super::MoveGroup;

impl Board {
    pub(crate) fn bishop_pattern(&self, bishop: &Piece) -> Vec<MoveGroup> {
        sliding_groups(bishop, &DIAGONAL)
    }

    pub(crate) fn rook_pattern(&self, rook: &Piece) -> Vec<MoveGroup> {
        sliding_groups(rook, &ORTHOGONAL)
    }

    pub(crate) fn queen_pattern(&self, queen: &Piece) -> Vec<MoveGroup> {
        let mut groups = sliding_groups(queen, &DIAGONAL);
        groups.extend(sliding_groups(queen, &ORTHOGONAL));
        groups
    }
}

fn sliding_groups(piece: &Piece, steps: &[(i8, i8)]) -> Vec<MoveGroup> {
    steps
        .iter()
        .map(|&step| {
            ray(piece.square, step)
                .into_iter()
                .map(|to| Move::new(piece, to))
                .collect()
        })
        .collect()
}
