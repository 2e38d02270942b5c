use super::super::geometry::knight_hops;
use super::super::{Board, Move, Piece};
use super::MoveGroup;

impl Board {
    pub(crate) fn knight_pattern(&self, knight: &Piece) -> Vec<MoveGroup> {
        knight_hops(knight.square)
            .iter()
            .filter(|&&to| self.piece_at(to).map_or(true, |p| p.color != knight.color))
            .map(|&to| vec![Move::new(knight, to)])
            .collect()
    }
}
