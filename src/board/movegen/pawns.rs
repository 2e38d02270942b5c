use super::super::{Board, Move, Piece, Square, PROMOTION_KINDS};
use super::MoveGroup;

impl Board {
    /// Forward push (one or two squares) and the two diagonal captures.
    ///
    /// The double step is only offered from the pawn's start rank, so it can
    /// never land on the last rank unpromoted.
    ///
    /// Forward squares must be empty; diagonal groups exist only when an
    /// enemy stands there. Moves onto the last rank are fanned out into one
    /// singleton group per promotion kind.
    pub(crate) fn pawn_pattern(&self, pawn: &Piece) -> Vec<MoveGroup> {
        let mut groups = Vec::new();
        let dir = pawn.color.pawn_direction();

        if let Some(one) = pawn.square.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
            if one.rank() == pawn.color.promotion_rank() {
                groups.extend(promotion_groups(pawn, one));
            } else {
                let mut forward = vec![Move::new(pawn, one)];
                if !pawn.has_moved && pawn.square.rank() == pawn.color.pawn_start_rank() {
                    if let Some(two) = one.offset(0, dir).filter(|&sq| self.is_empty(sq)) {
                        forward.push(Move::new(pawn, two));
                    }
                }
                groups.push(forward);
            }
        }

        for df in [-1, 1] {
            let Some(target) = pawn.square.offset(df, dir) else {
                continue;
            };
            let enemy = self
                .piece_at(target)
                .is_some_and(|p| p.color != pawn.color);
            if !enemy {
                continue;
            }
            if target.rank() == pawn.color.promotion_rank() {
                groups.extend(promotion_groups(pawn, target));
            } else {
                groups.push(vec![Move::new(pawn, target)]);
            }
        }

        groups
    }
}

fn promotion_groups(pawn: &Piece, target: Square) -> impl Iterator<Item = MoveGroup> + '_ {
    PROMOTION_KINDS
        .iter()
        .map(move |&kind| vec![Move::with_promotion(pawn, target, kind)])
}
