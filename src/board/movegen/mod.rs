//! Move generation.
//!
//! Each piece first yields a movement pattern: directional groups of
//! candidate moves ordered nearest to farthest. Blocking resolution walks
//! every group and stops at the first occupied square. The legality filter
//! then simulates each survivor on a private copy and drops the ones that
//! leave the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::{Board, Color, Move, Piece, PieceKind, Square};

/// Candidate moves along one direction, nearest first.
pub type MoveGroup = Vec<Move>;

impl Board {
    /// Geometrically possible moves for `piece`, grouped by direction.
    ///
    /// Off-board squares are already gone; blocking and self-check are not
    /// yet considered.
    #[must_use]
    pub fn movement_pattern(&self, piece: &Piece) -> Vec<MoveGroup> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_pattern(piece),
            PieceKind::Knight => self.knight_pattern(piece),
            PieceKind::Bishop => self.bishop_pattern(piece),
            PieceKind::Rook => self.rook_pattern(piece),
            PieceKind::Queen => self.queen_pattern(piece),
            PieceKind::King => self.king_pattern(piece),
        }
    }

    /// Flatten `groups`, cutting each one off at its first occupied square.
    ///
    /// That square survives only if it holds an enemy piece.
    #[must_use]
    pub fn resolve_blocking(&self, piece: &Piece, groups: Vec<MoveGroup>) -> Vec<Move> {
        let mut moves = Vec::new();
        for group in groups {
            for mv in group {
                match self.piece_at(mv.destination) {
                    None => moves.push(mv),
                    Some(occupant) => {
                        if occupant.color != piece.color {
                            moves.push(mv);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }

    /// Moves of `piece` that pass blocking, without the self-check filter.
    #[must_use]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> Vec<Move> {
        let groups = self.movement_pattern(piece);
        self.resolve_blocking(piece, groups)
    }

    /// Strictly legal moves of `piece`.
    ///
    /// Each candidate is played on a throwaway copy; the ones that leave the
    /// mover's king attacked are dropped. The returned moves reference the
    /// piece on this board. Empty if the piece is not on the board or its
    /// side has no king.
    #[must_use]
    pub fn legal_moves(&self, piece: &Piece) -> Vec<Move> {
        let Some(piece) = self.piece(piece.id) else {
            return Vec::new();
        };
        if self.king(piece.color).is_none() {
            return Vec::new();
        }
        let king_squares: Vec<Square> = Color::BOTH
            .iter()
            .filter_map(|&c| self.king(c).map(|k| k.square))
            .collect();

        self.pseudo_legal_moves(piece)
            .into_iter()
            .filter(|mv| {
                if king_squares.contains(&mv.destination) {
                    trace!("rejecting {mv}: lands on a king");
                    return false;
                }
                let safe = self.leaves_king_safe(piece, mv);
                if !safe {
                    trace!("rejecting {mv}: leaves the {} king attacked", piece.color);
                }
                safe
            })
            .collect()
    }

    /// Legal moves of the piece on `square`, if any.
    #[must_use]
    pub fn legal_moves_at(&self, square: Square) -> Vec<Move> {
        self.piece_at(square)
            .map(|p| self.legal_moves(p))
            .unwrap_or_default()
    }

    /// Legal moves of every piece of `color`.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|p| self.legal_moves(p))
            .collect()
    }

    /// Number of leaf positions `depth` plies ahead, `color` moving first.
    pub fn perft(&mut self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            if self.make_move(mv).is_ok() {
                nodes += self.perft(color.opponent(), depth - 1);
                self.undo_move();
            }
        }
        nodes
    }

    fn leaves_king_safe(&self, piece: &Piece, mv: &Move) -> bool {
        let mut sim = self.copy();
        let Some(clone) = sim.piece_at(mv.origin).map(|p| p.id) else {
            return false;
        };
        if sim.make_move(mv.rebound(clone)).is_err() {
            return false;
        }
        sim.king(piece.color)
            .is_some_and(|king| !sim.is_square_attacked(king.square, piece.color.opponent()))
    }
}
