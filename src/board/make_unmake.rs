use log::debug;

use super::{Board, Capture, Move, MoveError, PieceKind, Square};

impl Board {
    /// Apply `mv` and append it to the history.
    ///
    /// Captures move the taken piece onto the capture pile. The first move
    /// of a piece sets its `has_moved` flag and the move remembers that it
    /// did, so [`Board::undo_move`] only clears flags it set. The board is
    /// unchanged when an error is returned.
    pub fn make_move(&mut self, mut mv: Move) -> Result<(), MoveError> {
        let idx = self
            .index_of(mv.piece)
            .ok_or(MoveError::UnknownPiece { id: mv.piece })?;
        let mover = self.pieces[idx];
        if mover.square != mv.origin {
            return Err(MoveError::StaleOrigin {
                expected: mv.origin,
                found: mover.square,
            });
        }

        if let Some(side) = mv.castling {
            let rook_idx = self
                .castling_rook(&mover, side)
                .and_then(|rook| self.index_of(rook.id))
                .ok_or(MoveError::MissingCastlingRook {
                    square: Square(side.rook_file(), mover.square.rank()),
                })?;
            let rook_target = rook_target(mv.destination, side.direction());
            for square in [mv.destination, rook_target] {
                if self.index_at(square).is_some_and(|i| i != rook_idx) {
                    return Err(MoveError::OwnPieceOnDestination { square });
                }
            }

            let king = &mut self.pieces[idx];
            king.square = mv.destination;
            mv.set_has_moved = !king.has_moved;
            king.has_moved = true;

            let rook = &mut self.pieces[rook_idx];
            rook.square = rook_target;
            mv.rook_set_has_moved = !rook.has_moved;
            rook.has_moved = true;
        } else {
            if let Some(victim_idx) = self.index_at(mv.destination) {
                if self.pieces[victim_idx].color == mover.color {
                    return Err(MoveError::OwnPieceOnDestination {
                        square: mv.destination,
                    });
                }
                let victim = self.pieces.remove(victim_idx);
                self.captured.push(victim);
                mv.captured = Some(Capture {
                    piece: victim,
                    slot: victim_idx,
                });
            }

            // The capture may have shifted the mover down one slot.
            let idx = self.index_of(mv.piece).unwrap_or(idx);
            let piece = &mut self.pieces[idx];
            piece.square = mv.destination;
            mv.set_has_moved = !piece.has_moved;
            piece.has_moved = true;
            if let Some(kind) = mv.promotion {
                piece.kind = kind;
            }
        }

        debug!("made {mv} ({} in history)", self.history.len() + 1);
        self.history.push(mv);
        Ok(())
    }

    /// Reverse the most recent move and return it, or `None` if the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;

        if let Some(side) = mv.castling {
            let rook_target = rook_target(mv.destination, side.direction());
            if let Some(rook_idx) = self.index_at(rook_target) {
                let rook = &mut self.pieces[rook_idx];
                rook.square = Square(side.rook_file(), rook_target.rank());
                if mv.rook_set_has_moved {
                    rook.has_moved = false;
                }
            }
        }

        if let Some(idx) = self.index_of(mv.piece) {
            let piece = &mut self.pieces[idx];
            piece.square = mv.origin;
            if mv.set_has_moved {
                piece.has_moved = false;
            }
            if mv.promotion.is_some() {
                piece.kind = PieceKind::Pawn;
            }
        }

        if let Some(capture) = mv.captured {
            if let Some(pos) = self.captured.iter().rposition(|p| p.id == capture.piece.id) {
                self.captured.remove(pos);
            }
            let slot = capture.slot.min(self.pieces.len());
            self.pieces.insert(slot, capture.piece);
        }

        debug!("undid {mv} ({} in history)", self.history.len());
        Some(mv)
    }
}

/// Square the rook lands on: next to the king, on the side it came from.
fn rook_target(king_destination: Square, direction: i8) -> Square {
    king_destination
        .offset(-direction, 0)
        .unwrap_or(king_destination)
}
