//! FEN piece-placement import and export.
//!
//! Only the placement field is read; side to move, castling rights and the
//! rest of a full FEN record have no counterpart on this board. The first
//! placement row is rank 0 (Black's home rank).

use super::{Board, BoardBuilder, Color, PieceKind, PlacementError, Square};

impl Board {
    /// Build a board from a FEN placement field such as
    /// `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
    ///
    /// Anything after the first space is ignored. Pawns, kings and rooks off
    /// their starting squares are marked as moved, so a king and rook still
    /// at home keep their castling eligibility.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRankCount { found: rows.len() });
        }

        let mut builder = BoardBuilder::new();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(PlacementError::WrongFileCount {
                        rank,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square(file as u8, rank as u8);
                builder = if on_starting_square(kind, color, square) {
                    builder.piece(square, color, kind)
                } else {
                    builder.moved_piece(square, color, kind)
                };
                file += 1;
            }
            if file != 8 {
                return Err(PlacementError::WrongFileCount { rank, files: file });
            }
        }

        Ok(builder.build())
    }

    /// The FEN placement field for the active pieces.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8u8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square(file, rank)) {
                    Some(p) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(p.kind.to_fen_char(p.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

fn on_starting_square(kind: PieceKind, color: Color, square: Square) -> bool {
    let home = color.home_rank();
    match kind {
        PieceKind::Pawn => square.rank() == color.pawn_start_rank(),
        PieceKind::King => square == Square(4, home),
        PieceKind::Rook => square == Square(0, home) || square == Square(7, home),
        _ => true,
    }
}
