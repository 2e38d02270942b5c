//! Check, checkmate and stalemate aggregation.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// Check state of one side. Derived on demand, never stored.
///
/// At most one of `is_checkmate` / `is_stalemate` is set, and
/// `is_checkmate` implies `is_check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CheckStatus {
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

/// Status of both sides. A side without a king has no status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BoardStatus {
    pub white: Option<CheckStatus>,
    pub black: Option<CheckStatus>,
}

impl BoardStatus {
    #[must_use]
    pub const fn get(&self, color: Color) -> Option<CheckStatus> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl Board {
    /// Number of legal moves across every piece of `color`.
    #[must_use]
    pub fn legal_move_count(&self, color: Color) -> usize {
        self.pieces_of(color).map(|p| self.legal_moves(p).len()).sum()
    }

    /// Check state of `color`, or `None` if it has no king on the board.
    #[must_use]
    pub fn check_status(&self, color: Color) -> Option<CheckStatus> {
        let Some(king) = self.king(color) else {
            debug!("no {color} king on the board; skipping status");
            return None;
        };

        let is_check = self.is_square_attacked(king.square, color.opponent());
        let no_moves = self.pieces_of(color).all(|p| self.legal_moves(p).is_empty());

        Some(CheckStatus {
            is_check,
            is_checkmate: no_moves && is_check,
            is_stalemate: no_moves && !is_check,
        })
    }

    /// Check state of both sides.
    #[must_use]
    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            white: self.check_status(Color::White),
            black: self.check_status(Color::Black),
        }
    }
}
