//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceId, PieceKind};
use super::square::Square;

/// Side of the board a castling move goes to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const BOTH: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

    /// File the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File step the king takes towards the rook
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i8 {
        match self {
            CastlingSide::Kingside => 1,
            CastlingSide::Queenside => -1,
        }
    }
}

/// A piece taken by a move, with the slot it occupied in the active list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capture {
    pub(crate) piece: Piece,
    pub(crate) slot: usize,
}

impl Capture {
    #[must_use]
    pub const fn piece(&self) -> &Piece {
        &self.piece
    }
}

/// A proposed or executed move.
///
/// Built by move generation or by any caller via [`Move::new`]. The origin
/// is taken from the piece when the move is built. `make_move` fills in the
/// capture record and the `has_moved` bookkeeping that `undo_move` reads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) piece: PieceId,
    pub(crate) origin: Square,
    pub(crate) destination: Square,
    pub(crate) promotion: Option<PieceKind>,
    pub(crate) castling: Option<CastlingSide>,
    pub(crate) captured: Option<Capture>,
    pub(crate) set_has_moved: bool,
    pub(crate) rook_set_has_moved: bool,
}

impl Move {
    /// A plain move of `piece` to `destination`.
    #[must_use]
    pub fn new(piece: &Piece, destination: Square) -> Self {
        Move {
            piece: piece.id,
            origin: piece.square,
            destination,
            promotion: None,
            castling: None,
            captured: None,
            set_has_moved: false,
            rook_set_has_moved: false,
        }
    }

    /// A pawn move to the last rank that turns into `kind`.
    #[must_use]
    pub fn with_promotion(piece: &Piece, destination: Square, kind: PieceKind) -> Self {
        Move {
            promotion: Some(kind),
            ..Move::new(piece, destination)
        }
    }

    /// A two-square king move that also relocates the rook on `side`.
    #[must_use]
    pub fn castle(king: &Piece, side: CastlingSide) -> Option<Self> {
        let destination = king.square.offset(2 * side.direction(), 0)?;
        Some(Move {
            castling: Some(side),
            ..Move::new(king, destination)
        })
    }

    /// The same move applied to another piece standing on the same origin.
    #[must_use]
    pub(crate) fn rebound(&self, piece: PieceId) -> Self {
        Move {
            piece,
            captured: None,
            set_has_moved: false,
            rook_set_has_moved: false,
            ..*self
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> PieceId {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn origin(&self) -> Square {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Square {
        self.destination
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn castling(&self) -> Option<CastlingSide> {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        self.castling.is_some()
    }

    /// The piece this move took, once it has been made.
    #[inline]
    #[must_use]
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref().map(Capture::piece)
    }

    /// Whether making this move is what first set the mover's `has_moved`.
    #[inline]
    #[must_use]
    pub const fn set_has_moved(&self) -> bool {
        self.set_has_moved
    }

    /// True if both moves describe the same transition, ignoring the
    /// bookkeeping filled in by `make_move`.
    #[must_use]
    pub fn same_transition(&self, other: &Move) -> bool {
        self.piece == other.piece
            && self.origin == other.origin
            && self.destination == other.destination
            && self.promotion == other.promotion
            && self.castling == other.castling
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
