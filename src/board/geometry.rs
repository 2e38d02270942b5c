//! Position-query helpers: ray casting, knight and king step tables.
//!
//! Everything here is pure and only depends on board geometry, never on
//! which pieces are where.

use once_cell::sync::Lazy;

use super::Square;

/// File/rank steps along ranks and files.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// File/rank steps along diagonals.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight king steps.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

static KNIGHT_HOPS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    Square::all()
        .map(|from| {
            KNIGHT_OFFSETS
                .iter()
                .filter_map(|&(df, dr)| from.offset(df, dr))
                .collect()
        })
        .collect()
});

static KING_NEIGHBOURS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| {
    Square::all()
        .map(|from| {
            KING_STEPS
                .iter()
                .filter_map(|&(df, dr)| from.offset(df, dr))
                .collect()
        })
        .collect()
});

/// On-board knight destinations from `from`.
#[inline]
pub(crate) fn knight_hops(from: Square) -> &'static [Square] {
    &KNIGHT_HOPS[from.as_index()]
}

/// On-board squares one king step from `from`.
#[inline]
pub(crate) fn king_neighbours(from: Square) -> &'static [Square] {
    &KING_NEIGHBOURS[from.as_index()]
}

/// Squares from `from` (exclusive) to the board edge along `step`, nearest first.
pub(crate) fn ray(from: Square, (df, dr): (i8, i8)) -> Vec<Square> {
    let mut squares = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = current.offset(df, dr) {
        squares.push(next);
        current = next;
    }
    squares
}
