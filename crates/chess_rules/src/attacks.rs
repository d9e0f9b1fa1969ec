//! Attack oracle: does a color geometrically threaten a square?
//!
//! Works from the target outwards with one pattern per piece kind, so it
//! never touches the move generators (and therefore never reaches the
//! king's castling logic). It has no notion of turn order or legality.

use crate::board::Board;
use crate::types::*;

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |sq: Option<Square>, kinds: &[PieceKind]| {
        sq.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A pawn of `by` attacks diagonally forward, so look one rank behind the target
    let back = -by.pawn_dir();
    if holds(target.offset(-1, back), &[PieceKind::Pawn])
        || holds(target.offset(1, back), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::King]))
    {
        return true;
    }

    let rays = DIAGONALS
        .iter()
        .map(|d| (d, [PieceKind::Bishop, PieceKind::Queen]))
        .chain(
            ORTHOGONALS
                .iter()
                .map(|d| (d, [PieceKind::Rook, PieceKind::Queen])),
        );
    for (&(df, dr), sliders) in rays {
        if let Some(pc) = first_piece_on_ray(board, target, df, dr)
            && pc.color == by
            && sliders.contains(&pc.kind)
        {
            return true;
        }
    }

    false
}

fn first_piece_on_ray(board: &Board, from: Square, df: i8, dr: i8) -> Option<Piece> {
    let mut cur = from.offset(df, dr);
    while let Some(sq) = cur {
        if let Some(pc) = board.piece_at(sq) {
            return Some(pc);
        }
        cur = sq.offset(df, dr);
    }
    None
}

/// True when every square strictly between `from` and `to` is empty.
/// Squares that do not share a rank, file or diagonal have no path.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let df = to.file() - from.file();
    let dr = to.rank() - from.rank();
    if (df == 0 && dr == 0) || (df != 0 && dr != 0 && df.abs() != dr.abs()) {
        return false;
    }
    let (sf, sr) = (df.signum(), dr.signum());
    let mut cur = from.offset(sf, sr);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        cur = sq.offset(sf, sr);
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
