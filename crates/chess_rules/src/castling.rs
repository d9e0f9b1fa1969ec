//! Castling preconditions and the paired king/rook relocation.
//!
//! Eligibility is decided by the `has_moved` flags: a king or rook that has
//! left its square at any point can no longer castle, even after returning.
//! Besides the flags, the king must stand on the centre file of its back
//! rank, the rook on the matching corner, every square between them must be
//! empty, and the king's square, the square it crosses and its landing
//! square must all be free of enemy attack.

use crate::attacks::{is_square_attacked, path_clear};
use crate::board::Board;
use crate::error::ChessError;
use crate::notation::to_coordinate;
use crate::types::*;

const KING_FILE: i8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub fn rook_file(self) -> i8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }
    pub fn king_target_file(self) -> i8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }
    pub fn notation(self) -> &'static str {
        match self {
            CastleSide::King => "O-O",
            CastleSide::Queen => "O-O-O",
        }
    }
    /// Side a castling move goes to, judged by the king's direction.
    pub fn of(mv: &Move) -> CastleSide {
        if mv.to.file() > mv.from.file() {
            CastleSide::King
        } else {
            CastleSide::Queen
        }
    }
    fn step(self) -> i8 {
        (self.rook_file() - KING_FILE).signum()
    }
}

pub fn king_home(color: Color) -> Option<Square> {
    Square::new(KING_FILE, color.home_rank())
}

fn rook_home(color: Color, side: CastleSide) -> Option<Square> {
    Square::new(side.rook_file(), color.home_rank())
}

pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    let (Some(king_sq), Some(rook_sq)) = (king_home(color), rook_home(color, side)) else {
        return false;
    };
    let unmoved = |sq: Square, kind: PieceKind| {
        board
            .piece_at(sq)
            .is_some_and(|pc| pc.kind == kind && pc.color == color && !pc.has_moved)
    };
    if !unmoved(king_sq, PieceKind::King) || !unmoved(rook_sq, PieceKind::Rook) {
        return false;
    }
    if !path_clear(board, king_sq, rook_sq) {
        return false;
    }

    let enemy = color.other();
    (0..=2).all(|i| {
        king_sq
            .offset(i * side.step(), 0)
            .is_some_and(|sq| !is_square_attacked(board, sq, enemy))
    })
}

/// The castling move for `color`, if it is currently allowed.
pub fn castle_move(board: &Board, color: Color, side: CastleSide) -> Option<Move> {
    if !can_castle(board, color, side) {
        return None;
    }
    let from = king_home(color)?;
    let to = Square::new(side.king_target_file(), color.home_rank())?;
    let mut mv = Move::new(from, to, PieceKind::King, color);
    mv.flags.castling = true;
    Some(mv)
}

/// Moves the king two squares toward the rook and puts the rook on the
/// square next to the king's new position, on the side it came from.
pub fn apply_castle(board: &mut Board, mv: &Move) -> Result<(), ChessError> {
    let side = CastleSide::of(mv);
    let rook_from = rook_home(mv.color, side);
    let rook_to = mv.to.offset(-side.step(), 0);
    let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) else {
        return Err(ChessError::IllegalMove(to_coordinate(mv)));
    };
    board.move_piece(mv.from, mv.to)?;
    board.move_piece(rook_from, rook_to)?;
    Ok(())
}

#[cfg(test)]
#[path = "castling_tests.rs"]
mod castling_tests;
