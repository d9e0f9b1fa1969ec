//! En passant: the transient target square and the capture itself.
//!
//! The target lives on the [`Board`] and is recomputed by every applied move,
//! so it is copied with the board and restored by undo.

use crate::board::Board;
use crate::error::ChessError;
use crate::types::*;

/// Square passed over by a two-square pawn advance, or `None` for any other move.
pub fn target_after(mv: &Move) -> Option<Square> {
    if mv.piece != PieceKind::Pawn || (mv.to.rank() - mv.from.rank()).abs() != 2 {
        return None;
    }
    Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2)
}

/// Where the captured pawn actually stands: destination file, origin rank.
pub fn captured_square(mv: &Move) -> Option<Square> {
    Square::new(mv.to.file(), mv.from.rank())
}

/// True when `mv` is a pawn capturing en passant onto the board's current
/// en passant square.
pub fn is_en_passant_capture(board: &Board, mv: &Move) -> bool {
    if mv.piece != PieceKind::Pawn || board.en_passant() != Some(mv.to) {
        return false;
    }
    let df = mv.to.file() - mv.from.file();
    let dr = mv.to.rank() - mv.from.rank();
    if df.abs() != 1 || dr != mv.color.pawn_dir() || !board.is_empty(mv.to) {
        return false;
    }
    captured_square(mv)
        .and_then(|sq| board.piece_at(sq))
        .is_some_and(|pc| pc.kind == PieceKind::Pawn && pc.color != mv.color)
}

/// The en passant capture available to the pawn on `from`, if any.
pub fn en_passant_move(board: &Board, from: Square, color: Color) -> Option<Move> {
    let to = board.en_passant()?;
    let pc = board.piece_at(from)?;
    if pc.kind != PieceKind::Pawn || pc.color != color {
        return None;
    }
    let mut mv = Move::new(from, to, PieceKind::Pawn, color);
    mv.captured = Some(PieceKind::Pawn);
    mv.flags.capture = true;
    mv.flags.en_passant = true;
    is_en_passant_capture(board, &mv).then_some(mv)
}

/// Moves the capturing pawn and removes the captured one from beside it.
pub fn apply_en_passant(board: &mut Board, mv: &Move) -> Result<Option<Piece>, ChessError> {
    let cap = captured_square(mv).ok_or_else(|| ChessError::IllegalMove(mv.to_string()))?;
    board.move_piece(mv.from, mv.to)?;
    Ok(board.remove(cap))
}

#[cfg(test)]
#[path = "en_passant_tests.rs"]
mod en_passant_tests;
