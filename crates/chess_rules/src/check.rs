//! Check, checkmate and stalemate detection.

use crate::attacks::is_square_attacked;
use crate::board::Board;
use crate::movegen::candidate_moves;
use crate::types::*;
use crate::validate::is_valid_move;

/// A side with no king on the board is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, king, color.other()))
}

/// Stops at the first legal move found while scanning the board.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        candidate_moves(board, from)
            .iter()
            .any(|mv| is_valid_move(board, mv, color))
    })
}

pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Every legal move for `color` in board-scan order, with each promotion
/// listed once per target piece.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        out.extend(
            candidate_moves(board, from)
                .into_iter()
                .filter(|mv| is_valid_move(board, mv, color)),
        );
    }
    out
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
