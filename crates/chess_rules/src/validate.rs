use crate::apply::apply_move;
use crate::check::is_king_in_check;
use crate::board::Board;
use crate::en_passant;
use crate::movegen::pseudo_legal_destinations;
use crate::promotion;
use crate::types::*;

/// Full legality of `mv` for `mover`:
/// the mover owns the piece on `from`, `to` is a pseudo-legal destination of
/// that piece (or the move is an en passant capture the board allows), and
/// playing it on a copy of the board leaves the mover's king unattacked.
/// The live board is never touched.
pub fn is_valid_move(board: &Board, mv: &Move, mover: Color) -> bool {
    let Some(pc) = board.piece_at(mv.from) else {
        return false;
    };
    if pc.color != mover || mv.color != mover || pc.kind != mv.piece {
        return false;
    }

    let reachable = if mv.flags.en_passant {
        mv.captured == Some(PieceKind::Pawn) && en_passant::is_en_passant_capture(board, mv)
    } else {
        pseudo_legal_destinations(board, mv.from).contains(&mv.to)
    };
    if !reachable {
        return false;
    }

    // Capture data has to describe what actually stands on the board
    let victim_square = if mv.flags.en_passant {
        en_passant::captured_square(mv)
    } else {
        Some(mv.to)
    };
    let victim = victim_square
        .and_then(|sq| board.piece_at(sq))
        .filter(|p| p.color != mover)
        .map(|p| p.kind);
    if mv.captured != victim || mv.flags.capture != victim.is_some() {
        return false;
    }

    let castling_shape =
        mv.piece == PieceKind::King && (mv.to.file() - mv.from.file()).abs() == 2;
    if mv.flags.castling != castling_shape {
        return false;
    }
    if mv.flags.promotion != promotion::requires_promotion(mv) {
        return false;
    }
    if let Some(kind) = mv.promotion
        && (!mv.flags.promotion || !kind.is_promotion_target())
    {
        return false;
    }

    // Which piece a pawn becomes cannot change whether its own king is attacked
    let probe = if mv.flags.promotion && mv.promotion.is_none() {
        Move {
            promotion: Some(PieceKind::Queen),
            ..*mv
        }
    } else {
        *mv
    };
    let mut sim = board.clone();
    apply_move(&mut sim, &probe).is_ok() && !is_king_in_check(&sim, mover)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
