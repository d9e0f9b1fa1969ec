use crate::board::Board;
use crate::castling;
use crate::en_passant;
use crate::error::ChessError;
use crate::notation::to_coordinate;
use crate::promotion;
use crate::types::*;

/// Mutates `board` by `mv` without any legality checks and returns the
/// captured piece. Shared by legality simulation and live play. Afterwards
/// the board's en passant square reflects `mv`.
///
/// On error the board may be partially updated; callers work on a copy or
/// restore a snapshot.
pub fn apply_move(board: &mut Board, mv: &Move) -> Result<Option<Piece>, ChessError> {
    let captured = if mv.flags.castling {
        castling::apply_castle(board, mv)?;
        None
    } else if mv.flags.en_passant {
        en_passant::apply_en_passant(board, mv)?
    } else {
        board.move_piece(mv.from, mv.to)?
    };

    if mv.flags.promotion {
        let target = mv
            .promotion
            .ok_or_else(|| ChessError::PromotionRequired(to_coordinate(mv)))?;
        promotion::promote(board, mv.to, target)?;
    }

    board.set_en_passant(en_passant::target_after(mv));
    Ok(captured)
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
