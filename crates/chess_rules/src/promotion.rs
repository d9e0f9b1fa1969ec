use crate::board::Board;
use crate::error::ChessError;
use crate::notation::to_coordinate;
use crate::types::*;

/// A pawn landing on the far rank must promote.
pub fn requires_promotion(mv: &Move) -> bool {
    mv.piece == PieceKind::Pawn && mv.to.rank() == mv.color.promotion_rank()
}

/// Reads a promotion choice: one of Q, R, B, N in either case.
pub fn parse_promotion_piece(text: &str) -> Result<PieceKind, ChessError> {
    let mut chars = text.trim().chars();
    match (chars.next().and_then(PieceKind::from_letter), chars.next()) {
        (Some(kind), None) if kind.is_promotion_target() => Ok(kind),
        _ => Err(ChessError::InvalidPromotionPiece(text.to_string())),
    }
}

/// Checks that `mv` carries a promotion target exactly when it needs one.
pub fn check_promotion(mv: &Move) -> Result<(), ChessError> {
    match (requires_promotion(mv), mv.promotion) {
        (true, None) => Err(ChessError::PromotionRequired(to_coordinate(mv))),
        (true, Some(kind)) if !kind.is_promotion_target() => {
            Err(ChessError::InvalidPromotionPiece(kind.to_string()))
        }
        (false, Some(_)) => Err(ChessError::IllegalMove(to_coordinate(mv))),
        _ => Ok(()),
    }
}

/// Replaces the pawn on `sq` with a `target` of the same color.
pub fn promote(board: &mut Board, sq: Square, target: PieceKind) -> Result<(), ChessError> {
    if !target.is_promotion_target() {
        return Err(ChessError::InvalidPromotionPiece(target.to_string()));
    }
    let pawn = board
        .piece_at(sq)
        .filter(|pc| pc.kind == PieceKind::Pawn)
        .ok_or(ChessError::EmptySquare(sq))?;
    board.place(
        sq,
        Piece {
            kind: target,
            color: pawn.color,
            has_moved: true,
        },
    );
    Ok(())
}

#[cfg(test)]
#[path = "promotion_tests.rs"]
mod promotion_tests;
