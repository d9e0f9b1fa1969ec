//! Pseudo-legal move generation: geometry and blocking, no king safety.

use crate::attacks::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::board::Board;
use crate::castling::{self, CastleSide};
use crate::en_passant;
use crate::error::ChessError;
use crate::promotion;
use crate::types::*;

/// Destinations the piece on `from` can reach by its movement rules alone.
/// Empty if `from` is empty. En passant is never produced here.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    let Some(pc) = board.piece_at(from) else {
        return out;
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.color, &mut out),
        PieceKind::Knight => gen_leaper(board, from, pc.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.color, &DIAGONALS, &mut out),
        PieceKind::Rook => gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.color, &DIAGONALS, &mut out);
            gen_slider(board, from, pc.color, &ORTHOGONALS, &mut out);
        }
        PieceKind::King => {
            gen_leaper(board, from, pc.color, &KING_DELTAS, &mut out);
            if !pc.has_moved {
                gen_castle(board, from, pc.color, &mut out);
            }
        }
    }
    out
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    let dir = c.pawn_dir();

    // forward 1, then forward 2 from the start rank
    if let Some(one) = from.offset(0, dir)
        && board.is_empty(one)
    {
        out.push(one);
        if from.rank() == c.pawn_start_rank()
            && let Some(two) = from.offset(0, 2 * dir)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && board.is_enemy(to, c)
        {
            out.push(to);
        }
    }
}

fn gen_leaper(board: &Board, from: Square, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr)
            && !board.is_friendly(to, c)
        {
            out.push(to);
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(to),
                Some(pc) => {
                    if pc.color != c {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to.offset(df, dr);
        }
    }
}

fn gen_castle(board: &Board, from: Square, c: Color, out: &mut Vec<Square>) {
    if Some(from) != castling::king_home(c) {
        return;
    }
    for side in [CastleSide::King, CastleSide::Queen] {
        if castling::can_castle(board, c, side)
            && let Some(to) = Square::new(side.king_target_file(), c.home_rank())
        {
            out.push(to);
        }
    }
}

/// Builds the `Move` value for moving the piece on `from` to `to`, filling in
/// captured piece and flags from the board. Does not check legality.
pub fn describe_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, ChessError> {
    let pc = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    let mut mv = Move::new(from, to, pc.kind, pc.color);
    mv.promotion = promotion;

    if let Some(target) = board.piece_at(to)
        && target.color != pc.color
    {
        mv.captured = Some(target.kind);
        mv.flags.capture = true;
    }

    let df = to.file() - from.file();
    match pc.kind {
        PieceKind::King if df.abs() == 2 && to.rank() == from.rank() => {
            mv.flags.castling = true;
        }
        PieceKind::Pawn => {
            if df != 0 && board.is_empty(to) {
                mv.flags.en_passant = true;
                if let Some(cap) = en_passant::captured_square(&mv)
                    && let Some(victim) = board.piece_at(cap)
                    && victim.color != pc.color
                {
                    mv.captured = Some(victim.kind);
                    mv.flags.capture = true;
                }
            }
            mv.flags.promotion = promotion::requires_promotion(&mv);
        }
        _ => {}
    }
    Ok(mv)
}

/// Every pseudo-legal move of the piece on `from`, with promotions expanded
/// to all four targets and the en passant capture added when the board's
/// en passant square allows one.
pub fn candidate_moves(board: &Board, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    for to in pseudo_legal_destinations(board, from) {
        let Ok(mv) = describe_move(board, from, to, None) else {
            continue;
        };
        if mv.flags.promotion {
            out.extend(PieceKind::PROMOTION_TARGETS.iter().map(|&kind| Move {
                promotion: Some(kind),
                ..mv
            }));
        } else {
            out.push(mv);
        }
    }
    if let Some(pc) = board.piece_at(from)
        && let Some(mv) = en_passant::en_passant_move(board, from, pc.color)
    {
        out.push(mv);
    }
    out
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
