//! Turning move text into a validated [`Move`].
//!
//! Accepted forms, tried in this order:
//! 1. castling literals `O-O`, `O-O-O` (also with zeros),
//! 2. coordinate text `e2e4`, optionally with a promotion letter (`e7e8q`),
//! 3. algebraic text such as `Nf3`, `exd5`, `R1e2`, `Qh4xe1+`, `e8=Q`.
//!
//! Algebraic text without a piece letter only ever names a pawn move. When
//! more than one piece fits the text the move is rejected as ambiguous
//! instead of guessing.

use tracing::trace;

use crate::board::Board;
use crate::castling::{self, CastleSide};
use crate::en_passant;
use crate::error::ChessError;
use crate::movegen::{describe_move, pseudo_legal_destinations};
use crate::notation::to_coordinate;
use crate::promotion::{self, parse_promotion_piece};
use crate::types::*;
use crate::validate::is_valid_move;

pub fn resolve(board: &Board, color: Color, text: &str) -> Result<Move, ChessError> {
    let trimmed = text.trim();
    let core = trimmed.trim_end_matches(['+', '#', '!', '?']);
    if core.is_empty() {
        return Err(ChessError::UnparseableMove(text.to_string()));
    }

    if let Some(side) = castle_literal(core) {
        return castling::castle_move(board, color, side)
            .filter(|mv| is_valid_move(board, mv, color))
            .ok_or_else(|| ChessError::IllegalMove(trimmed.to_string()));
    }

    if let Some((from, to, promo)) = coordinate(core)? {
        return resolve_coordinate(board, color, from, to, promo, trimmed);
    }

    resolve_algebraic(board, color, core, trimmed)
}

fn castle_literal(text: &str) -> Option<CastleSide> {
    match text {
        "O-O" | "0-0" | "o-o" => Some(CastleSide::King),
        "O-O-O" | "0-0-0" | "o-o-o" => Some(CastleSide::Queen),
        _ => None,
    }
}

/// `Some` when `text` has the shape of coordinate notation.
fn coordinate(text: &str) -> Result<Option<(Square, Square, Option<PieceKind>)>, ChessError> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Ok(None);
    }
    let (Ok(from), Ok(to)) = (text[0..2].parse::<Square>(), text[2..4].parse::<Square>()) else {
        return Ok(None);
    };
    let promo = match text.get(4..) {
        Some("") | None => None,
        Some(p) => Some(parse_promotion_piece(p)?),
    };
    Ok(Some((from, to, promo)))
}

fn resolve_coordinate(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    promo: Option<PieceKind>,
    text: &str,
) -> Result<Move, ChessError> {
    let pc = board.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
    if pc.color != color {
        return Err(ChessError::NotYourPiece(from));
    }
    let mv = describe_move(board, from, to, promo)?;
    if !is_valid_move(board, &mv, color) {
        return Err(ChessError::IllegalMove(text.to_string()));
    }
    promotion::check_promotion(&mv)?;
    Ok(mv)
}

/// The pieces of algebraic text after decorations are stripped.
#[derive(Debug, Default)]
struct Algebraic {
    kind: Option<PieceKind>,
    file_hint: Option<i8>,
    rank_hint: Option<i8>,
    to: Option<Square>,
    promotion: Option<PieceKind>,
}

fn parse_algebraic(core: &str, original: &str) -> Result<Algebraic, ChessError> {
    let unparseable = || ChessError::UnparseableMove(original.to_string());
    let mut out = Algebraic::default();

    let mut body = core;
    if let Some((head, promo)) = core.split_once('=') {
        out.promotion = Some(parse_promotion_piece(promo)?);
        body = head;
    } else if body.len() > 2
        && let Some(last) = body.chars().last()
        && last.is_ascii_uppercase()
        && body[..body.len() - 1].ends_with(|c: char| c.is_ascii_digit())
    {
        // Promotion without '=', e.g. "e8Q"
        out.promotion = Some(parse_promotion_piece(&last.to_string())?);
        body = &body[..body.len() - 1];
    }

    let mut chars: Vec<char> = body.chars().filter(|&c| c != 'x' && c != ':').collect();
    if let Some(&first) = chars.first()
        && first.is_ascii_uppercase()
    {
        let kind = PieceKind::from_letter(first).ok_or_else(unparseable)?;
        out.kind = Some(kind);
        chars.remove(0);
    }

    if chars.len() < 2 {
        return Err(unparseable());
    }
    let dest: String = chars[chars.len() - 2..].iter().collect();
    out.to = Some(dest.parse().map_err(|_| unparseable())?);

    for &c in &chars[..chars.len() - 2] {
        match c {
            'a'..='h' if out.file_hint.is_none() => out.file_hint = Some(c as i8 - 'a' as i8),
            '1'..='8' if out.rank_hint.is_none() => out.rank_hint = Some(c as i8 - '1' as i8),
            _ => return Err(unparseable()),
        }
    }
    Ok(out)
}

fn resolve_algebraic(
    board: &Board,
    color: Color,
    core: &str,
    original: &str,
) -> Result<Move, ChessError> {
    let parsed = parse_algebraic(core, original)?;
    let to = parsed
        .to
        .ok_or_else(|| ChessError::UnparseableMove(original.to_string()))?;
    let kind = parsed.kind.unwrap_or(PieceKind::Pawn);

    let mut missing_promotion = false;
    let mut candidates: Vec<Move> = Vec::new();
    for (from, pc) in board.pieces_of(color) {
        if pc.kind != kind || !pseudo_legal_destinations(board, from).contains(&to) {
            continue;
        }
        if parsed.file_hint.is_some_and(|f| f != from.file())
            || parsed.rank_hint.is_some_and(|r| r != from.rank())
        {
            continue;
        }
        let mv = describe_move(board, from, to, parsed.promotion)?;
        if mv.flags.promotion && mv.promotion.is_none() {
            let probe = Move {
                promotion: Some(PieceKind::Queen),
                ..mv
            };
            missing_promotion |= is_valid_move(board, &probe, color);
            continue;
        }
        if is_valid_move(board, &mv, color) {
            candidates.push(mv);
        }
    }

    if candidates.is_empty() && kind == PieceKind::Pawn {
        candidates = en_passant_candidates(board, color, to, parsed.file_hint);
    }

    match candidates.len() {
        0 if missing_promotion => Err(ChessError::PromotionRequired(original.to_string())),
        0 => Err(ChessError::IllegalMove(original.to_string())),
        1 => {
            let mv = candidates.remove(0);
            trace!(text = original, mv = %to_coordinate(&mv), "resolved");
            Ok(mv)
        }
        _ => Err(ChessError::AmbiguousMove {
            text: original.to_string(),
            candidates: candidates.iter().map(to_coordinate).collect(),
        }),
    }
}

/// En passant never shows up among pseudo-legal destinations, so a pawn
/// capture onto the en passant square is looked up directly.
fn en_passant_candidates(board: &Board, color: Color, to: Square, file_hint: Option<i8>) -> Vec<Move> {
    let origins = match file_hint {
        Some(f) => vec![f - to.file()],
        None => vec![-1, 1],
    };
    origins
        .into_iter()
        .filter_map(|df| to.offset(df, -color.pawn_dir()))
        .filter_map(|from| en_passant::en_passant_move(board, from, color))
        .filter(|mv| mv.to == to && is_valid_move(board, mv, color))
        .collect()
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
