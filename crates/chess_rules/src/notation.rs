//! Writing moves as text: coordinate form (`e2e4`, `e7e8q`) and SAN.

use crate::apply::apply_move;
use crate::board::Board;
use crate::castling::CastleSide;
use crate::check::{has_any_legal_move, is_king_in_check};
use crate::movegen::{describe_move, pseudo_legal_destinations};
use crate::types::*;
use crate::validate::is_valid_move;

pub fn to_coordinate(mv: &Move) -> String {
    let mut s = format!("{}{}", mv.from, mv.to);
    if let Some(p) = mv.promotion {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// SAN for `mv`, which must be legal on `board` (the position before the move).
pub fn to_san(board: &Board, mv: &Move) -> String {
    let mut san = if mv.flags.castling {
        CastleSide::of(mv).notation().to_string()
    } else if mv.piece == PieceKind::Pawn {
        let mut s = String::new();
        if mv.flags.capture {
            s.push(file_char(mv.from));
            s.push('x');
        }
        s.push_str(&mv.to.to_string());
        if let Some(p) = mv.promotion {
            s.push('=');
            s.push(p.letter());
        }
        s
    } else {
        let mut s = String::new();
        s.push(mv.piece.letter());
        s.push_str(&disambiguation(board, mv));
        if mv.flags.capture {
            s.push('x');
        }
        s.push_str(&mv.to.to_string());
        s
    };

    let mut after = board.clone();
    if apply_move(&mut after, mv).is_ok() {
        let them = mv.color.other();
        if is_king_in_check(&after, them) {
            san.push(if has_any_legal_move(&after, them) { '+' } else { '#' });
        }
    }
    san
}

/// Shortest origin hint that tells `mv` apart from moves of identical
/// pieces to the same square: file, then rank, then both.
fn disambiguation(board: &Board, mv: &Move) -> String {
    let rivals: Vec<Square> = board
        .pieces_of(mv.color)
        .filter(|&(sq, pc)| sq != mv.from && pc.kind == mv.piece)
        .filter(|&(sq, _)| pseudo_legal_destinations(board, sq).contains(&mv.to))
        .filter(|&(sq, _)| {
            describe_move(board, sq, mv.to, None).is_ok_and(|m| is_valid_move(board, &m, mv.color))
        })
        .map(|(sq, _)| sq)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|sq| sq.file() != mv.from.file()) {
        file_char(mv.from).to_string()
    } else if rivals.iter().all(|sq| sq.rank() != mv.from.rank()) {
        rank_char(mv.from).to_string()
    } else {
        mv.from.to_string()
    }
}

fn file_char(sq: Square) -> char {
    (b'a' + sq.file() as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + sq.rank() as u8) as char
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
