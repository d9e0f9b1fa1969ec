//! Forsyth-Edwards Notation for setting up positions and for handing the
//! current position to a move-suggestion engine.
//!
//! Castling availability has no field of its own on [`Board`]; it is carried
//! by the `has_moved` flags of kings and rooks. Half-move and full-move
//! counters are accepted on input and otherwise ignored.

use crate::board::Board;
use crate::castling::{self, CastleSide};
use crate::error::ChessError;
use crate::types::*;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A parsed position: the board and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setup {
    pub board: Board,
    pub side_to_move: Color,
}

pub fn parse(fen: &str) -> Result<Setup, ChessError> {
    let bad = |what: &str| ChessError::InvalidFen(format!("{what} in '{fen}'"));

    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(bad("expected at least board and side to move"));
    }

    let mut board = Board::empty();
    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(bad("board section needs 8 ranks"));
    }
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let kind = PieceKind::from_letter(ch).ok_or_else(|| bad("unknown piece letter"))?;
                let color = if ch.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(file, rank).ok_or_else(|| bad("too many files in a rank"))?;
                let mut piece = Piece::new(kind, color);
                // Kings and rooks get their flags from the castling field below
                piece.has_moved = match kind {
                    PieceKind::Pawn => rank != color.pawn_start_rank(),
                    PieceKind::King | PieceKind::Rook => true,
                    _ => false,
                };
                board.place(sq, piece);
                file += 1;
            }
            if file > 8 {
                return Err(bad("too many files in a rank"));
            }
        }
        if file != 8 {
            return Err(bad("not enough files in a rank"));
        }
    }

    let side_to_move = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(bad("side to move must be 'w' or 'b'")),
    };

    let castle_part = parts.get(2).copied().unwrap_or("-");
    if castle_part != "-" {
        for c in castle_part.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::King),
                'Q' => (Color::White, CastleSide::Queen),
                'k' => (Color::Black, CastleSide::King),
                'q' => (Color::Black, CastleSide::Queen),
                _ => return Err(bad("unknown castling letter")),
            };
            mark_unmoved(&mut board, castling::king_home(color), PieceKind::King, color);
            mark_unmoved(
                &mut board,
                Square::new(side.rook_file(), color.home_rank()),
                PieceKind::Rook,
                color,
            );
        }
    }

    match parts.get(3).copied().unwrap_or("-") {
        "-" => {}
        ep => board.set_en_passant(Some(ep.parse().map_err(|_| bad("bad en passant square"))?)),
    }

    for color in [Color::White, Color::Black] {
        if board.king_square(color).is_none() {
            return Err(ChessError::MissingKing(color));
        }
    }

    Ok(Setup {
        board,
        side_to_move,
    })
}

fn mark_unmoved(board: &mut Board, sq: Option<Square>, kind: PieceKind, color: Color) {
    if let Some(sq) = sq
        && let Some(mut pc) = board.piece_at(sq)
        && pc.kind == kind
        && pc.color == color
    {
        pc.has_moved = false;
        board.place(sq, pc);
    }
}

/// Full six-field FEN for `board` with `side_to_move` to play.
pub fn to_fen(board: &Board, side_to_move: Color, halfmove: u32, fullmove: u32) -> String {
    let mut placement = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match Square::new(file, rank).and_then(|sq| board.piece_at(sq)) {
                Some(pc) => {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(pc.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            placement.push_str(&empty.to_string());
        }
        if rank > 0 {
            placement.push('/');
        }
    }

    let stm = match side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    };

    let mut rights = String::new();
    for (color, side, letter) in [
        (Color::White, CastleSide::King, 'K'),
        (Color::White, CastleSide::Queen, 'Q'),
        (Color::Black, CastleSide::King, 'k'),
        (Color::Black, CastleSide::Queen, 'q'),
    ] {
        if castling_right(board, color, side) {
            rights.push(letter);
        }
    }
    if rights.is_empty() {
        rights.push('-');
    }

    let ep = board
        .en_passant()
        .map_or_else(|| "-".to_string(), |sq| sq.to_string());

    format!("{placement} {stm} {rights} {ep} {halfmove} {fullmove}")
}

fn castling_right(board: &Board, color: Color, side: CastleSide) -> bool {
    let unmoved = |sq: Option<Square>, kind: PieceKind| {
        sq.and_then(|s| board.piece_at(s))
            .is_some_and(|pc| pc.kind == kind && pc.color == color && !pc.has_moved)
    };
    unmoved(castling::king_home(color), PieceKind::King)
        && unmoved(Square::new(side.rook_file(), color.home_rank()), PieceKind::Rook)
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
