use tracing::trace;

use crate::error::ChessError;
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square to piece mapping plus the per-color king cache and the en passant
/// target left by the last move. `Clone` is the deep copy used for legality
/// simulation and undo snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    kings: [Option<Square>; 2],
    en_passant: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            kings: [None; 2],
            en_passant: None,
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        b.reset();
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Puts `piece` on `sq`, replacing whatever was there. Placing a king
    /// always moves that color's cached king square, even if another king
    /// of the same color is already on the board.
    pub fn place(&mut self, sq: Square, piece: Piece) {
        if let Some(old) = self.squares[sq.index()]
            && old.kind == PieceKind::King
            && self.kings[old.color.idx()] == Some(sq)
        {
            self.kings[old.color.idx()] = None;
        }
        if piece.kind == PieceKind::King {
            self.kings[piece.color.idx()] = Some(sq);
        }
        self.squares[sq.index()] = Some(piece);
    }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let removed = self.squares[sq.index()].take();
        if let Some(pc) = removed
            && pc.kind == PieceKind::King
            && self.kings[pc.color.idx()] == Some(sq)
        {
            self.kings[pc.color.idx()] = None;
        }
        removed
    }

    /// Moves the piece on `from` to `to`, marking it as moved, and returns
    /// whatever stood on `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
        let mut piece = self.remove(from).ok_or(ChessError::EmptySquare(from))?;
        piece.has_moved = true;
        let captured = self.remove(to);
        self.place(to, piece);
        trace!(%from, %to, ?captured, "piece moved");
        Ok(captured)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.idx()]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|pc| pc.color != color)
    }
    pub fn is_friendly(&self, sq: Square, color: Color) -> bool {
        self.piece_at(sq).is_some_and(|pc| pc.color == color)
    }

    /// Square a pawn may capture onto en passant, if the last move allows it.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Occupied squares in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, pc)| pc.color == color)
    }

    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    pub fn reset(&mut self) {
        self.clear();
        for file in 0..8i8 {
            for color in [Color::White, Color::Black] {
                if let Some(sq) = Square::new(file, color.pawn_start_rank()) {
                    self.place(sq, Piece::new(PieceKind::Pawn, color));
                }
                if let Some(sq) = Square::new(file, color.home_rank()) {
                    self.place(sq, Piece::new(BACK_RANK[file as usize], color));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
