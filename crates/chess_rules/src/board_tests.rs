use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn standard_position_layout() {
    let b = Board::standard();
    assert_eq!(b.pieces().count(), 32);
    assert_eq!(b.king_square(Color::White), Some(sq("e1")));
    assert_eq!(b.king_square(Color::Black), Some(sq("e8")));
    assert_eq!(
        b.piece_at(sq("d8")),
        Some(Piece::new(PieceKind::Queen, Color::Black))
    );
    assert!(b.is_empty(sq("e4")));
    assert!(b.en_passant().is_none());
}

#[test]
fn move_piece_returns_capture_and_marks_moved() {
    let mut b = Board::empty();
    b.place(sq("a1"), Piece::new(PieceKind::Rook, Color::White));
    b.place(sq("a8"), Piece::new(PieceKind::Rook, Color::Black));

    let captured = b.move_piece(sq("a1"), sq("a8")).unwrap();
    assert_eq!(captured, Some(Piece::new(PieceKind::Rook, Color::Black)));
    let rook = b.piece_at(sq("a8")).unwrap();
    assert_eq!(rook.color, Color::White);
    assert!(rook.has_moved);
    assert!(b.is_empty(sq("a1")));
}

#[test]
fn move_piece_from_empty_square_fails() {
    let mut b = Board::standard();
    let before = b.clone();
    assert!(matches!(
        b.move_piece(sq("e4"), sq("e5")),
        Err(ChessError::EmptySquare(_))
    ));
    assert_eq!(b, before);
}

#[test]
fn king_cache_follows_moves_and_removal() {
    let mut b = Board::empty();
    b.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
    b.move_piece(sq("e1"), sq("f2")).unwrap();
    assert_eq!(b.king_square(Color::White), Some(sq("f2")));
    b.remove(sq("f2"));
    assert_eq!(b.king_square(Color::White), None);
}

#[test]
fn placing_second_king_overwrites_cache() {
    let mut b = Board::empty();
    b.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
    b.place(sq("a4"), Piece::new(PieceKind::King, Color::White));
    assert_eq!(b.king_square(Color::White), Some(sq("a4")));
}

#[test]
fn predicates() {
    let b = Board::standard();
    assert!(b.is_friendly(sq("a2"), Color::White));
    assert!(b.is_enemy(sq("a7"), Color::White));
    assert!(!b.is_enemy(sq("a4"), Color::White));
    assert!(!b.is_friendly(sq("a4"), Color::White));
}

#[test]
fn clone_is_independent() {
    let original = Board::standard();
    let mut copy = original.clone();
    copy.move_piece(sq("e2"), sq("e4")).unwrap();
    copy.set_en_passant(Some(sq("e3")));
    assert!(original.piece_at(sq("e2")).is_some());
    assert!(original.en_passant().is_none());
}

#[test]
fn clear_and_reset() {
    let mut b = Board::standard();
    b.set_en_passant(Some(sq("e3")));
    b.clear();
    assert_eq!(b.pieces().count(), 0);
    assert_eq!(b.king_square(Color::White), None);
    assert!(b.en_passant().is_none());
    b.reset();
    assert_eq!(b, Board::standard());
}
