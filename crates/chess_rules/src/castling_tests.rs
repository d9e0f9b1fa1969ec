use super::*;
use crate::fen;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    fen::parse(fen).unwrap().board
}

#[test]
fn both_sides_available_on_open_back_rank() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    for color in [Color::White, Color::Black] {
        assert!(can_castle(&b, color, CastleSide::King));
        assert!(can_castle(&b, color, CastleSide::Queen));
    }
}

#[test]
fn blocked_path_prevents_castling() {
    // Knight on b1 only blocks the long side
    let b = board("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
    assert!(!can_castle(&b, Color::White, CastleSide::Queen));
    assert!(can_castle(&b, Color::White, CastleSide::King));
}

#[test]
fn attacked_squares_prevent_castling() {
    // In check
    let b = board("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!can_castle(&b, Color::White, CastleSide::King));
    assert!(!can_castle(&b, Color::White, CastleSide::Queen));

    // Crossing d1
    let b = board("3r2k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!can_castle(&b, Color::White, CastleSide::Queen));
    assert!(can_castle(&b, Color::White, CastleSide::King));

    // Landing on g1
    let b = board("6rk/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(!can_castle(&b, Color::White, CastleSide::King));

    // b1 may be attacked, the king never crosses it
    let b = board("1r4k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(can_castle(&b, Color::White, CastleSide::Queen));
}

#[test]
fn moved_pieces_cannot_castle_even_after_returning() {
    let mut b = Board::empty();
    b.place(sq("e1"), Piece::new(PieceKind::King, Color::White));
    b.place(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
    b.place(sq("e8"), Piece::new(PieceKind::King, Color::Black));
    assert!(can_castle(&b, Color::White, CastleSide::King));

    b.move_piece(sq("h1"), sq("h2")).unwrap();
    b.move_piece(sq("h2"), sq("h1")).unwrap();
    assert!(!can_castle(&b, Color::White, CastleSide::King));
}

#[test]
fn castle_move_and_application() {
    let mut b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    let short = castle_move(&b, Color::White, CastleSide::King).unwrap();
    assert_eq!((short.from, short.to), (sq("e1"), sq("g1")));
    assert!(short.flags.castling);
    apply_castle(&mut b, &short).unwrap();
    assert_eq!(b.piece_at(sq("g1")).unwrap().kind, PieceKind::King);
    assert_eq!(b.piece_at(sq("f1")).unwrap().kind, PieceKind::Rook);
    assert!(b.is_empty(sq("e1")));
    assert!(b.is_empty(sq("h1")));
    assert_eq!(b.king_square(Color::White), Some(sq("g1")));

    let long = castle_move(&b, Color::Black, CastleSide::Queen).unwrap();
    apply_castle(&mut b, &long).unwrap();
    assert_eq!(b.piece_at(sq("c8")).unwrap().kind, PieceKind::King);
    assert_eq!(b.piece_at(sq("d8")).unwrap().kind, PieceKind::Rook);
    assert!(b.is_empty(sq("a8")));
}

#[test]
fn castle_side_of_move() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let long = castle_move(&b, Color::White, CastleSide::Queen).unwrap();
    assert_eq!(CastleSide::of(&long), CastleSide::Queen);
    assert_eq!(CastleSide::of(&long).notation(), "O-O-O");
}
