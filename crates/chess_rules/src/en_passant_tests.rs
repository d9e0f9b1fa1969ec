use super::*;
use crate::fen;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn board(fen: &str) -> Board {
    fen::parse(fen).unwrap().board
}

#[test]
fn target_only_after_double_step() {
    let double = Move::new(sq("e7"), sq("e5"), PieceKind::Pawn, Color::Black);
    assert_eq!(target_after(&double), Some(sq("e6")));

    let single = Move::new(sq("e7"), sq("e6"), PieceKind::Pawn, Color::Black);
    assert_eq!(target_after(&single), None);

    let rook = Move::new(sq("a1"), sq("a3"), PieceKind::Rook, Color::White);
    assert_eq!(target_after(&rook), None);
}

#[test]
fn captured_pawn_sits_beside_the_capturer() {
    let mv = Move::new(sq("d5"), sq("e6"), PieceKind::Pawn, Color::White);
    assert_eq!(captured_square(&mv), Some(sq("e5")));
}

#[test]
fn capture_requires_matching_board_target() {
    let b = board("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
    let mv = en_passant_move(&b, sq("d5"), Color::White).unwrap();
    assert_eq!(mv.to, sq("e6"));
    assert!(mv.flags.en_passant);

    let stale = board("4k3/8/8/3Pp3/8/8/8/4K3 w - - 0 1");
    assert!(en_passant_move(&stale, sq("d5"), Color::White).is_none());

    // Only pawns adjacent to the target may take
    let far = board("4k3/8/8/1P2p3/8/8/8/4K3 w - e6 0 1");
    assert!(en_passant_move(&far, sq("b5"), Color::White).is_none());
}

#[test]
fn apply_removes_the_passed_pawn() {
    let mut b = board("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1");
    let mv = en_passant_move(&b, sq("d5"), Color::White).unwrap();
    let captured = apply_en_passant(&mut b, &mv).unwrap();
    assert_eq!(captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert!(b.is_empty(sq("e5")));
    assert!(b.is_empty(sq("d5")));
    assert_eq!(b.piece_at(sq("e6")).unwrap().color, Color::White);
}
