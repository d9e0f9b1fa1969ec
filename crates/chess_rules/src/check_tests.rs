use super::*;
use crate::fen;

fn board(fen: &str) -> Board {
    fen::parse(fen).unwrap().board
}

#[test]
fn startpos_is_quiet() {
    let b = Board::standard();
    for color in [Color::White, Color::Black] {
        assert!(!is_king_in_check(&b, color));
        assert!(has_any_legal_move(&b, color));
        assert!(!is_checkmate(&b, color));
        assert!(!is_stalemate(&b, color));
    }
    assert_eq!(legal_moves(&b, Color::White).len(), 20);
    assert_eq!(legal_moves(&b, Color::Black).len(), 20);
}

#[test]
fn scholars_mate_is_checkmate() {
    let b = board("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(is_king_in_check(&b, Color::Black));
    assert!(is_checkmate(&b, Color::Black));
    assert!(!is_stalemate(&b, Color::Black));
    assert!(legal_moves(&b, Color::Black).is_empty());
}

#[test]
fn stalemate_king_in_corner() {
    let b = board("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(is_stalemate(&b, Color::Black));
    assert!(!is_checkmate(&b, Color::Black));
}

#[test]
fn stalemate_king_and_pawn() {
    let b = board("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(is_stalemate(&b, Color::Black));
}

#[test]
fn check_with_escape_is_neither() {
    let b = board("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    assert!(is_king_in_check(&b, Color::White));
    assert!(!is_checkmate(&b, Color::White));
    assert!(!is_stalemate(&b, Color::White));
}

#[test]
fn en_passant_counts_as_a_legal_move() {
    // Without the capture on d6 White would be stalemated
    let b = board("k5r1/8/4p3/3pP3/8/7p/7P/7K w - d6 0 1");
    let moves = legal_moves(&b, Color::White);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].flags.en_passant);
    assert!(!is_stalemate(&b, Color::White));

    let without = board("k5r1/8/4p3/3pP3/8/7p/7P/7K w - - 0 1");
    assert!(is_stalemate(&without, Color::White));
}

#[test]
fn exclusive_classification() {
    let fens = [
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "4k3/8/8/8/8/8/8/r3K3 w - - 0 1",
    ];
    for fen in fens {
        let setup = fen::parse(fen).unwrap();
        let (b, c) = (setup.board, setup.side_to_move);
        let classes = [
            is_checkmate(&b, c),
            is_stalemate(&b, c),
            has_any_legal_move(&b, c),
        ];
        assert_eq!(classes.iter().filter(|&&x| x).count(), 1, "{fen}");
    }
}
