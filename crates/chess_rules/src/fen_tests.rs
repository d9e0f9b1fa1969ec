use super::*;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn starting_fen_matches_standard_board() {
    let setup = parse(STARTING_FEN).unwrap();
    assert_eq!(setup.board, Board::standard());
    assert_eq!(setup.side_to_move, Color::White);
    assert_eq!(to_fen(&Board::standard(), Color::White, 0, 1), STARTING_FEN);
}

#[test]
fn round_trips_complex_positions() {
    for fen in [
        KIWIPETE,
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
        "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 3 20",
    ] {
        let setup = parse(fen).unwrap();
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let half: u32 = parts[4].parse().unwrap();
        let full: u32 = parts[5].parse().unwrap();
        assert_eq!(to_fen(&setup.board, setup.side_to_move, half, full), fen);
    }
}

#[test]
fn castling_field_drives_moved_flags() {
    let setup = parse("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    let b = &setup.board;
    let at = |s: &str| b.piece_at(s.parse().unwrap()).unwrap();
    assert!(!at("e1").has_moved);
    assert!(!at("h1").has_moved);
    assert!(at("a1").has_moved);
    assert!(!at("e8").has_moved);
    assert!(!at("a8").has_moved);
    assert!(at("h8").has_moved);

    let none = parse("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    assert!(none.board.piece_at("e1".parse().unwrap()).unwrap().has_moved);
}

#[test]
fn en_passant_field_sets_board_target() {
    let setup = parse("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1").unwrap();
    assert_eq!(setup.board.en_passant(), Some("e6".parse().unwrap()));
}

#[test]
fn counters_are_optional() {
    let setup = parse("4k3/8/8/8/8/8/8/4K3 b").unwrap();
    assert_eq!(setup.side_to_move, Color::Black);
}

#[test]
fn rejects_malformed_input() {
    for fen in [
        "",
        "8/8/8/8/8/8/8 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
        "4k3/8/8/8/8/8/8/4K2Z w - - 0 1",
        "4k3/8/8/8/8/8/8/4K4 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
        "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
        "4k3/8/8/8/8/8/8/4K3 w - z9 0 1",
    ] {
        assert!(
            matches!(parse(fen), Err(ChessError::InvalidFen(_))),
            "accepted {fen:?}"
        );
    }
}

#[test]
fn both_kings_are_required() {
    assert!(matches!(
        parse("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(ChessError::MissingKing(Color::Black))
    ));
}
