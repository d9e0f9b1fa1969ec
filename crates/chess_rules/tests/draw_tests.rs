//! Stalemate and draw-by-agreement, both at the board level and through a
//! running game.

use chess_rules::{
    fen, is_checkmate, is_king_in_check, is_stalemate, legal_moves, ChessError, Color, Game,
    GameState, Player,
};

fn game_from(fen: &str) -> Game {
    Game::from_fen(
        Player::human("White", Color::White),
        Player::human("Black", Color::Black),
        fen,
    )
    .unwrap()
}

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn stalemate_king_in_corner() {
    let setup = fen::parse("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(legal_moves(&setup.board, Color::Black).is_empty());
    assert!(!is_king_in_check(&setup.board, Color::Black));
    assert!(is_stalemate(&setup.board, Color::Black));
}

#[test]
fn stalemate_king_and_pawn_endgame() {
    let setup = fen::parse("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(is_stalemate(&setup.board, Color::Black));
    assert!(!is_checkmate(&setup.board, Color::Black));
}

#[test]
fn stalemate_only_applies_to_side_to_move() {
    let setup = fen::parse("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(!is_stalemate(&setup.board, Color::White));
}

#[test]
fn stalemated_game_is_a_draw() {
    let mut game = game_from("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(game.state(), GameState::Stalemate);
    assert_eq!(game.winner(), None);
    assert_eq!(game.result_tag(), "1/2-1/2");
    assert!(matches!(game.play("Kh8"), Err(ChessError::GameOver(GameState::Stalemate))));
}

// =============================================================================
// Checkmate versus stalemate
// =============================================================================

#[test]
fn checkmate_is_not_stalemate() {
    let setup =
        fen::parse("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4").unwrap();
    assert!(is_checkmate(&setup.board, Color::Black));
    assert!(!is_stalemate(&setup.board, Color::Black));
}

#[test]
fn check_is_not_checkmate() {
    let setup =
        fen::parse("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();
    assert!(is_king_in_check(&setup.board, Color::Black));
    assert!(!is_checkmate(&setup.board, Color::Black));
    assert!(!is_stalemate(&setup.board, Color::Black));
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn draw_by_agreement_ends_the_game() {
    let mut game = game_from(fen::STARTING_FEN);
    game.play("e4").unwrap();
    game.offer_draw(Color::Black).unwrap();
    game.accept_draw(Color::White).unwrap();

    assert_eq!(game.state(), GameState::DrawByAgreement);
    assert_eq!(game.result_tag(), "1/2-1/2");
    assert!(game.is_over());
    assert!(matches!(game.play("e5"), Err(ChessError::GameOver(_))));
    assert!(matches!(game.offer_draw(Color::White), Err(ChessError::GameOver(_))));
}

#[test]
fn declined_offer_keeps_playing() {
    let mut game = game_from(fen::STARTING_FEN);
    game.offer_draw(Color::White).unwrap();
    game.decline_draw(Color::Black).unwrap();
    assert_eq!(game.draw_offer(), None);
    assert!(matches!(game.accept_draw(Color::Black), Err(ChessError::NoDrawOffer)));
    assert_eq!(game.state(), GameState::Ongoing);
}
