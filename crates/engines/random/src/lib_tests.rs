use std::time::Duration;

use chess_rules::{resolve, Color, Game, Player, STARTING_FEN};

use super::*;

fn request(fen: &str) -> EngineRequest {
    let setup = fen::parse(fen).unwrap();
    EngineRequest {
        fen: fen.to_string(),
        side_to_move: setup.side_to_move,
        depth: 1,
        move_time: Some(Duration::from_millis(10)),
    }
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let answer = engine.best_move(&request(STARTING_FEN)).unwrap();

    let setup = fen::parse(STARTING_FEN).unwrap();
    let mv = resolve(&setup.board, Color::White, &answer).unwrap();
    assert!(legal_moves(&setup.board, Color::White).contains(&mv));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let fen = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";

    assert!(matches!(engine.best_move(&request(fen)), Err(EngineError::NoMove)));
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let fen = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";

    assert!(matches!(engine.best_move(&request(fen)), Err(EngineError::NoMove)));
}

#[test]
fn same_seed_same_answers() {
    let mut a = RandomEngine::with_seed(7);
    let mut b = RandomEngine::with_seed(7);
    for _ in 0..5 {
        assert_eq!(
            a.best_move(&request(STARTING_FEN)).unwrap(),
            b.best_move(&request(STARTING_FEN)).unwrap()
        );
    }
}

#[test]
fn bad_fen_is_a_protocol_error() {
    let mut engine = RandomEngine::new();
    let req = EngineRequest {
        fen: "not a position".to_string(),
        side_to_move: Color::White,
        depth: 1,
        move_time: None,
    };
    assert!(matches!(engine.best_move(&req), Err(EngineError::Protocol(_))));
}

#[test]
fn plays_a_whole_game_against_itself() {
    let mut engine = RandomEngine::with_seed(42);
    let mut game = Game::new(
        Player::engine("Random", Color::White),
        Player::engine("Random", Color::Black),
    );
    for _ in 0..80 {
        if game.is_over() {
            break;
        }
        game.play_engine_move(&mut engine, 1).unwrap();
    }
    assert!(!game.history().is_empty());
}
